//! Test helpers for managing environment variables.
//!
//! [`EnvGuard`] sets or removes any number of variables and restores every
//! one of them to its previous state on drop. Tests using it must run
//! serially (`#[serial_test::serial]`), as the process environment is shared.

#[derive(Debug, Default)]
#[must_use = "variables are restored when the guard is dropped"]
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value` until the guard is dropped.
    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.save(key);
        // SAFETY: callers run serially, so nothing else reads the environment.
        unsafe { std::env::set_var(key, value) };
        self
    }

    /// Remove `key` until the guard is dropped.
    pub fn remove(mut self, key: &str) -> Self {
        self.save(key);
        // SAFETY: callers run serially, so nothing else reads the environment.
        unsafe { std::env::remove_var(key) };
        self
    }

    fn save(&mut self, key: &str) {
        self.saved.push((key.to_owned(), std::env::var(key).ok()));
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // Restore in reverse so a key touched twice ends at its first value.
        for (key, original) in self.saved.drain(..).rev() {
            match original {
                // SAFETY: see `EnvGuard::set`.
                Some(value) => unsafe { std::env::set_var(&key, value) },
                // SAFETY: see `EnvGuard::remove`.
                None => unsafe { std::env::remove_var(&key) },
            }
        }
    }
}
