//! Behavioural steps for configuration loading and lookups.
#![allow(
    clippy::expect_used,
    clippy::needless_pass_by_value,
    reason = "simplify test failure output"
)]

use cucumber::gherkin::Step;
use cucumber::{World, given, then, when};
use std::path::PathBuf;

use ircd::config::{ConfigError, ConfigStore};

#[derive(Debug, Default, World)]
pub struct ConfigWorld {
    store: ConfigStore,
    path: Option<PathBuf>,
    result: Option<Result<(), ConfigError>>,
}

#[given("a configuration document:")]
fn configuration_document(world: &mut ConfigWorld, step: &Step) {
    let text = step.docstring.as_deref().expect("docstring");
    world.store.load_str(text).expect("valid YAML");
}

#[given("an empty configuration document")]
fn empty_configuration_document(world: &mut ConfigWorld) {
    world.store.load_str("").expect("empty YAML is valid");
}

#[given("a missing configuration file")]
fn missing_configuration_file(world: &mut ConfigWorld) {
    world.path = Some(PathBuf::from("/nonexistent/nowhere.yaml"));
}

#[when(regex = r#"^the text "(.*)" is loaded$"#)]
fn text_is_loaded(world: &mut ConfigWorld, text: String) {
    world.result = Some(world.store.load_str(&text));
}

#[when("the file is loaded")]
fn file_is_loaded(world: &mut ConfigWorld) {
    let path = world.path.as_ref().expect("path set");
    world.result = Some(world.store.load_file(path));
}

#[then(regex = r#"^the integer at "(.*)" is (-?\d+)$"#)]
fn integer_is(world: &mut ConfigWorld, path: String, expected: i64) {
    let value: i64 = world.store.get_nested(&path).expect("strict lookup");
    assert_eq!(value, expected);
}

#[then(regex = r#"^the integer at "(.*)" with default (-?\d+) is (-?\d+)$"#)]
fn integer_with_default_is(world: &mut ConfigWorld, path: String, default: i64, expected: i64) {
    assert_eq!(world.store.get_nested_or(&path, default), expected);
}

#[then(regex = r#"^the path "(.*)" is (present|absent)$"#)]
fn path_presence(world: &mut ConfigWorld, path: String, presence: String) {
    assert_eq!(world.store.has_nested_path(&path), presence == "present");
}

#[then(regex = r#"^looking up the integer at "(.*)" reports a (missing key|type mismatch)$"#)]
fn strict_lookup_fails(world: &mut ConfigWorld, path: String, kind: String) {
    match (world.store.get_nested::<i64>(&path), kind.as_str()) {
        (Err(ConfigError::KeyNotFound { .. }), "missing key")
        | (Err(ConfigError::TypeMismatch { .. }), "type mismatch") => {}
        (other, _) => panic!("expected {kind}, got {other:?}"),
    }
}

#[then(regex = r"^loading fails with a (parse|load) error$")]
fn loading_fails(world: &mut ConfigWorld, kind: String) {
    match (world.result.take(), kind.as_str()) {
        (Some(Err(ConfigError::Parse { .. })), "parse")
        | (Some(Err(ConfigError::Load { .. })), "load") => {}
        (other, _) => panic!("expected {kind} error, got {other:?}"),
    }
}
