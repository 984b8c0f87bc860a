//! Behavioural steps for threshold filtering in the leveled logger.
#![allow(
    clippy::needless_pass_by_value,
    reason = "cucumber passes owned captures"
)]

use cucumber::{World, given, then, when};

use ircd::logging::LeveledLogger;
use ircd_lib::Level;
use test_support::CapturedOutput;

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct LoggerWorld {
    logger: LeveledLogger,
    output: CapturedOutput,
}

impl LoggerWorld {
    fn new() -> Self {
        let output = CapturedOutput::default();
        Self {
            logger: LeveledLogger::with_writer(output.clone()),
            output,
        }
    }
}

#[given(regex = r"^a logger with threshold ([A-Z]+)$")]
fn logger_with_threshold(world: &mut LoggerWorld, level: Level) {
    world.logger.set_level(level);
}

#[when(regex = r#"^"(.*)" is logged at ([A-Z]+)$"#)]
fn message_is_logged(world: &mut LoggerWorld, message: String, level: Level) {
    world
        .logger
        .log(level, format_args!("{message}"))
        .unwrap_or_else(|e| panic!("log failed: {e}"));
}

#[then("no output is written")]
fn no_output(world: &mut LoggerWorld) {
    assert!(world.output.contents().is_empty());
}

#[then(regex = r"^(\d+) lines? (?:is|are) written$")]
fn lines_written(world: &mut LoggerWorld, count: usize) {
    assert_eq!(world.output.lines().len(), count);
}

#[then(regex = r#"^the last line is tagged ([A-Z]+) with message "(.*)"$"#)]
fn last_line_tagged(world: &mut LoggerWorld, level: Level, message: String) {
    let lines = world.output.lines();
    let last = lines.last().unwrap_or_else(|| panic!("no lines written"));
    assert!(
        last.ends_with(&format!(" [{level}] {message}")),
        "unexpected line: {last}"
    );
}
