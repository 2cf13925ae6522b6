//! Scripted runner for testing and demonstration
//!
//! [`ScriptedRunner`] replays canned outputs instead of touching
//! `osascript`, and records every script it was asked to run so tests can
//! assert on the generated AppleScript. Useful for:
//!
//! - Testing the bridge and tools without a macOS host
//! - Demonstrating tool use in examples
//! - Reproducing parser edge cases with exact native output

use std::collections::VecDeque;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;
use std::sync::{Arc, Mutex};

use crate::run::{ExecError, ScriptRunner};

/// A [`ScriptRunner`] that pops pre-seeded responses in FIFO order.
///
/// With no seeded response left, it returns an empty output — the same
/// thing `osascript` prints for an empty AppleScript list.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRunner {
    responses: Arc<Mutex<VecDeque<Result<String, String>>>>,
    scripts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedRunner {
    /// Create a runner with no seeded responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a successful invocation returning `output`.
    #[allow(clippy::expect_used)]
    pub fn push_output(&self, output: &str) {
        self.responses
            .lock()
            .expect("scripted runner lock poisoned - indicates a panic in another thread")
            .push_back(Ok(output.to_string()));
    }

    /// Seed a failed invocation whose stderr is `stderr`.
    #[allow(clippy::expect_used)]
    pub fn push_failure(&self, stderr: &str) {
        self.responses
            .lock()
            .expect("scripted runner lock poisoned - indicates a panic in another thread")
            .push_back(Err(stderr.to_string()));
    }

    /// Every script passed to [`ScriptRunner::run`] so far, in order.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn scripts(&self) -> Vec<String> {
        self.scripts
            .lock()
            .expect("scripted runner lock poisoned - indicates a panic in another thread")
            .clone()
    }
}

impl ScriptRunner for ScriptedRunner {
    #[allow(clippy::expect_used)]
    async fn run(&self, script: &str) -> Result<String, ExecError> {
        self.scripts
            .lock()
            .expect("scripted runner lock poisoned - indicates a panic in another thread")
            .push(script.to_string());

        let next = self
            .responses
            .lock()
            .expect("scripted runner lock poisoned - indicates a panic in another thread")
            .pop_front();

        match next {
            Some(Ok(output)) => Ok(output),
            Some(Err(stderr)) => Err(ExecError::CommandFailed {
                status: ExitStatus::from_raw(1 << 8),
                stderr,
            }),
            None => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_outputs_in_order() {
        let runner = ScriptedRunner::new();
        runner.push_output("first");
        runner.push_output("second");

        assert_eq!(runner.run("a").await.expect("seeded"), "first");
        assert_eq!(runner.run("b").await.expect("seeded"), "second");
        assert_eq!(runner.scripts(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_exhausted_runner_returns_empty_output() {
        let runner = ScriptedRunner::new();
        assert_eq!(runner.run("a").await.expect("empty"), "");
    }

    #[tokio::test]
    async fn test_seeded_failure_surfaces_stderr() {
        let runner = ScriptedRunner::new();
        runner.push_failure("Reminders got an error: List not found");

        let error = runner.run("a").await.expect_err("seeded failure");
        assert!(error.to_string().contains("List not found"));
    }
}
