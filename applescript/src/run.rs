//! `osascript` subprocess runner
//!
//! The entire script is handed to `osascript -e` as one argv element via
//! [`tokio::process::Command`], so no shell ever parses it: quotes,
//! backslashes, and newlines inside the script cannot terminate an outer
//! quoting layer because there is none. AppleScript-level escaping is the
//! builder's job (see [`crate::escape`]); this layer only spawns, waits,
//! and reports.
//!
//! No retries: `osascript` failures are typically deterministic (unknown
//! list, automation permissions) and retrying changes no state.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;

/// Errors from a single script invocation.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The interpreter process could not be started.
    #[error("failed to spawn {binary}: {source}")]
    Spawn {
        /// Interpreter binary that was invoked
        binary: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The interpreter exited non-zero; stderr is carried verbatim.
    #[error("osascript exited with {status}: {stderr}")]
    CommandFailed {
        /// Exit status of the interpreter process
        status: ExitStatus,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The configured deadline elapsed before the interpreter exited.
    #[error("script did not finish within {limit:?}")]
    Timeout {
        /// The configured deadline
        limit: Duration,
    },

    /// The interpreter produced output that is not valid UTF-8.
    #[error("script output was not valid UTF-8")]
    OutputNotUtf8,
}

/// Something that can run a script and hand back its trimmed stdout.
///
/// The one seam between script construction and the operating system;
/// [`Osascript`] is the real implementation, [`crate::mock::ScriptedRunner`]
/// the test one.
pub trait ScriptRunner: Send + Sync {
    /// Run `script` to completion and return its trimmed standard output.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError`] if the interpreter cannot be spawned, exits
    /// non-zero, or (when configured) exceeds the deadline.
    fn run(&self, script: &str) -> impl Future<Output = Result<String, ExecError>> + Send;
}

/// Runs scripts through the `osascript` interpreter.
///
/// Create one with [`Osascript::new`], optionally configure it with the
/// builder methods, then call [`run`](ScriptRunner::run).
///
/// ```no_run
/// use reminders_mcp_applescript::{Osascript, ScriptRunner};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let runner = Osascript::new();
/// let names = runner.run(r#"tell application "Reminders" to name of lists"#).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Osascript {
    binary: PathBuf,
    timeout: Option<Duration>,
}

impl Osascript {
    /// Create a runner that invokes `osascript` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("osascript"),
            timeout: None,
        }
    }

    /// Override the interpreter binary.
    #[must_use]
    pub fn binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.binary = path.into();
        self
    }

    /// Set a deadline for each invocation.
    ///
    /// Off by default: a hung automation call is the surrounding
    /// transport's policy problem, but the knob is here when wanted.
    #[must_use]
    pub const fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }
}

impl Default for Osascript {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptRunner for Osascript {
    async fn run(&self, script: &str) -> Result<String, ExecError> {
        tracing::trace!(script_len = script.len(), "spawning osascript");

        let output = {
            let mut command = Command::new(&self.binary);
            command.arg("-e").arg(script).kill_on_drop(true);
            let pending = command.output();
            match self.timeout {
                Some(limit) => tokio::time::timeout(limit, pending)
                    .await
                    .map_err(|_| ExecError::Timeout { limit })?,
                None => pending.await,
            }
        }
        .map_err(|source| ExecError::Spawn {
            binary: self.binary.display().to_string(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(status = %output.status, "osascript failed");
            return Err(ExecError::CommandFailed {
                status: output.status,
                stderr,
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| ExecError::OutputNotUtf8)?;
        Ok(stdout.trim().to_string())
    }
}
