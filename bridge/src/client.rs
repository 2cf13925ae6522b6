//! The typed client combining build → run → parse
//!
//! [`Reminders`] is generic over its [`ScriptRunner`] so the whole bridge
//! can be exercised against
//! [`ScriptedRunner`](reminders_mcp_applescript::ScriptedRunner) in tests
//! and `osascript` in production. Each operation is one subprocess round
//! trip with no cross-call state.

use reminders_mcp_applescript::{ExecError, ScriptRunner};
use thiserror::Error;

use crate::model::Reminder;
use crate::parse;
use crate::script::{self, BuildError};

/// A failed bridge operation.
///
/// Build and execution failures are fatal to the single call and carry
/// the underlying diagnostic verbatim; parse ambiguities never reach
/// here (see [`crate::parse`]).
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Invalid input rejected before any subprocess ran.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The `osascript` invocation failed.
    #[error(transparent)]
    Exec(#[from] ExecError),
}

/// Typed reminder operations over a script runner.
///
/// ```no_run
/// use reminders_mcp_applescript::Osascript;
/// use reminders_mcp_bridge::Reminders;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let reminders = Reminders::new(Osascript::new());
/// reminders.create("Groceries", "Buy milk", None, None).await?;
/// let items = reminders.reminders("Groceries").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Reminders<R> {
    runner: R,
}

impl<R: ScriptRunner> Reminders<R> {
    /// Create a client over `runner`.
    pub const fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Names of all reminder lists in the native store.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Exec`] when `osascript` fails.
    pub async fn lists(&self) -> Result<Vec<String>, BridgeError> {
        tracing::debug!("listing reminder lists");
        let raw = self.runner.run(&script::list_names_script()).await?;
        Ok(parse::parse_list_names(&raw))
    }

    /// Every reminder in `list_name`; empty list yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError`] for a blank list name or a failed
    /// `osascript` invocation (including an unknown list, which the
    /// native side reports as an error).
    pub async fn reminders(&self, list_name: &str) -> Result<Vec<Reminder>, BridgeError> {
        tracing::debug!(list = %list_name, "listing reminders");
        let raw = self
            .runner
            .run(&script::list_reminders_script(list_name)?)
            .await?;
        Ok(parse::parse_reminders(&raw))
    }

    /// Create a reminder; `true` when the native side confirmed it.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError`] for blank required names or a failed
    /// invocation.
    pub async fn create(
        &self,
        list_name: &str,
        title: &str,
        due_date: Option<&str>,
        notes: Option<&str>,
    ) -> Result<bool, BridgeError> {
        tracing::debug!(list = %list_name, title = %title, "creating reminder");
        let raw = self
            .runner
            .run(&script::create_script(list_name, title, due_date, notes)?)
            .await?;
        Ok(parse::parse_bool(&raw))
    }

    /// Mark the first reminder named `reminder_name` completed.
    ///
    /// `Ok(false)` means no reminder matched — an expected outcome, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError`] for blank required names or a failed
    /// invocation.
    pub async fn complete(
        &self,
        list_name: &str,
        reminder_name: &str,
    ) -> Result<bool, BridgeError> {
        tracing::debug!(list = %list_name, reminder = %reminder_name, "completing reminder");
        let raw = self
            .runner
            .run(&script::complete_script(list_name, reminder_name)?)
            .await?;
        Ok(parse::parse_bool(&raw))
    }

    /// Delete the first reminder named `reminder_name`.
    ///
    /// `Ok(false)` means no reminder matched.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError`] for blank required names or a failed
    /// invocation.
    pub async fn delete(&self, list_name: &str, reminder_name: &str) -> Result<bool, BridgeError> {
        tracing::debug!(list = %list_name, reminder = %reminder_name, "deleting reminder");
        let raw = self
            .runner
            .run(&script::delete_script(list_name, reminder_name)?)
            .await?;
        Ok(parse::parse_bool(&raw))
    }
}
