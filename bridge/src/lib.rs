//! The reminders automation bridge
//!
//! Translates typed reminder operations into AppleScript against the
//! macOS Reminders application and parses the flat text `osascript`
//! returns into typed records. Three layers, bottom to top:
//!
//! - `script`: pure builders producing complete AppleScript text from
//!   typed arguments, with every interpolated value escaped
//! - `parse`: parsers for the comma/pipe-delimited output shapes,
//!   degrading gracefully where the native format is ambiguous
//! - `client`: [`client::Reminders`], which wires build → run → parse
//!   over any [`reminders_mcp_applescript::ScriptRunner`]
//!
//! The bridge holds no state between calls: every read re-queries the
//! native store and every write either applies or fails as one
//! `osascript` invocation.

pub mod client;
pub mod model;
pub mod parse;
pub mod script;

pub use client::{BridgeError, Reminders};
pub use model::Reminder;
pub use script::BuildError;
