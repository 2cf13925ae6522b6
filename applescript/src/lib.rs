//! AppleScript plumbing for the reminders bridge
//!
//! This crate owns everything that is AppleScript-specific but not
//! reminders-specific:
//!
//! - `escape`: interpolation of untrusted strings into AppleScript
//!   string literals
//! - `date`: one-way formatting of timestamps into AppleScript date
//!   literals, and best-effort parsing of the date strings AppleScript
//!   returns
//! - `run`: the `osascript` subprocess runner behind the [`ScriptRunner`]
//!   trait
//! - `mock`: a scripted runner for testing callers without `osascript`
//!
//! ## Design Principles
//!
//! **Two escaping layers, never conflated**: values are escaped for the
//! AppleScript string-literal grammar by [`escape::escape_literal`]; the
//! subprocess layer needs no second escaping pass because the script is
//! delivered as a single argv element to `osascript -e`, so no shell ever
//! re-parses it.
//!
//! **Best-effort date parsing is explicit**: AppleScript renders dates in
//! a locale-dependent format with no machine-readable contract. Parsing
//! returns [`date::AppleDate`], which preserves the raw text when it
//! cannot be normalized instead of silently discarding it.

pub mod date;
pub mod escape;
pub mod mock;
pub mod run;

pub use date::AppleDate;
pub use escape::escape_literal;
pub use mock::ScriptedRunner;
pub use run::{ExecError, Osascript, ScriptRunner};
