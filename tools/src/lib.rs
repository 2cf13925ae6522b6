//! Tool-calling surface over the reminders bridge
//!
//! This crate turns the five bridge operations into schema-typed tools a
//! tool-calling client can discover and invoke:
//!
//! - `types`: the [`Tool`] definition, executor signature, and error
//!   shape shared with the transport
//! - `reminders`: the five `(Tool, ToolExecutorFn)` constructors
//! - `registry`: thread-safe storage and execution-by-name
//!
//! ## Design Principles
//!
//! Tools return structured JSON with standard formats (ISO-8601 for
//! normalized dates) and do not assume any particular calling client.
//! Bridge failures surface as [`ToolError`] with the native diagnostic
//! attached; lookup misses surface as `false` results inside the JSON,
//! never as errors.

pub mod registry;
pub mod reminders;
pub mod types;

pub use registry::ToolRegistry;
pub use types::{Tool, ToolError, ToolExecutorFn, ToolResult};
