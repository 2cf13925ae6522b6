//! JSON-RPC 2.0 frame types for the stdio transport

use serde::Deserialize;
use serde_json::{Value, json};

/// Invalid JSON was received.
pub const PARSE_ERROR: i64 = -32700;
/// Method exists but the params were malformed (e.g. unknown tool).
pub const INVALID_PARAMS: i64 = -32602;
/// Unknown method.
pub const METHOD_NOT_FOUND: i64 = -32601;

/// One incoming JSON-RPC request or notification.
///
/// A missing or `null` `id` marks a notification: it gets no response.
#[derive(Debug, Deserialize)]
pub struct Request {
    /// Request id; `None` for notifications.
    #[serde(default)]
    pub id: Option<Value>,
    /// Method name, e.g. `tools/call`.
    pub method: String,
    /// Method parameters; defaults to `null` when absent.
    #[serde(default)]
    pub params: Value,
}

/// Build a success response frame.
#[must_use]
pub fn result_frame(id: Option<Value>, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    })
}

/// Build an error response frame.
#[must_use]
pub fn error_frame(id: Option<Value>, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message }
    })
}
