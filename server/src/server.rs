//! MCP request handling over the tool registry
//!
//! One newline-delimited JSON frame in, at most one frame out. Tool
//! execution failures are reported inside a successful `tools/call`
//! result with `isError: true` (the calling client treats that as tool
//! output); transport-level problems become JSON-RPC error frames.

use reminders_mcp_tools::ToolRegistry;
use serde_json::{Value, json};

use crate::rpc::{self, Request};

/// MCP protocol revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name reported in `initialize`.
pub const SERVER_NAME: &str = "apple-reminders";

/// Outcome of handling one frame.
#[derive(Debug)]
pub enum Handled {
    /// Write this frame back.
    Reply(Value),
    /// Notification or noise; write nothing.
    Silent,
    /// Write this frame back, then stop serving.
    Shutdown(Value),
}

/// Dispatches MCP methods to the tool registry.
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a server over a populated registry.
    #[must_use]
    pub const fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Handle one raw input line.
    pub async fn handle_line(&self, line: &str) -> Handled {
        let line = line.trim();
        if line.is_empty() {
            return Handled::Silent;
        }

        let request: Request = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unparseable frame");
                return Handled::Reply(rpc::error_frame(
                    None,
                    rpc::PARSE_ERROR,
                    &format!("parse error: {e}"),
                ));
            }
        };

        tracing::debug!(method = %request.method, "handling request");

        if request.id.is_none() {
            // Notifications (initialized, cancelled, ...) get no response.
            return Handled::Silent;
        }

        match request.method.as_str() {
            "initialize" => Handled::Reply(self.initialize(request)),
            "ping" => Handled::Reply(rpc::result_frame(request.id, json!({}))),
            "tools/list" => Handled::Reply(self.list_tools(request)),
            "tools/call" => Handled::Reply(self.call_tool(request).await),
            "shutdown" => Handled::Shutdown(rpc::result_frame(request.id, Value::Null)),
            _ => Handled::Reply(rpc::error_frame(
                request.id,
                rpc::METHOD_NOT_FOUND,
                "method not found",
            )),
        }
    }

    fn initialize(&self, request: Request) -> Value {
        let protocol = request.params["protocolVersion"]
            .as_str()
            .unwrap_or(PROTOCOL_VERSION);
        rpc::result_frame(
            request.id,
            json!({
                "protocolVersion": protocol,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        )
    }

    fn list_tools(&self, request: Request) -> Value {
        let tools: Vec<Value> = self
            .registry
            .get_tools()
            .into_iter()
            .map(|tool| {
                json!({
                    "name": tool.name,
                    "description": tool.description,
                    "inputSchema": tool.input_schema
                })
            })
            .collect();
        rpc::result_frame(request.id, json!({ "tools": tools }))
    }

    async fn call_tool(&self, request: Request) -> Value {
        let Some(name) = request.params["name"].as_str() else {
            return rpc::error_frame(request.id, rpc::INVALID_PARAMS, "missing tool name");
        };
        if self.registry.get_tool(name).is_none() {
            return rpc::error_frame(
                request.id,
                rpc::INVALID_PARAMS,
                &format!("unknown tool: {name}"),
            );
        }

        let arguments = match &request.params["arguments"] {
            Value::Null => json!({}),
            other => other.clone(),
        };

        match self.registry.execute(name, arguments.to_string()).await {
            Ok(text) => rpc::result_frame(
                request.id,
                json!({
                    "content": [{ "type": "text", "text": text }],
                    "isError": false
                }),
            ),
            Err(error) => {
                tracing::debug!(tool = %name, error = %error, "tool call failed");
                rpc::result_frame(
                    request.id,
                    json!({
                        "content": [{ "type": "text", "text": error.message }],
                        "isError": true
                    }),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reminders_mcp_applescript::ScriptedRunner;
    use reminders_mcp_bridge::Reminders;
    use reminders_mcp_tools::reminders::{list_reminder_lists_tool, list_reminders_tool};

    fn server() -> (McpServer, ScriptedRunner) {
        let runner = ScriptedRunner::new();
        let client = Reminders::new(runner.clone());
        let registry = ToolRegistry::new();
        let (tool, executor) = list_reminder_lists_tool(client.clone());
        registry.register(tool, executor);
        let (tool, executor) = list_reminders_tool(client);
        registry.register(tool, executor);
        (McpServer::new(registry), runner)
    }

    fn reply(handled: Handled) -> Value {
        match handled {
            Handled::Reply(value) | Handled::Shutdown(value) => value,
            Handled::Silent => unreachable!("expected a reply"),
        }
    }

    #[tokio::test]
    async fn test_initialize_reports_server_info() {
        let (server, _runner) = server();
        let frame = reply(
            server
                .handle_line(
                    r#"{"jsonrpc":"2.0","id":0,"method":"initialize","params":{"protocolVersion":"2024-11-05"}}"#,
                )
                .await,
        );
        assert_eq!(frame["result"]["serverInfo"]["name"], "apple-reminders");
        assert_eq!(frame["result"]["protocolVersion"], "2024-11-05");
        assert!(frame["result"]["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_tools_list_uses_camel_case_schema_key() {
        let (server, _runner) = server();
        let frame = reply(
            server
                .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#)
                .await,
        );
        let tools = frame["result"]["tools"].as_array().expect("tools array");
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "list_reminder_lists");
        assert!(tools[0]["inputSchema"].is_object());
    }

    #[tokio::test]
    async fn test_tools_call_happy_path() {
        let (server, runner) = server();
        runner.push_output("Groceries, Work");
        let frame = reply(
            server
                .handle_line(
                    r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"list_reminder_lists","arguments":{}}}"#,
                )
                .await,
        );
        assert_eq!(frame["result"]["isError"], false);
        let text = frame["result"]["content"][0]["text"]
            .as_str()
            .expect("text content");
        let output: Value = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(output["lists"], json!(["Groceries", "Work"]));
    }

    #[tokio::test]
    async fn test_tools_call_failure_is_error_content() {
        let (server, runner) = server();
        runner.push_failure("Reminders got an error: List not found");
        let frame = reply(
            server
                .handle_line(
                    r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"list_reminders","arguments":{"listName":"Nope"}}}"#,
                )
                .await,
        );
        assert_eq!(frame["result"]["isError"], true);
        let text = frame["result"]["content"][0]["text"]
            .as_str()
            .expect("text content");
        assert!(text.contains("List not found"));
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let (server, _runner) = server();
        let frame = reply(
            server
                .handle_line(
                    r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"nope"}}"#,
                )
                .await,
        );
        assert_eq!(frame["error"]["code"], json!(rpc::INVALID_PARAMS));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let (server, _runner) = server();
        let frame = reply(
            server
                .handle_line(r#"{"jsonrpc":"2.0","id":5,"method":"resources/list"}"#)
                .await,
        );
        assert_eq!(frame["error"]["code"], json!(rpc::METHOD_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_notifications_are_silent() {
        let (server, _runner) = server();
        let handled = server
            .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;
        assert!(matches!(handled, Handled::Silent));
    }

    #[tokio::test]
    async fn test_blank_line_is_silent() {
        let (server, _runner) = server();
        assert!(matches!(server.handle_line("   ").await, Handled::Silent));
    }

    #[tokio::test]
    async fn test_parse_error_frame() {
        let (server, _runner) = server();
        let frame = reply(server.handle_line("not json").await);
        assert_eq!(frame["error"]["code"], json!(rpc::PARSE_ERROR));
    }

    #[tokio::test]
    async fn test_shutdown_stops_serving() {
        let (server, _runner) = server();
        let handled = server
            .handle_line(r#"{"jsonrpc":"2.0","id":6,"method":"shutdown"}"#)
            .await;
        assert!(matches!(handled, Handled::Shutdown(_)));
    }
}
