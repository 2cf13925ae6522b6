//! Apple Reminders MCP server
//!
//! Exposes reminder management (list, create, complete, delete) to an
//! MCP client over stdio. Stdout carries newline-delimited JSON-RPC
//! frames; all logging goes to stderr.
//!
//! Run under an MCP-capable client, or poke it by hand:
//!
//! ```sh
//! echo '{"jsonrpc":"2.0","id":1,"method":"tools/list"}' | reminders-mcp
//! ```

mod rpc;
mod server;

use reminders_mcp_applescript::Osascript;
use reminders_mcp_bridge::Reminders;
use reminders_mcp_tools::ToolRegistry;
use reminders_mcp_tools::reminders::{
    complete_reminder_tool, create_reminder_tool, delete_reminder_tool, list_reminder_lists_tool,
    list_reminders_tool,
};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::server::{Handled, McpServer};

fn build_registry() -> ToolRegistry {
    let client = Reminders::new(Osascript::new());
    let registry = ToolRegistry::new();

    let (tool, executor) = list_reminder_lists_tool(client.clone());
    registry.register(tool, executor);
    let (tool, executor) = list_reminders_tool(client.clone());
    registry.register(tool, executor);
    let (tool, executor) = create_reminder_tool(client.clone());
    registry.register(tool, executor);
    let (tool, executor) = complete_reminder_tool(client.clone());
    registry.register(tool, executor);
    let (tool, executor) = delete_reminder_tool(client);
    registry.register(tool, executor);

    registry
}

async fn write_frame(
    stdout: &mut tokio::io::Stdout,
    frame: &Value,
) -> Result<(), std::io::Error> {
    let mut payload = serde_json::to_vec(frame)?;
    payload.push(b'\n');
    stdout.write_all(&payload).await?;
    stdout.flush().await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Stdout belongs to the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = build_registry();
    tracing::info!(tools = registry.count(), "Apple Reminders MCP server starting");

    let mcp = McpServer::new(registry);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        match mcp.handle_line(&line).await {
            Handled::Silent => {}
            Handled::Reply(frame) => write_frame(&mut stdout, &frame).await?,
            Handled::Shutdown(frame) => {
                write_frame(&mut stdout, &frame).await?;
                break;
            }
        }
    }

    tracing::info!("Apple Reminders MCP server stopped");
    Ok(())
}
