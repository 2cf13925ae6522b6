//! Reminder management tools
//!
//! Five tools over the AppleScript bridge: list the reminder lists, list
//! the reminders in one, create, complete, and delete. Each constructor
//! takes a [`Reminders`] client handle and returns the `(Tool,
//! ToolExecutorFn)` pair the registry stores.
//!
//! Mutating tools report lookup misses as `false` inside their JSON
//! result — "nothing to do" is an expected outcome, not an error.

use reminders_mcp_applescript::ScriptRunner;
use reminders_mcp_bridge::Reminders;
use serde_json::json;
use std::sync::Arc;

use crate::types::{Tool, ToolError, ToolExecutorFn, ToolResult};

fn parse_input(input: &str) -> Result<serde_json::Value, ToolError> {
    serde_json::from_str(input).map_err(|e| ToolError {
        message: format!("Invalid input JSON: {e}"),
    })
}

fn required_str<'a>(parsed: &'a serde_json::Value, field: &str) -> Result<&'a str, ToolError> {
    parsed[field].as_str().ok_or_else(|| ToolError {
        message: format!("Missing '{field}' field"),
    })
}

fn bridge_error(error: reminders_mcp_bridge::BridgeError) -> ToolError {
    ToolError {
        message: error.to_string(),
    }
}

/// Create the `list_reminder_lists` tool
///
/// List the names of every reminder list in the native store.
///
/// Returns JSON:
/// ```json
/// {
///   "lists": ["Groceries", "Work"]
/// }
/// ```
#[must_use]
pub fn list_reminder_lists_tool<R>(client: Reminders<R>) -> (Tool, ToolExecutorFn)
where
    R: ScriptRunner + Clone + 'static,
{
    let tool = Tool {
        name: "list_reminder_lists".to_string(),
        description: "List the names of all reminder lists".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    };

    let executor = Arc::new(move |_input: String| {
        let client = client.clone();
        Box::pin(async move {
            let lists = client.lists().await.map_err(bridge_error)?;
            Ok(json!({ "lists": lists }).to_string())
        }) as std::pin::Pin<Box<dyn std::future::Future<Output = ToolResult> + Send>>
    }) as ToolExecutorFn;

    (tool, executor)
}

/// Create the `list_reminders` tool
///
/// List every reminder in a named list.
///
/// Returns JSON:
/// ```json
/// {
///   "list": "Groceries",
///   "reminders": [
///     {"name": "Buy milk", "completed": false, "dueDate": null, "priority": 0}
///   ]
/// }
/// ```
#[must_use]
pub fn list_reminders_tool<R>(client: Reminders<R>) -> (Tool, ToolExecutorFn)
where
    R: ScriptRunner + Clone + 'static,
{
    let tool = Tool {
        name: "list_reminders".to_string(),
        description: "List all reminders in a reminder list".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "listName": {
                    "type": "string",
                    "description": "Name of the reminder list"
                }
            },
            "required": ["listName"]
        }),
    };

    let executor = Arc::new(move |input: String| {
        let client = client.clone();
        Box::pin(async move {
            let parsed = parse_input(&input)?;
            let list_name = required_str(&parsed, "listName")?;

            let reminders = client.reminders(list_name).await.map_err(bridge_error)?;
            Ok(json!({
                "list": list_name,
                "reminders": reminders
            })
            .to_string())
        }) as std::pin::Pin<Box<dyn std::future::Future<Output = ToolResult> + Send>>
    }) as ToolExecutorFn;

    (tool, executor)
}

/// Create the `create_reminder` tool
///
/// Create a reminder with an optional due date (ISO-8601) and notes.
///
/// Returns JSON:
/// ```json
/// {
///   "created": true,
///   "list": "Groceries",
///   "title": "Buy milk"
/// }
/// ```
#[must_use]
pub fn create_reminder_tool<R>(client: Reminders<R>) -> (Tool, ToolExecutorFn)
where
    R: ScriptRunner + Clone + 'static,
{
    let tool = Tool {
        name: "create_reminder".to_string(),
        description: "Create a new reminder in a reminder list".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "listName": {
                    "type": "string",
                    "description": "Name of the reminder list"
                },
                "title": {
                    "type": "string",
                    "description": "Reminder title"
                },
                "dueDate": {
                    "type": "string",
                    "description": "Optional due date (ISO-8601, e.g. '2026-08-26T15:30:00')"
                },
                "notes": {
                    "type": "string",
                    "description": "Optional notes stored as the reminder body"
                }
            },
            "required": ["listName", "title"]
        }),
    };

    let executor = Arc::new(move |input: String| {
        let client = client.clone();
        Box::pin(async move {
            let parsed = parse_input(&input)?;
            let list_name = required_str(&parsed, "listName")?;
            let title = required_str(&parsed, "title")?;
            let due_date = parsed["dueDate"].as_str();
            let notes = parsed["notes"].as_str();

            let created = client
                .create(list_name, title, due_date, notes)
                .await
                .map_err(bridge_error)?;
            Ok(json!({
                "created": created,
                "list": list_name,
                "title": title
            })
            .to_string())
        }) as std::pin::Pin<Box<dyn std::future::Future<Output = ToolResult> + Send>>
    }) as ToolExecutorFn;

    (tool, executor)
}

/// Create the `complete_reminder` tool
///
/// Mark the first reminder with the given name completed. `completed`
/// is `false` when no reminder matched.
///
/// Returns JSON:
/// ```json
/// {
///   "completed": true,
///   "list": "Groceries",
///   "reminder": "Buy milk"
/// }
/// ```
#[must_use]
pub fn complete_reminder_tool<R>(client: Reminders<R>) -> (Tool, ToolExecutorFn)
where
    R: ScriptRunner + Clone + 'static,
{
    let tool = Tool {
        name: "complete_reminder".to_string(),
        description: "Mark a reminder as completed".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "listName": {
                    "type": "string",
                    "description": "Name of the reminder list"
                },
                "reminderName": {
                    "type": "string",
                    "description": "Name of the reminder to complete"
                }
            },
            "required": ["listName", "reminderName"]
        }),
    };

    let executor = Arc::new(move |input: String| {
        let client = client.clone();
        Box::pin(async move {
            let parsed = parse_input(&input)?;
            let list_name = required_str(&parsed, "listName")?;
            let reminder_name = required_str(&parsed, "reminderName")?;

            let completed = client
                .complete(list_name, reminder_name)
                .await
                .map_err(bridge_error)?;
            Ok(json!({
                "completed": completed,
                "list": list_name,
                "reminder": reminder_name
            })
            .to_string())
        }) as std::pin::Pin<Box<dyn std::future::Future<Output = ToolResult> + Send>>
    }) as ToolExecutorFn;

    (tool, executor)
}

/// Create the `delete_reminder` tool
///
/// Delete the first reminder with the given name. `deleted` is `false`
/// when no reminder matched.
///
/// Returns JSON:
/// ```json
/// {
///   "deleted": true,
///   "list": "Groceries",
///   "reminder": "Buy milk"
/// }
/// ```
#[must_use]
pub fn delete_reminder_tool<R>(client: Reminders<R>) -> (Tool, ToolExecutorFn)
where
    R: ScriptRunner + Clone + 'static,
{
    let tool = Tool {
        name: "delete_reminder".to_string(),
        description: "Delete a reminder from a reminder list".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "listName": {
                    "type": "string",
                    "description": "Name of the reminder list"
                },
                "reminderName": {
                    "type": "string",
                    "description": "Name of the reminder to delete"
                }
            },
            "required": ["listName", "reminderName"]
        }),
    };

    let executor = Arc::new(move |input: String| {
        let client = client.clone();
        Box::pin(async move {
            let parsed = parse_input(&input)?;
            let list_name = required_str(&parsed, "listName")?;
            let reminder_name = required_str(&parsed, "reminderName")?;

            let deleted = client
                .delete(list_name, reminder_name)
                .await
                .map_err(bridge_error)?;
            Ok(json!({
                "deleted": deleted,
                "list": list_name,
                "reminder": reminder_name
            })
            .to_string())
        }) as std::pin::Pin<Box<dyn std::future::Future<Output = ToolResult> + Send>>
    }) as ToolExecutorFn;

    (tool, executor)
}
