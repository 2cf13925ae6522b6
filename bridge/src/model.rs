//! Typed view of a native reminder

use reminders_mcp_applescript::AppleDate;
use serde::Serialize;

/// One reminder as read back from the native store.
///
/// A reminder has no persistent identifier at this layer: its `name`
/// together with its containing list is the lookup key, and mutating
/// operations act on the first name match. Notes are write-only in this
/// design and are not read back.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Display name; the lookup key for complete/delete.
    pub name: String,
    /// Completion flag.
    pub completed: bool,
    /// Due date, absent when the native item has none.
    pub due_date: Option<AppleDate>,
    /// Native priority; 0 when absent or unparseable.
    pub priority: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_camel_case_and_null_due_date() {
        let reminder = Reminder {
            name: "Buy milk".to_string(),
            completed: false,
            due_date: None,
            priority: 0,
        };

        assert_eq!(
            serde_json::to_value(&reminder).expect("valid JSON"),
            json!({
                "name": "Buy milk",
                "completed": false,
                "dueDate": null,
                "priority": 0
            })
        );
    }
}
