//! AppleScript builders for the five reminder operations
//!
//! Pure functions: typed arguments in, complete script text out. Every
//! user-supplied string goes through
//! [`escape_literal`](reminders_mcp_applescript::escape_literal) before
//! interpolation, and due dates through
//! [`format_date_literal`](reminders_mcp_applescript::date::format_date_literal).
//! Blank required names are rejected here, before any subprocess runs.
//!
//! Reminder records are encoded as `name|completed|dueDate|priority`
//! with records joined by AppleScript's list-to-string coercion (`, `).
//! The encoding is knowingly flat: a name containing `|` or `, ` will
//! corrupt the parse, an accepted boundary condition preserved for
//! compatibility with the native surface.

use reminders_mcp_applescript::date::format_date_literal;
use reminders_mcp_applescript::escape_literal;
use thiserror::Error;

/// Invalid input caught before building a script.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A list name was empty or whitespace-only.
    #[error("list name must be non-empty")]
    EmptyListName,

    /// A reminder name was empty or whitespace-only.
    #[error("reminder name must be non-empty")]
    EmptyReminderName,

    /// A reminder title was empty or whitespace-only.
    #[error("reminder title must be non-empty")]
    EmptyTitle,
}

fn non_blank(value: &str, error: BuildError) -> Result<&str, BuildError> {
    if value.trim().is_empty() {
        Err(error)
    } else {
        Ok(value)
    }
}

/// Script returning the names of all reminder lists, comma-space joined.
#[must_use]
pub fn list_names_script() -> String {
    "tell application \"Reminders\"\n\
     \tset listNames to {}\n\
     \trepeat with aList in lists\n\
     \t\tset end of listNames to name of aList\n\
     \tend repeat\n\
     \treturn listNames\n\
     end tell"
        .to_string()
}

/// Script returning every reminder in `list_name` as pipe-joined records.
///
/// The `due date` read sits inside a `try` block so items without one
/// contribute an empty field instead of aborting the whole script.
///
/// # Errors
///
/// Returns [`BuildError::EmptyListName`] for a blank list name.
pub fn list_reminders_script(list_name: &str) -> Result<String, BuildError> {
    let list_name = escape_literal(non_blank(list_name, BuildError::EmptyListName)?);
    Ok(format!(
        "tell application \"Reminders\"\n\
         \tset reminderItems to {{}}\n\
         \tset targetList to list \"{list_name}\"\n\
         \trepeat with aReminder in (reminders in targetList)\n\
         \t\tset reminderName to name of aReminder\n\
         \t\tset reminderCompleted to completed of aReminder\n\
         \t\tset reminderDueDate to \"\"\n\
         \t\ttry\n\
         \t\t\tset reminderDueDate to due date of aReminder as string\n\
         \t\tend try\n\
         \t\tset reminderPriority to priority of aReminder\n\
         \t\tset end of reminderItems to reminderName & \"|\" & reminderCompleted & \"|\" & reminderDueDate & \"|\" & reminderPriority\n\
         \tend repeat\n\
         \treturn reminderItems\n\
         end tell"
    ))
}

/// Script creating a reminder in `list_name`, returning `true`.
///
/// `due_date` accepts ISO-8601 and is normalized to an AppleScript date
/// literal; a string that does not parse is passed through verbatim for
/// `date "…"` to interpret. `notes` becomes the reminder body.
///
/// # Errors
///
/// Returns [`BuildError`] if the list name or title is blank.
pub fn create_script(
    list_name: &str,
    title: &str,
    due_date: Option<&str>,
    notes: Option<&str>,
) -> Result<String, BuildError> {
    let list_name = escape_literal(non_blank(list_name, BuildError::EmptyListName)?);
    let title = escape_literal(non_blank(title, BuildError::EmptyTitle)?);

    let mut properties = format!("name:\"{title}\"");
    if let Some(due_date) = due_date {
        let literal = escape_literal(&format_date_literal(due_date));
        properties.push_str(&format!(", due date:date \"{literal}\""));
    }
    if let Some(notes) = notes {
        properties.push_str(&format!(", body:\"{}\"", escape_literal(notes)));
    }

    Ok(format!(
        "tell application \"Reminders\"\n\
         \ttell list \"{list_name}\"\n\
         \t\tmake new reminder with properties {{{properties}}}\n\
         \tend tell\n\
         end tell\n\
         return true"
    ))
}

/// Script marking the first name-matched reminder completed.
///
/// Returns `true` when a match was completed, `false` when the list holds
/// no reminder with that name.
///
/// # Errors
///
/// Returns [`BuildError`] if either name is blank.
pub fn complete_script(list_name: &str, reminder_name: &str) -> Result<String, BuildError> {
    mutate_script(
        list_name,
        reminder_name,
        "set completed of item 1 of theReminders to true",
    )
}

/// Script deleting the first name-matched reminder.
///
/// Returns `true` when a match was deleted, `false` when the list holds
/// no reminder with that name.
///
/// # Errors
///
/// Returns [`BuildError`] if either name is blank.
pub fn delete_script(list_name: &str, reminder_name: &str) -> Result<String, BuildError> {
    mutate_script(list_name, reminder_name, "delete item 1 of theReminders")
}

/// Shared shape for complete/delete: find by name, act on the first
/// match, report `true`/`false`.
fn mutate_script(
    list_name: &str,
    reminder_name: &str,
    action: &str,
) -> Result<String, BuildError> {
    let list_name = escape_literal(non_blank(list_name, BuildError::EmptyListName)?);
    let reminder_name = escape_literal(non_blank(reminder_name, BuildError::EmptyReminderName)?);
    Ok(format!(
        "tell application \"Reminders\"\n\
         \ttell list \"{list_name}\"\n\
         \t\tset theReminders to (reminders whose name is \"{reminder_name}\")\n\
         \t\tif length of theReminders > 0 then\n\
         \t\t\t{action}\n\
         \t\t\treturn true\n\
         \t\telse\n\
         \t\t\treturn false\n\
         \t\tend if\n\
         \tend tell\n\
         end tell"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_names_script_queries_all_lists() {
        let script = list_names_script();
        assert!(script.contains("repeat with aList in lists"));
        assert!(script.contains("return listNames"));
    }

    #[test]
    fn test_list_reminders_script_interpolates_list_name() {
        let script = list_reminders_script("Groceries").expect("valid name");
        assert!(script.contains("set targetList to list \"Groceries\""));
        assert!(script.contains("& \"|\" &"));
    }

    #[test]
    fn test_list_reminders_script_rejects_blank_name() {
        assert_eq!(
            list_reminders_script("  "),
            Err(BuildError::EmptyListName)
        );
    }

    #[test]
    fn test_create_script_minimal_properties() {
        let script = create_script("Groceries", "Buy milk", None, None).expect("valid input");
        assert!(script.contains("make new reminder with properties {name:\"Buy milk\"}"));
        assert!(!script.contains("due date"));
        assert!(!script.contains("body:"));
    }

    #[test]
    fn test_create_script_with_due_date_and_notes() {
        let script = create_script(
            "Groceries",
            "Buy milk",
            Some("2026-08-26T15:30:00Z"),
            Some("2% if they have it"),
        )
        .expect("valid input");
        assert!(script.contains("due date:date \"8/26/2026 3:30:00 PM\""));
        assert!(script.contains("body:\"2% if they have it\""));
    }

    #[test]
    fn test_create_script_passes_native_date_through() {
        let script = create_script("Groceries", "Buy milk", Some("8/26/2026 3:30:00 PM"), None)
            .expect("valid input");
        assert!(script.contains("due date:date \"8/26/2026 3:30:00 PM\""));
    }

    #[test]
    fn test_create_script_escapes_quotes_in_title() {
        let script = create_script("Groceries", r#"Buy "whole" milk"#, None, None)
            .expect("valid input");
        assert!(script.contains(r#"name:"Buy \"whole\" milk""#));
    }

    #[test]
    fn test_create_script_escapes_backslashes() {
        let script = create_script("Groceries", r"a\b", None, None).expect("valid input");
        assert!(script.contains(r#"name:"a\\b""#));
    }

    #[test]
    fn test_create_script_quote_cannot_terminate_literal() {
        // A title ending in a quote must not close the AppleScript
        // literal early: every interior quote comes out escaped.
        let script = create_script("Groceries", r#"tricky""#, None, None).expect("valid input");
        assert!(script.contains(r#"name:"tricky\"""#));
    }

    #[test]
    fn test_create_script_keeps_delimiters_verbatim() {
        let script =
            create_script("Groceries", "milk|eggs, butter", None, None).expect("valid input");
        assert!(script.contains("name:\"milk|eggs, butter\""));
    }

    #[test]
    fn test_create_script_rejects_blank_title() {
        assert_eq!(
            create_script("Groceries", "", None, None),
            Err(BuildError::EmptyTitle)
        );
    }

    #[test]
    fn test_complete_script_targets_first_match() {
        let script = complete_script("Groceries", "Buy milk").expect("valid input");
        assert!(script.contains("reminders whose name is \"Buy milk\""));
        assert!(script.contains("set completed of item 1 of theReminders to true"));
        assert!(script.contains("return false"));
    }

    #[test]
    fn test_delete_script_targets_first_match() {
        let script = delete_script("Groceries", "Buy milk").expect("valid input");
        assert!(script.contains("delete item 1 of theReminders"));
    }

    #[test]
    fn test_mutating_scripts_reject_blank_reminder_name() {
        assert_eq!(
            complete_script("Groceries", " "),
            Err(BuildError::EmptyReminderName)
        );
        assert_eq!(
            delete_script("Groceries", ""),
            Err(BuildError::EmptyReminderName)
        );
    }

    #[test]
    fn test_quoted_list_name_is_escaped_everywhere() {
        for script in [
            list_reminders_script(r#"My "A" List"#).expect("valid"),
            create_script(r#"My "A" List"#, "x", None, None).expect("valid"),
            complete_script(r#"My "A" List"#, "x").expect("valid"),
            delete_script(r#"My "A" List"#, "x").expect("valid"),
        ] {
            assert!(script.contains(r#"My \"A\" List"#));
        }
    }
}
