//! Parsers for the flat text `osascript` returns
//!
//! AppleScript coerces lists to strings by joining elements with `", "`,
//! and the reminder script joins record fields with `|`. Neither
//! delimiter is escaped by the native side, so a name containing one is
//! indistinguishable from the delimiter itself — a documented limitation
//! of the surface, not corrected here.
//!
//! Policy for ambiguity is graceful degradation: missing fields take
//! defaults, an unparseable priority becomes 0, and date strings that
//! resist normalization are preserved raw. Only the executor layer hard
//! fails.

use reminders_mcp_applescript::date::parse_date;

use crate::model::Reminder;

/// Separator AppleScript inserts when coercing a list to a string.
const RECORD_SEPARATOR: &str = ", ";

/// Separator the reminder script places between record fields.
const FIELD_SEPARATOR: char = '|';

/// Parse the list-names output into names.
///
/// Empty output means no lists, not an error. A list name that itself
/// contains `", "` will split — see the module docs.
#[must_use]
pub fn parse_list_names(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(RECORD_SEPARATOR).map(str::to_string).collect()
}

/// Parse the reminder-records output into typed reminders.
///
/// Empty output maps to an empty vector: a list with zero items is a
/// valid, non-exceptional state.
#[must_use]
pub fn parse_reminders(raw: &str) -> Vec<Reminder> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(RECORD_SEPARATOR).map(parse_record).collect()
}

/// Parse one `name|completed|dueDate|priority` record.
///
/// Short records degrade field by field instead of failing the call.
fn parse_record(record: &str) -> Reminder {
    let mut fields = record.split(FIELD_SEPARATOR);
    let name = fields.next().unwrap_or_default().to_string();
    let completed = fields.next().is_some_and(|field| field == "true");
    let due_date = parse_date(fields.next().unwrap_or_default());
    let priority = fields
        .next()
        .and_then(|field| field.trim().parse::<i64>().ok())
        .unwrap_or(0);
    Reminder {
        name,
        completed,
        due_date,
        priority,
    }
}

/// Parse the boolean the mutating scripts return.
///
/// `false` covers both an explicit `false` and anything unexpected; a
/// lookup miss is an expected outcome, not a fault.
#[must_use]
pub fn parse_bool(raw: &str) -> bool {
    raw.trim() == "true"
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use reminders_mcp_applescript::AppleDate;

    #[test]
    fn test_list_names_empty_output() {
        assert!(parse_list_names("").is_empty());
        assert!(parse_list_names("  \n").is_empty());
    }

    #[test]
    fn test_list_names_single() {
        assert_eq!(parse_list_names("Groceries"), vec!["Groceries"]);
    }

    #[test]
    fn test_list_names_multiple() {
        assert_eq!(
            parse_list_names("Groceries, Work, Someday"),
            vec!["Groceries", "Work", "Someday"]
        );
    }

    #[test]
    fn test_list_name_with_comma_splits_ambiguously() {
        // "Bits, Bobs" the list is indistinguishable from two lists.
        // Documented limitation of the flat encoding.
        assert_eq!(parse_list_names("Bits, Bobs"), vec!["Bits", "Bobs"]);
    }

    #[test]
    fn test_reminders_empty_output_is_empty_vec() {
        assert!(parse_reminders("").is_empty());
    }

    #[test]
    fn test_reminders_single_record() {
        let reminders = parse_reminders("Buy milk|false||0");
        assert_eq!(
            reminders,
            vec![Reminder {
                name: "Buy milk".to_string(),
                completed: false,
                due_date: None,
                priority: 0,
            }]
        );
    }

    #[test]
    fn test_reminders_multiple_records() {
        let reminders = parse_reminders("Buy milk|false||0, Call mom|true||5");
        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders[0].name, "Buy milk");
        assert!(!reminders[0].completed);
        assert_eq!(reminders[1].name, "Call mom");
        assert!(reminders[1].completed);
        assert_eq!(reminders[1].priority, 5);
    }

    #[test]
    fn test_completed_requires_exact_truthy_token() {
        assert!(!parse_reminders("a|True||0")[0].completed);
        assert!(!parse_reminders("a|yes||0")[0].completed);
        assert!(parse_reminders("a|true||0")[0].completed);
    }

    #[test]
    fn test_due_date_parses_to_timestamp() {
        let reminders = parse_reminders("a|false|Wednesday, August 26, 2026 at 3:30:00 PM|0");
        let expected = NaiveDate::from_ymd_opt(2026, 8, 26)
            .and_then(|d| d.and_hms_opt(15, 30, 0))
            .map(AppleDate::Timestamp);
        assert_eq!(reminders[0].due_date, expected);
    }

    #[test]
    fn test_unparseable_due_date_preserved_raw() {
        let reminders = parse_reminders("a|false|someday soon maybe|0");
        assert_eq!(
            reminders[0].due_date,
            Some(AppleDate::Raw("someday soon maybe".to_string()))
        );
    }

    #[test]
    fn test_missing_value_due_date_is_none() {
        let reminders = parse_reminders("a|false|missing value|0");
        assert_eq!(reminders[0].due_date, None);
    }

    #[test]
    fn test_priority_defaults_to_zero_on_garbage() {
        assert_eq!(parse_reminders("a|false||high")[0].priority, 0);
        assert_eq!(parse_reminders("a|false||")[0].priority, 0);
        assert_eq!(parse_reminders("a|false|")[0].priority, 0);
    }

    #[test]
    fn test_short_record_degrades_to_defaults() {
        let reminders = parse_reminders("just a name");
        assert_eq!(
            reminders,
            vec![Reminder {
                name: "just a name".to_string(),
                completed: false,
                due_date: None,
                priority: 0,
            }]
        );
    }

    #[test]
    fn test_pipe_in_name_corrupts_that_record() {
        // Accepted boundary condition of the flat encoding: the name
        // truncates at the first pipe and the spill shifts the fields.
        let reminders = parse_reminders("milk|eggs|false||0");
        assert_eq!(reminders[0].name, "milk");
        assert!(!reminders[0].completed);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("  true\n"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool(""));
        assert!(!parse_bool("TRUE"));
    }
}
