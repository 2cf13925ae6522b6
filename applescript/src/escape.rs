//! Escaping for AppleScript string literals
//!
//! Every user-supplied string interpolated into a script must pass through
//! [`escape_literal`] first. AppleScript double-quoted literals recognize
//! two escape sequences that matter here: `\\` and `\"`. Backslashes are
//! escaped before quotes so an input backslash can never combine with a
//! following quote into a new escape.

/// Escape a value for inclusion inside an AppleScript double-quoted
/// string literal.
///
/// The caller supplies the surrounding quotes; this function only makes
/// the content inert:
///
/// ```
/// use reminders_mcp_applescript::escape::escape_literal;
///
/// assert_eq!(escape_literal(r#"say "hi""#), r#"say \"hi\""#);
/// assert_eq!(escape_literal(r"C:\path"), r"C:\\path");
/// ```
#[must_use]
pub fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(ch),
        }
    }
    escaped
}
