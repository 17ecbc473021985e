//! Shared helper functions for CLI commands

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Render vehicle ids in encounter order, comma-separated
pub fn join_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render an hour total with an explicit sign, e.g. `+10h` or `-5h`
pub fn signed_hours(hours: i64) -> String {
    if hours > 0 {
        format!("+{}h", hours)
    } else {
        format!("{}h", hours)
    }
}

/// Escape a value for a Markdown table cell
pub fn escape_md(s: &str) -> String {
    s.replace('|', "\\|")
}
