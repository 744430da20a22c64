//! Small formatting helpers for task cards and attachment lists.

use chrono::{
    DateTime, NaiveDateTime,
    format::{Item, StrftimeItems},
};
use std::fmt::{self, Write as _};

const KIB: u64 = 1024;

/// Builds up to two uppercase initials from a display name.
///
/// Returns `"?"` for a missing or blank name.
#[must_use]
pub fn initials(name: Option<&str>) -> String {
    let letters: String = name
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();
    if letters.is_empty() {
        "?".to_owned()
    } else {
        letters
    }
}

/// Renders an attachment size as whole kilobytes, rounded half up and
/// never below `1 KB`.
#[must_use]
pub fn format_file_bytes(bytes: u64) -> String {
    let kilobytes = bytes.saturating_add(KIB.div_euclid(2)).div_euclid(KIB).max(1);
    format!("{kilobytes} KB")
}

/// Returns `true` when `format` is a well-formed `chrono` strftime string.
#[must_use]
pub fn is_valid_timestamp_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Formats an API timestamp for display using a `chrono` format string.
///
/// Accepts RFC 3339 values and naive `YYYY-MM-DDTHH:mm:ss` values. Input
/// that parses as neither, or a malformed `format`, returns `raw`
/// unchanged.
#[must_use]
pub fn format_timestamp(raw: &str, format: &str) -> String {
    if !is_valid_timestamp_format(format) {
        return raw.to_owned();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return render_or_raw(parsed.format(format), raw);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map_or_else(|_| raw.to_owned(), |parsed| render_or_raw(parsed.format(format), raw))
}

/// Offset specifiers applied to a naive value fail at render time.
fn render_or_raw(value: impl fmt::Display, raw: &str) -> String {
    let mut rendered = String::new();
    write!(rendered, "{value}").map_or_else(|_| raw.to_owned(), |()| rendered)
}
