use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt::Write;

use crate::resource::FieldValue;

/// What JavaScript prints for an unparseable date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Validated chrono pattern used for every date column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStyle {
    pattern: String,
}

impl DateStyle {
    /// `None` when the pattern contains an unknown specifier.
    pub fn parse(pattern: &str) -> Option<Self> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return None;
        }
        Some(Self {
            pattern: pattern.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for DateStyle {
    /// en-US short date, e.g. `1/1/2024`.
    fn default() -> Self {
        Self {
            pattern: "%-m/%-d/%Y".to_string(),
        }
    }
}

/// Formats the calendar date of `value` as written, without shifting it into
/// the local timezone.
pub fn format_date(value: &FieldValue, style: &DateStyle) -> String {
    let Some(date) = value.as_str().and_then(parse_calendar_date) else {
        return INVALID_DATE.to_string();
    };
    let mut out = String::new();
    if write!(out, "{}", date.format(&style.pattern)).is_err() {
        return INVALID_DATE.to_string();
    }
    out
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fmt(value: serde_json::Value) -> String {
        format_date(&FieldValue::from(value), &DateStyle::default())
    }

    #[test]
    fn plain_date() {
        assert_eq!(fmt(json!("2024-01-01")), "1/1/2024");
    }

    #[test]
    fn rfc3339_timestamp_keeps_written_date() {
        assert_eq!(fmt(json!("2024-03-15T23:30:00Z")), "3/15/2024");
        assert_eq!(fmt(json!("2024-03-15T08:00:00.123456+02:00")), "3/15/2024");
    }

    #[test]
    fn naive_datetime() {
        assert_eq!(fmt(json!("2023-12-31T10:00:00")), "12/31/2023");
        assert_eq!(fmt(json!("2023-12-31 10:00:00.5")), "12/31/2023");
    }

    #[test]
    fn missing_or_garbage_is_invalid_date() {
        assert_eq!(fmt(json!(null)), INVALID_DATE);
        assert_eq!(fmt(json!("yesterday")), INVALID_DATE);
        assert_eq!(fmt(json!(20240101)), INVALID_DATE);
    }

    #[test]
    fn custom_pattern() {
        let style = DateStyle::parse("%Y-%m-%d").unwrap();
        assert_eq!(
            format_date(&FieldValue::from(json!("2024-02-09T00:00:00Z")), &style),
            "2024-02-09"
        );
    }

    #[test]
    fn unknown_specifier_is_rejected() {
        assert!(DateStyle::parse("%Y-%").is_none());
        assert!(DateStyle::parse("%d.%m.%Y").is_some());
    }
}
