// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort formatting of backend values for display.
//!
//! Nothing here returns an error: unparseable input degrades to a safe
//! display value.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use medtriage_core::TriageError;
use tracing::trace;

/// `dd MMM yyyy, hh:mm a`, e.g. `15 Jan 2024, 04:00 PM`.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%d %b %Y, %I:%M %p";

/// UTC+05:30.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

pub const NO_SYMPTOMS: &str = "No symptoms selected";

/// Naive layouts accepted when the timestamp carries no zone; read as UTC.
const NAIVE_LAYOUTS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Formats a probability in `[0, 1]` as a truncated percentage.
///
/// `None` renders as `N/A`; `0.999` renders as `99%`, never `100%`.
pub fn format_probability(probability: Option<f64>) -> String {
    match probability {
        Some(p) if p.is_finite() => format!("{}%", (p * 100.0).trunc() as i64),
        _ => "N/A".to_string(),
    }
}

/// Joins symptom tokens with `", "`, upper-casing only the first character
/// of each token.
pub fn format_symptom_list<S: AsRef<str>>(symptoms: &[S]) -> String {
    if symptoms.is_empty() {
        return NO_SYMPTOMS.to_string();
    }
    symptoms
        .iter()
        .map(|s| capitalize_first(s.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts ISO-8601 UTC timestamps to a fixed zone and pattern.
#[derive(Debug, Clone)]
pub struct TimestampFormatter {
    offset: FixedOffset,
    pattern: String,
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self {
            offset: ist(),
            pattern: DEFAULT_TIMESTAMP_PATTERN.to_string(),
        }
    }
}

impl TimestampFormatter {
    /// Builds a formatter for a zone `offset_minutes` east of UTC.
    pub fn new(offset_minutes: i32, pattern: impl Into<String>) -> Result<Self, TriageError> {
        let offset = FixedOffset::east_opt(offset_minutes * 60).ok_or_else(|| {
            TriageError::InvalidInput(format!("UTC offset {offset_minutes} minutes is out of range"))
        })?;
        let pattern = pattern.into();
        if !is_valid_pattern(&pattern) {
            return Err(TriageError::InvalidInput(format!(
                "`{pattern}` is not a valid strftime pattern"
            )));
        }
        Ok(Self { offset, pattern })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Formats with the default pattern.
    pub fn format(&self, input: &str) -> String {
        self.format_with(input, &self.pattern)
    }

    /// Formats with a caller-supplied strftime pattern.
    ///
    /// Returns `input` unchanged when it does not parse or the pattern is
    /// invalid.
    pub fn format_with(&self, input: &str, pattern: &str) -> String {
        let Some(utc) = parse_utc(input) else {
            trace!(input, "timestamp not parseable, shown verbatim");
            return input.to_string();
        };
        if !is_valid_pattern(pattern) {
            return input.to_string();
        }

        let local = utc.with_timezone(&self.offset);
        let mut out = String::new();
        match write!(out, "{}", local.format(pattern)) {
            Ok(()) => out,
            Err(_) => input.to_string(),
        }
    }
}

/// Formats `input` in UTC+05:30 with `pattern` or the default pattern.
pub fn format_timestamp(input: &str, pattern: Option<&str>) -> String {
    let formatter = TimestampFormatter::default();
    match pattern {
        Some(p) => formatter.format_with(input, p),
        None => formatter.format(input),
    }
}

/// Parses an ISO-8601 timestamp. A missing zone means UTC.
pub fn parse_utc(input: &str) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
        .map(|naive| naive.and_utc())
}

fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

fn ist() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60).unwrap_or_else(|| Utc.fix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn probability_examples() {
        assert_eq!(format_probability(None), "N/A");
        assert_eq!(format_probability(Some(0.5)), "50%");
        assert_eq!(format_probability(Some(0.999)), "99%");
        assert_eq!(format_probability(Some(1.0)), "100%");
        assert_eq!(format_probability(Some(0.0)), "0%");
        assert_eq!(format_probability(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn symptom_list_examples() {
        let empty: [&str; 0] = [];
        assert_eq!(format_symptom_list(&empty), "No symptoms selected");
        assert_eq!(format_symptom_list(&["fever", "cough"]), "Fever, Cough");
        assert_eq!(
            format_symptom_list(&["sore throat", "hIGH temp"]),
            "Sore throat, HIGH temp"
        );
        assert_eq!(format_symptom_list(&[String::from("élan")]), "Élan");
    }

    #[test]
    fn timestamp_converts_to_ist() {
        assert_eq!(
            format_timestamp("2024-01-15T10:30:00Z", None),
            "15 Jan 2024, 04:00 PM"
        );
        assert_eq!(
            format_timestamp("2024-01-15T10:30:00.123456Z", None),
            "15 Jan 2024, 04:00 PM"
        );
        // No zone reads as UTC.
        assert_eq!(
            format_timestamp("2024-01-15T20:00:00", None),
            "16 Jan 2024, 01:30 AM"
        );
        // Explicit offsets are honoured.
        assert_eq!(
            format_timestamp("2024-01-15T10:30:00+05:30", None),
            "15 Jan 2024, 10:30 AM"
        );
    }

    #[test]
    fn custom_pattern() {
        assert_eq!(
            format_timestamp("2024-01-15T10:30:00Z", Some("%Y-%m-%d %H:%M")),
            "2024-01-15 16:00"
        );
    }

    #[test]
    fn malformed_input_is_returned_unchanged() {
        assert_eq!(format_timestamp("yesterday", None), "yesterday");
        assert_eq!(format_timestamp("", None), "");
        assert_eq!(format_timestamp("2024-13-45T99:00:00Z", None), "2024-13-45T99:00:00Z");
    }

    #[test]
    fn invalid_pattern_returns_input() {
        assert_eq!(
            format_timestamp("2024-01-15T10:30:00Z", Some("%Q")),
            "2024-01-15T10:30:00Z"
        );
    }

    #[test]
    fn formatter_with_custom_offset() {
        let utc = TimestampFormatter::new(0, "%H:%M").unwrap();
        assert_eq!(utc.format("2024-01-15T10:30:00Z"), "10:30");
        assert!(TimestampFormatter::new(24 * 60, "%H:%M").is_err());
        assert!(TimestampFormatter::new(0, "%Q").is_err());
    }

    proptest! {
        #[test]
        fn probability_never_rounds_up(p in 0.0f64..0.99) {
            let shown = format_probability(Some(p));
            let n: i64 = shown.trim_end_matches('%').parse().unwrap();
            prop_assert!(n <= 99);
            prop_assert!((n as f64) <= p * 100.0);
        }

        #[test]
        fn unparseable_text_round_trips(s in "[a-z ]{0,20}") {
            prop_assert_eq!(format_timestamp(&s, None), s);
        }
    }
}
