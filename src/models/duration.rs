//! Free-form durations.
//!
//! Course and material durations arrive as text written for people
//! (`"10"`, `"5 دقائق"`, `"45 min"`) or occasionally as bare numbers. Only
//! the leading integer is meaningful; anything else is ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A duration as sent by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FreeformDuration {
    /// Numeric duration in minutes.
    Number(f64),
    /// Human-written text.
    Text(String),
}

impl FreeformDuration {
    /// Minutes represented by this duration, if it has a leading integer.
    pub fn minutes(&self) -> Option<u32> {
        match self {
            FreeformDuration::Number(n) if n.is_finite() && *n >= 0.0 => Some(n.trunc() as u32),
            FreeformDuration::Number(_) => None,
            FreeformDuration::Text(text) => parse_leading_minutes(text),
        }
    }
}

impl fmt::Display for FreeformDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreeformDuration::Number(n) => write!(f, "{}", n),
            FreeformDuration::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for FreeformDuration {
    fn from(value: &str) -> Self {
        FreeformDuration::Text(value.to_string())
    }
}

/// Parse the leading integer of a human-written duration.
///
/// Leading whitespace and a `+` sign are skipped. ASCII, Arabic-Indic and
/// Extended Arabic-Indic digits are accepted. Returns `None` when no digit
/// leads the text or the value is negative. Overflow saturates.
pub fn parse_leading_minutes(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let rest = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let mut value: Option<u32> = None;
    for ch in rest.chars() {
        let Some(digit) = digit_value(ch) else {
            break;
        };
        let current = value.unwrap_or(0);
        value = Some(current.saturating_mul(10).saturating_add(digit));
    }
    value
}

fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        '\u{0660}'..='\u{0669}' => Some(ch as u32 - 0x0660),
        '\u{06F0}'..='\u{06F9}' => Some(ch as u32 - 0x06F0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_integer() {
        assert_eq!(parse_leading_minutes("10"), Some(10));
        assert_eq!(parse_leading_minutes("5 دقائق"), Some(5));
        assert_eq!(parse_leading_minutes("  45min"), Some(45));
        assert_eq!(parse_leading_minutes("+7"), Some(7));
        assert_eq!(parse_leading_minutes("٣٠ دقيقة"), Some(30));
        assert_eq!(parse_leading_minutes("۱۲"), Some(12));
    }

    #[test]
    fn test_unparsable_is_none() {
        assert_eq!(parse_leading_minutes(""), None);
        assert_eq!(parse_leading_minutes("abc"), None);
        assert_eq!(parse_leading_minutes("min 5"), None);
        assert_eq!(parse_leading_minutes("-5"), None);
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(parse_leading_minutes("99999999999999"), Some(u32::MAX));
    }

    #[test]
    fn test_deserialize_text_and_number() {
        let values: Vec<FreeformDuration> = serde_json::from_str(r#"["20", 12.9, -3]"#).unwrap();
        assert_eq!(values[0].minutes(), Some(20));
        assert_eq!(values[1].minutes(), Some(12));
        assert_eq!(values[2].minutes(), None);
    }
}
