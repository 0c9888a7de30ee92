//! Shift titles and the hour range packed into them.
//!
//! A shift title is free text, optionally followed by the duration marker and
//! a till register number:
//!
//! ```text
//! 6 - 14 <small>Kasse:</small> 123
//! ^^^^^^                       ^^^
//! hour range (label)           register
//! ```
//!
//! Only titles carrying the marker are duration-bearing; the label in front of
//! it is read as `start - end` hours.

use std::fmt;

use thiserror::Error;

/// Separates the label of a shift title from its register number.
pub const DURATION_MARKER: &str = "<small>Kasse:</small>";

/// Reasons a duration-bearing title could not be read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TitleError {
    /// The label in front of the marker is not of the form `start - end`.
    #[error("expected `start - end` before the marker, got {label:?}")]
    MalformedRange { label: String },

    /// One side of the range holds no number.
    #[error("invalid hour value {value:?}")]
    InvalidNumber { value: String },
}

/// Start and end hour of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRange {
    pub start: i64,
    pub end: i64,
}

impl ShiftRange {
    /// Hours worked. Negative when the range is written backwards.
    pub const fn day_sum(self) -> i64 {
        self.end - self.start
    }
}

/// Reads the hour range out of a title.
///
/// Returns `Ok(None)` for titles without the marker; those are plain labels
/// such as `Frei` and carry no duration.
pub fn parse_duration(title: &str) -> Result<Option<ShiftRange>, TitleError> {
    let Some((label, _)) = title.split_once(DURATION_MARKER) else {
        return Ok(None);
    };

    let label = label.trim();
    let parts: Vec<&str> = label.split('-').collect();
    let [start, end] = parts.as_slice() else {
        return Err(TitleError::MalformedRange {
            label: label.to_string(),
        });
    };

    Ok(Some(ShiftRange {
        start: parse_leading_int(start)?,
        end: parse_leading_int(end)?,
    }))
}

/// Lenient integer parse: leading whitespace and an optional `+`, then
/// digits. Anything after the digits is ignored, so `"14h"` reads as 14.
///
/// Range sides never carry a `-`; the caller has already split on it.
fn parse_leading_int(value: &str) -> Result<i64, TitleError> {
    let s = value.trim_start();
    let rest = s.strip_prefix('+').unwrap_or(s);

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_end]
        .parse()
        .map_err(|_| TitleError::InvalidNumber {
            value: value.trim().to_string(),
        })
}

/// Renders a time label such as `9-17` or `9:30 - 15` as `09:00 - 17:00`.
///
/// Returns `None` unless the label is exactly two `H[:MM]` sides around a
/// single `-`.
pub fn format_time_range(label: &str) -> Option<String> {
    let (start, end) = label.split_once('-')?;
    if end.contains('-') {
        return None;
    }
    Some(format!("{} - {}", format_clock(start)?, format_clock(end)?))
}

fn format_clock(part: &str) -> Option<String> {
    let part = part.trim();
    let (hours, minutes) = part.split_once(':').unwrap_or((part, "00"));
    let is_field = |s: &str| (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
    if !is_field(hours) || !is_field(minutes) {
        return None;
    }
    Some(format!("{hours:0>2}:{minutes:0>2}"))
}

/// A title split into its label and optional register number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTitle {
    pub label: String,
    pub register: Option<u32>,
}

impl ShiftTitle {
    pub fn new(label: impl Into<String>, register: Option<u32>) -> Self {
        Self {
            label: label.into(),
            register: register.filter(|&r| r != 0),
        }
    }

    /// Splits a stored title. A missing, zero or unreadable register becomes `None`.
    pub fn parse(title: &str) -> Self {
        match title.split_once(DURATION_MARKER) {
            Some((label, register)) => Self::new(label.trim(), register.trim().parse().ok()),
            None => Self::new(title.trim(), None),
        }
    }

    /// Renders the title in its stored form.
    pub fn compose(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ShiftTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.register {
            Some(register) => write!(f, "{} {DURATION_MARKER} {register}", self.label),
            None => write!(f, "{}", self.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_range_before_marker() {
        let range = parse_duration("6 - 14 <small>Kasse:</small> 123").unwrap();
        assert_eq!(range, Some(ShiftRange { start: 6, end: 14 }));
        assert_eq!(range.unwrap().day_sum(), 8);
    }

    #[test]
    fn title_without_marker_has_no_duration() {
        assert_eq!(parse_duration("9-17"), Ok(None));
        assert_eq!(parse_duration("Frei"), Ok(None));
        assert_eq!(parse_duration(""), Ok(None));
    }

    #[test]
    fn non_numeric_range_is_an_error() {
        assert_eq!(
            parse_duration("früh - spät <small>Kasse:</small> 1"),
            Err(TitleError::InvalidNumber {
                value: "früh".to_string()
            })
        );
    }

    #[test]
    fn range_needs_exactly_two_parts() {
        assert!(matches!(
            parse_duration("Schicht <small>Kasse:</small> 4"),
            Err(TitleError::MalformedRange { .. })
        ));
        assert!(matches!(
            parse_duration("6-10-14 <small>Kasse:</small> 4"),
            Err(TitleError::MalformedRange { .. })
        ));
    }

    #[test]
    fn empty_side_is_an_error() {
        assert_eq!(
            parse_duration("6 - <small>Kasse:</small> 2"),
            Err(TitleError::InvalidNumber {
                value: String::new()
            })
        );
    }

    #[test]
    fn trailing_text_after_digits_is_ignored() {
        let range = parse_duration("7h - 15h <small>Kasse:</small> 9").unwrap();
        assert_eq!(range, Some(ShiftRange { start: 7, end: 15 }));
    }

    #[test]
    fn leading_plus_is_accepted() {
        let range = parse_duration("+6 - +14 <small>Kasse:</small> 1").unwrap();
        assert_eq!(range, Some(ShiftRange { start: 6, end: 14 }));
    }

    #[test]
    fn format_time_range_pads_hours_and_minutes() {
        assert_eq!(format_time_range("9-17").as_deref(), Some("09:00 - 17:00"));
        assert_eq!(format_time_range("9:30 - 15").as_deref(), Some("09:30 - 15:00"));
        assert_eq!(format_time_range("6 - 14").as_deref(), Some("06:00 - 14:00"));
    }

    #[test]
    fn format_time_range_leaves_other_labels_alone() {
        assert_eq!(format_time_range("Frei"), None);
        assert_eq!(format_time_range("Spät-Dienst"), None);
        assert_eq!(format_time_range("6-10-14"), None);
        assert_eq!(format_time_range("9-"), None);
        assert_eq!(format_time_range("123-4"), None);
    }

    #[test]
    fn backwards_range_gives_negative_sum() {
        let range = parse_duration("14 - 6 <small>Kasse:</small> 1")
            .unwrap()
            .unwrap();
        assert_eq!(range.day_sum(), -8);
    }

    #[test]
    fn shift_title_parse_and_compose() {
        let title = ShiftTitle::parse("6-14 <small>Kasse:</small> 3");
        assert_eq!(title, ShiftTitle::new("6-14", Some(3)));
        assert_eq!(title.compose(), "6-14 <small>Kasse:</small> 3");
    }

    #[test]
    fn shift_title_without_register() {
        let title = ShiftTitle::new("Urlaub", None);
        assert_eq!(title.compose(), "Urlaub");
        assert_eq!(ShiftTitle::parse("Urlaub"), title);
    }

    #[test]
    fn zero_or_garbage_register_is_dropped() {
        assert_eq!(ShiftTitle::new("6-14", Some(0)).register, None);
        assert_eq!(
            ShiftTitle::parse("6-14 <small>Kasse:</small> x").register,
            None
        );
    }

    #[test]
    fn composed_title_is_duration_bearing() {
        let composed = ShiftTitle::new("10 - 17", Some(2)).compose();
        let range = parse_duration(&composed).unwrap().unwrap();
        assert_eq!(range.day_sum(), 7);
    }
}
