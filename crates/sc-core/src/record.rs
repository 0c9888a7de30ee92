//! Stored shift records and their rendered forms.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::color::TEXT_COLOR;
use crate::types::{ColorId, EventId};

/// One stored day entry, as the record store hands it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventRecord {
    pub id: EventId,
    /// Free text, possibly carrying an hour range (see [`crate::title`]).
    pub title: String,
    #[serde(deserialize_with = "deserialize_day")]
    pub start: NaiveDate,
    #[serde(deserialize_with = "deserialize_day")]
    pub end: NaiveDate,
    /// Older documents store the palette reference under `backgroundColor`.
    #[serde(alias = "backgroundColor")]
    pub color_id: ColorId,
}

impl RawEventRecord {
    /// A single-day entry on `day`.
    pub fn new(id: EventId, title: impl Into<String>, day: NaiveDate, color_id: ColorId) -> Self {
        Self {
            id,
            title: title.into(),
            start: day,
            end: day,
            color_id,
        }
    }
}

/// Accepts `2025-01-06` as well as date-times like `2025-01-06T00:00:00.000Z`;
/// only the calendar day is kept.
fn deserialize_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let day = s.split_once('T').map_or(s.as_str(), |(day, _)| day);
    NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d").map_err(serde::de::Error::custom)
}

/// A record resolved for the calendar renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEvent {
    pub id: EventId,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub all_day: bool,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
}

impl DisplayEvent {
    pub(crate) fn from_record(record: &RawEventRecord, color: &str) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            start: record.start,
            end: record.end,
            all_day: true,
            background_color: color.to_string(),
            border_color: color.to_string(),
            text_color: TEXT_COLOR.to_string(),
        }
    }
}

/// A run of consecutive days with the same title.
///
/// `end` is exclusive: a block covering only day `D` has `end = D + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedBlock {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub all_day: bool,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
}

/// First event starting on `day`.
pub fn find_event_for_day(events: &[DisplayEvent], day: NaiveDate) -> Option<&DisplayEvent> {
    events.iter().find(|e| e.start == day)
}
