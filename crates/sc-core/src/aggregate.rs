//! Monthly totals and display lists for the shift calendar.
//!
//! # Algorithm Summary
//!
//! 1. Resolve each record's colour through the palette
//! 2. For records starting inside the window, read the hour range from the
//!    title and accrue hours and break time
//! 3. Stable-sort the resolved records by start day
//! 4. Merge consecutive same-title days into blocks

use chrono::NaiveDate;
use serde::Serialize;

use crate::color::ColorTable;
use crate::merge::merge_events;
use crate::record::{DisplayEvent, MergedBlock, RawEventRecord, find_event_for_day};
use crate::title::parse_duration;
use crate::window::DateWindow;

/// Break time owed for a shift, by its length in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakPolicy;

impl BreakPolicy {
    /// Shifts at least this long earn [`Self::SHORT_SHIFT_BREAK`].
    pub const SHORT_SHIFT_HOURS: i64 = 6;
    /// Shifts at least this long earn [`Self::LONG_SHIFT_BREAK`].
    pub const LONG_SHIFT_HOURS: i64 = 8;
    pub const SHORT_SHIFT_BREAK: f64 = 0.25;
    pub const LONG_SHIFT_BREAK: f64 = 0.5;

    pub const fn for_day_sum(day_sum: i64) -> f64 {
        if day_sum >= Self::LONG_SHIFT_HOURS {
            Self::LONG_SHIFT_BREAK
        } else if day_sum >= Self::SHORT_SHIFT_HOURS {
            Self::SHORT_SHIFT_BREAK
        } else {
            0.0
        }
    }
}

/// Result of one aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    /// Hours worked in the window.
    pub total_hours: i64,
    /// Break hours owed in the window.
    pub total_break: f64,
    /// Every input record, resolved and ordered by start day.
    pub sorted_events: Vec<DisplayEvent>,
    /// `sorted_events` collapsed into contiguous blocks.
    pub merged_events: Vec<MergedBlock>,
}

impl AggregationResult {
    /// The entry a click on `day` opens.
    pub fn event_for_day(&self, day: NaiveDate) -> Option<&DisplayEvent> {
        find_event_for_day(&self.sorted_events, day)
    }
}

/// Computes totals and display lists for `records`.
///
/// All records are displayed; only those starting inside `window` count
/// towards the totals. Unknown colour ids and unreadable hour ranges degrade
/// to the default colour and a zero contribution.
pub fn aggregate(
    records: &[RawEventRecord],
    colors: &ColorTable,
    window: &DateWindow,
) -> AggregationResult {
    let mut total_hours: i64 = 0;
    let mut total_break = 0.0;

    let mut sorted_events: Vec<DisplayEvent> = records
        .iter()
        .map(|record| {
            let color = colors.resolve(record.color_id);

            if window.contains(record.start) {
                match parse_duration(&record.title) {
                    Ok(Some(range)) => {
                        let day_sum = range.day_sum();
                        if let Some(sum) = total_hours.checked_add(day_sum) {
                            total_hours = sum;
                            total_break += BreakPolicy::for_day_sum(day_sum);
                        } else {
                            tracing::debug!(
                                event_id = %record.id,
                                day_sum,
                                "skipping hour range that overflows the total"
                            );
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        tracing::debug!(
                            event_id = %record.id,
                            title = %record.title,
                            error = %e,
                            "skipping unreadable hour range"
                        );
                    }
                }
            }

            DisplayEvent::from_record(record, color)
        })
        .collect();

    // Stable, so same-day entries keep their input order.
    sorted_events.sort_by_key(|e| e.start);
    let merged_events = merge_events(&sorted_events);

    AggregationResult {
        total_hours,
        total_break,
        sorted_events,
        merged_events,
    }
}
