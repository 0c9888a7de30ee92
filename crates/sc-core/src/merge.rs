//! Run-length merge of day events into contiguous blocks.

use chrono::{Days, NaiveDate};

use crate::color::TEXT_COLOR;
use crate::record::{DisplayEvent, MergedBlock};

/// Block being extended while walking the sorted events.
struct OpenBlock<'a> {
    start: NaiveDate,
    end: NaiveDate,
    title: &'a str,
    color: &'a str,
}

impl<'a> OpenBlock<'a> {
    fn starting_at(event: &'a DisplayEvent) -> Self {
        Self {
            start: event.start,
            end: event.start,
            title: &event.title,
            color: &event.background_color,
        }
    }

    /// True when `event` falls on the day right after the block with the same title.
    fn continues_with(&self, event: &DisplayEvent) -> bool {
        event.title == self.title && (event.start - self.end).num_days() == 1
    }

    fn close(self) -> MergedBlock {
        MergedBlock {
            title: self.title.to_string(),
            start: self.start,
            end: self.end.checked_add_days(Days::new(1)).unwrap_or(self.end),
            all_day: true,
            background_color: self.color.to_string(),
            border_color: self.color.to_string(),
            text_color: TEXT_COLOR.to_string(),
        }
    }
}

/// Collapses runs of consecutive days carrying the same title.
///
/// `events` must already be sorted by `start`. Each block keeps the colour of
/// its first day and gets an exclusive `end`.
pub fn merge_events(events: &[DisplayEvent]) -> Vec<MergedBlock> {
    let Some((first, rest)) = events.split_first() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    let mut block = OpenBlock::starting_at(first);

    for event in rest {
        if block.continues_with(event) {
            block.end = event.start;
        } else {
            merged.push(block.close());
            block = OpenBlock::starting_at(event);
        }
    }

    merged.push(block.close());
    merged
}
