//! Core domain logic for the shift calendar.
//!
//! This crate contains the fundamental types and logic for:
//! - Aggregation: monthly hour and break totals from shift records
//! - Merging: collapsing consecutive same-title days into display blocks
//! - Titles: reading and writing the hour range packed into shift titles
//! - Palette: resolving and ordering theme colours

mod aggregate;
pub mod color;
mod merge;
pub mod record;
pub mod title;
pub mod types;
pub mod window;

pub use aggregate::{AggregationResult, BreakPolicy, aggregate};
pub use color::{ColorTable, ThemeColor};
pub use merge::merge_events;
pub use record::{DisplayEvent, MergedBlock, RawEventRecord, find_event_for_day};
pub use title::{ShiftRange, ShiftTitle, TitleError, format_time_range};
pub use types::{ColorId, EventId, ValidationError};
pub use window::DateWindow;
