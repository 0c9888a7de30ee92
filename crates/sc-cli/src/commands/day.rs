//! Day command: the entry a click on a calendar day would open.

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use sc_core::{DateWindow, DisplayEvent};

use super::util::{aggregate_offloaded, display_title, load_records};
use crate::Config;

pub fn format_day(day: NaiveDate, event: Option<&DisplayEvent>) -> String {
    match event {
        Some(e) => format!(
            "{}  {}  {}  [{}]",
            e.start,
            e.background_color,
            display_title(&e.title),
            e.id
        ),
        None => format!("No entry on {day}."),
    }
}

pub fn run(config: &Config, records_path: &Path, day: NaiveDate, json: bool) -> Result<()> {
    let records = load_records(records_path)?;
    let result = aggregate_offloaded(
        records,
        config.theme_colors.clone(),
        DateWindow::month_of(day),
    )?;
    let event = result.event_for_day(day);

    if json {
        println!("{}", serde_json::to_string_pretty(&event)?);
    } else {
        println!("{}", format_day(day, event));
    }

    Ok(())
}
