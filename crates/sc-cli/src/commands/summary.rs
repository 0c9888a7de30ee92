//! Summary command: monthly totals and merged calendar blocks.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use sc_core::{AggregationResult, DateWindow};

use super::util::{aggregate_offloaded, display_title, load_records};
use crate::Config;

/// Formats totals and blocks for the terminal.
pub fn format_summary(window: &DateWindow, result: &AggregationResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Window {} to {}", window.start(), window.end());
    let _ = writeln!(out, "Hours  {}", result.total_hours);
    let _ = writeln!(out, "Break  {:.2}", result.total_break);
    let _ = writeln!(out);

    if result.merged_events.is_empty() {
        let _ = writeln!(out, "No entries.");
        return out;
    }

    for block in &result.merged_events {
        let days = (block.end - block.start).num_days();
        let _ = writeln!(
            out,
            "{}  {:>2}d  {}  {}",
            block.start,
            days,
            block.background_color,
            display_title(&block.title)
        );
    }

    out
}

pub fn run(config: &Config, records_path: &Path, window: DateWindow, json: bool) -> Result<()> {
    let records = load_records(records_path)?;
    let result = aggregate_offloaded(records, config.theme_colors.clone(), window)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_summary(&window, &result));
    }

    Ok(())
}
