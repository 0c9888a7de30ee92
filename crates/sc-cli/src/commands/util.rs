//! Shared utilities for CLI commands.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use sc_core::{
    AggregationResult, ColorTable, DateWindow, RawEventRecord, ShiftTitle, format_time_range,
};
use sc_worker::{AggregationRequest, run_offloaded};

/// Parse a `YYYY-MM` month into its window.
pub fn parse_month(s: &str) -> Result<DateWindow, String> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map(DateWindow::month_of)
        .map_err(|_| format!("invalid month: {s}. Use YYYY-MM (e.g., 2025-01)"))
}

/// Parse a `YYYY-MM-DD` calendar day.
pub fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date: {s}. Use YYYY-MM-DD (e.g., 2025-01-15)"))
}

/// Read a JSON array of shift records from a file, or stdin for `-`.
pub fn load_records(path: &Path) -> anyhow::Result<Vec<RawEventRecord>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read records from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read records from {}", path.display()))?
    };

    let records: Vec<RawEventRecord> =
        serde_json::from_str(&content).context("failed to parse shift records")?;
    tracing::debug!(count = records.len(), "loaded shift records");
    Ok(records)
}

/// Run the aggregation on the background worker and wait for the result.
pub fn aggregate_offloaded(
    records: Vec<RawEventRecord>,
    colors: ColorTable,
    window: DateWindow,
) -> anyhow::Result<AggregationResult> {
    let runtime = tokio::runtime::Runtime::new().context("failed to initialize tokio runtime")?;
    let request = AggregationRequest {
        records,
        colors,
        window,
    };
    runtime
        .block_on(run_offloaded(request))
        .context("aggregation failed")
}

/// Human form of a stored title: time ranges read `09:00 - 17:00` and the
/// marker markup becomes `(Kasse N)`.
pub fn display_title(title: &str) -> String {
    let title = ShiftTitle::parse(title);
    let label = display_label(&title.label);
    match title.register {
        Some(register) => format!("{label} (Kasse {register})"),
        None => label,
    }
}

/// Palette or title label with time ranges normalised.
pub fn display_label(label: &str) -> String {
    format_time_range(label).unwrap_or_else(|| label.to_string())
}
