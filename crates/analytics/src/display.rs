//! Renders a batch of parameter records as a fixed-column grid table.
//!
//! This is presentation only: nothing here computes statistics.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use comfy_table::{CellAlignment, Table};
use core_types::ParameterRecord;

const HEADERS: [&str; 6] = ["ID", "Parameter", "Value", "Timestamp", "Description", "Active"];

/// Columns holding numbers are right-aligned, everything else left-aligned.
const RIGHT_ALIGNED_COLUMNS: [usize; 2] = [0, 2];

/// `+---+` borders with a `=` rule under the header and a rule between every row.
const GRID_PRESET: &str = "||--+=++|-+++++++++";

const MAX_DESCRIPTION_CHARS: usize = 25;
const ACTIVE_GLYPH: &str = "✓";
const INACTIVE_GLYPH: &str = "✗";

const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds the display table for a batch.
///
/// The output depends only on `records`, so rendering the same batch twice yields
/// byte-identical strings.
pub fn render_parameter_table(records: &[ParameterRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(GRID_PRESET).set_header(HEADERS.to_vec());

    for record in records {
        table.add_row(vec![
            record.id.map(|id| id.to_string()).unwrap_or_default(),
            record.parameter_name().to_string(),
            format!("{:.4}", record.value()),
            format_timestamp(record.timestamp_str()),
            truncate_description(record.description_str()),
            active_glyph(record.is_active()).to_string(),
        ]);
    }

    for index in RIGHT_ALIGNED_COLUMNS {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.to_string()
}

/// Reformats an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// The wall-clock time is kept in the timestamp's own offset. Anything that does not
/// parse is returned unchanged; this never fails.
pub fn format_timestamp(ts: &str) -> String {
    if ts.is_empty() {
        return String::new();
    }
    match parse_iso8601(ts) {
        Some(parsed) => parsed.format(OUTPUT_FORMAT).to_string(),
        None => ts.to_string(),
    }
}

fn parse_iso8601(ts: &str) -> Option<NaiveDateTime> {
    // Covers the `Z` suffix as well as `+HH:MM` offsets.
    if let Ok(parsed) = DateTime::parse_from_rfc3339(ts) {
        return Some(parsed.naive_local());
    }

    const WITH_OFFSET: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%.f%#z"];
    for fmt in WITH_OFFSET {
        if let Ok(parsed) = DateTime::parse_from_str(ts, fmt) {
            return Some(parsed.naive_local());
        }
    }

    const NAIVE: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in NAIVE {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(ts, fmt) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(ts, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Cuts descriptions longer than 25 characters down to 25 and appends `...`.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        let head: String = description.chars().take(MAX_DESCRIPTION_CHARS).collect();
        format!("{head}...")
    } else {
        description.to_string()
    }
}

fn active_glyph(is_active: bool) -> &'static str {
    if is_active { ACTIVE_GLYPH } else { INACTIVE_GLYPH }
}
