//! Human-readable tables for the `show` and `convert` commands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use fora_model::{CanonicalMeasurement, MedicalRecordRow, Period};
use fora_transform::RowFailure;

use crate::commands::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!(
        "{} record(s) -> {} point(s), {} row(s) failed",
        result.records, result.points, result.failed_rows
    );
}

pub fn print_records(records: &[MedicalRecordRow]) {
    let mut table = new_table(vec!["#", "Date/Time", "Period", "Readings", "Note"]);
    for (index, record) in records.iter().enumerate() {
        let readings = record
            .readings(false)
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(record.date_time.format("%Y/%m/%d %H:%M")),
            Cell::new(period_label(record.period)),
            Cell::new(readings),
            Cell::new(&record.note),
        ]);
    }
    println!("{table}");
}

pub fn print_measurements(measurements: &[CanonicalMeasurement]) {
    let mut table = new_table(vec![
        "Date/Time",
        "Kind",
        "Value",
        "Unit",
        "Period",
        "Derived",
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    for m in measurements {
        table.add_row(vec![
            Cell::new(m.timestamp.format("%Y/%m/%d %H:%M")),
            Cell::new(m.kind),
            Cell::new(&m.value),
            Cell::new(m.unit),
            Cell::new(period_label(m.period)),
            Cell::new(if m.derived { "yes" } else { "" }),
        ]);
    }
    println!("{table}");
}

/// Failed rows go to stderr with enough context to diagnose a firmware or
/// format mismatch: the row timestamp and the offending column key travel
/// in the error itself.
pub fn print_failures(failures: &[RowFailure]) {
    for failure in failures {
        eprintln!(
            "row {} ({}): {}",
            failure.row_index + 1,
            failure.timestamp.format("%Y/%m/%d %H:%M"),
            failure.error
        );
    }
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn period_label(period: Period) -> &'static str {
    period.as_tag().unwrap_or("")
}
