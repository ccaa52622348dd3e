use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use fora_model::schema::{self, DATE_TIME_HEADER, NOTE_HEADER, PERIOD_HEADER};
use fora_model::{MedicalRecordRow, Period};

use crate::error::IngestError;

/// How each CSV column maps onto the row shape.
enum ColumnRole {
    DateTime,
    Period,
    Note,
    Reading(&'static str),
    /// Header not in the schema table; values are ignored.
    Unknown,
}

/// Read all medical records from a CSV export file.
///
/// Row order in the file is preserved in the returned sequence.
pub fn read_records(csv_path: &Path) -> Result<Vec<MedicalRecordRow>, IngestError> {
    let file = std::fs::File::open(csv_path)?;
    read_records_from_reader(file)
}

/// Read all medical records from any CSV source.
///
/// Headers are matched against the schema's header table; unknown headers
/// are skipped with a warning so a firmware update that adds a column does
/// not break ingestion of the columns we do understand. Cell whitespace is
/// trimmed, empty numeric cells read as 0.0 (the export's "absent").
pub fn read_records_from_reader<R: Read>(
    source: R,
) -> Result<Vec<MedicalRecordRow>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let roles: Vec<ColumnRole> = headers.iter().map(role_for_header).collect();
    if !roles
        .iter()
        .any(|role| matches!(role, ColumnRole::DateTime))
    {
        return Err(IngestError::MissingColumn {
            header: DATE_TIME_HEADER.to_string(),
        });
    }

    let mut records = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        // Header line is line 1.
        let line = idx + 2;

        let mut date_time: Option<NaiveDateTime> = None;
        let mut period = Period::Empty;
        let mut note = String::new();
        let mut readings: Vec<(&'static str, f64)> = Vec::new();

        for (role, raw) in roles.iter().zip(record.iter()) {
            let value = raw.trim();
            match role {
                ColumnRole::DateTime => {
                    date_time = Some(parse_timestamp(value, line)?);
                }
                ColumnRole::Period => {
                    period = value.parse().map_err(|_| IngestError::InvalidPeriod {
                        line,
                        value: value.to_string(),
                    })?;
                }
                ColumnRole::Note => {
                    note = value.to_string();
                }
                ColumnRole::Reading(key) => {
                    readings.push((key, parse_reading(value, key, line)?));
                }
                ColumnRole::Unknown => {}
            }
        }

        let date_time = date_time.ok_or(IngestError::MissingTimestamp { line })?;
        let mut row = MedicalRecordRow::empty(date_time);
        row.period = period;
        row.note = note;
        for (key, value) in readings {
            row.set_reading(key, value);
        }
        records.push(row);
    }

    debug!(records = records.len(), "ingested csv export");
    Ok(records)
}

fn role_for_header(header: &str) -> ColumnRole {
    let trimmed = header.trim();
    match trimmed {
        DATE_TIME_HEADER => ColumnRole::DateTime,
        PERIOD_HEADER => ColumnRole::Period,
        NOTE_HEADER => ColumnRole::Note,
        _ => match schema::column_for_header(trimmed) {
            Some(column) => ColumnRole::Reading(column.key),
            None => {
                warn!(header = trimmed, "skipping unrecognized csv column");
                ColumnRole::Unknown
            }
        },
    }
}

fn parse_timestamp(value: &str, line: usize) -> Result<NaiveDateTime, IngestError> {
    NaiveDateTime::parse_from_str(value, schema::DATE_TIME_FORMAT).map_err(|_| {
        IngestError::InvalidTimestamp {
            line,
            value: value.to_string(),
        }
    })
}

fn parse_reading(value: &str, key: &str, line: usize) -> Result<f64, IngestError> {
    if value.is_empty() {
        return Ok(0.0);
    }
    value.parse().map_err(|_| IngestError::InvalidNumber {
        line,
        column: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Date/Time,Period,Note,Blood Glucose(mg/dL),Hematocrit(%),Ketone(mmol/L)";

    fn ingest(body: &str) -> Result<Vec<MedicalRecordRow>, IngestError> {
        read_records_from_reader(format!("{HEADER}\n{body}").as_bytes())
    }

    #[test]
    fn parses_a_full_row() {
        let rows = ingest("2024/07/24 14:48,Before Meal,fasting,95.5,44.0,0.0").unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(
            row.date_time,
            NaiveDateTime::parse_from_str("2024/07/24 14:48", "%Y/%m/%d %H:%M").unwrap()
        );
        assert_eq!(row.period, Period::BeforeMeal);
        assert_eq!(row.note, "fasting");
        assert_eq!(row.blood_glucose_mg_dl, 95.5);
        assert_eq!(row.hematocrit_perc, 44.0);
        assert_eq!(row.ketone_mmol, 0.0);
    }

    #[test]
    fn tolerates_cell_whitespace() {
        let rows = ingest("2024/07/24 14:48 , GEN , ,  95.5 ,0,").unwrap();
        assert_eq!(rows[0].period, Period::Generic);
        assert_eq!(rows[0].blood_glucose_mg_dl, 95.5);
    }

    #[test]
    fn empty_cells_read_as_absent() {
        let rows = ingest("2024/07/24 14:48,,,,,").unwrap();
        assert!(rows[0].readings(false).is_empty());
    }

    #[test]
    fn preserves_file_row_order() {
        let rows = ingest(
            "2024/07/24 08:00,Before Meal,,95.5,0,0\n2024/07/24 14:48,After Meal,,121.0,0,0",
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].date_time < rows[1].date_time);
        assert_eq!(rows[1].period, Period::AfterMeal);
    }

    #[test]
    fn unknown_header_is_skipped() {
        let rows = read_records_from_reader(
            "Date/Time,Heart Rate(bpm),Blood Glucose(mg/dL)\n2024/07/24 14:48,60,95.5\n"
                .as_bytes(),
        )
        .unwrap();
        assert_eq!(rows[0].blood_glucose_mg_dl, 95.5);
    }

    #[test]
    fn missing_date_time_column_fails() {
        let err = read_records_from_reader("Period,Note\nGEN,hi\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { header } if header == "Date/Time"));
    }

    #[test]
    fn bad_timestamp_names_the_line() {
        let err = ingest("24-07-2024 14:48,,,,,").unwrap_err();
        assert!(matches!(err, IngestError::InvalidTimestamp { line: 2, .. }));
    }

    #[test]
    fn bad_number_names_column_and_line() {
        let err = ingest("2024/07/24 14:48,,,ninety,,").unwrap_err();
        match err {
            IngestError::InvalidNumber {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, "blood_glucose_mg_dl");
                assert_eq!(value, "ninety");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn row_with_missing_fields_is_a_csv_error() {
        // 4 fields against the 6-column header.
        let err = ingest("2024/07/24 14:48,,,95.5").unwrap_err();
        assert!(matches!(err, IngestError::Csv(_)));
    }

    #[test]
    fn unknown_period_fails() {
        let err = ingest("2024/07/24 14:48,Lunch,,,,").unwrap_err();
        assert!(matches!(err, IngestError::InvalidPeriod { line: 2, .. }));
    }
}
