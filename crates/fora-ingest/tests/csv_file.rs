//! File-level ingestion tests.

use std::io::Write;

use fora_ingest::{IngestError, read_records};

const EXPORT: &str = "\
Date/Time,Period,Note,Blood Glucose(mg/dL),Blood Glucose(mmol/L),Hematocrit(%),Ketone(mmol/L),Ketone(mg/dL),Hemoglobin((mmol/L)),Hemoglobin((g/dL)),Cholesterol(mg/dL),Cholesterol(mmol/L),Uric Acid(mg/dL),Uric Acid(umol/L),Uric Acid(mmol/L),Triglycerides(mg/dL),Triglycerides(mmol/L),Lactate(mmol/L)
2024/07/24 08:02,Before Meal,,95.5,0,0,0,0,0,0,0,0,0,0,0,0,0,0
2024/07/24 14:48,GEN,post workout,0,0,44.0,0,0,0,0,0,0,0,0,0,0,0,1.8
";

#[test]
fn reads_a_real_shaped_export() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(EXPORT.as_bytes()).unwrap();

    let rows = read_records(file.path()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].blood_glucose_mg_dl, 95.5);
    assert_eq!(rows[1].hematocrit_perc, 44.0);
    assert_eq!(rows[1].lactate_mmol, 1.8);
    assert_eq!(rows[1].note, "post workout");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_records(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, IngestError::Io(_)));
}
