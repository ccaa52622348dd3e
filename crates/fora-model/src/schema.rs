//! Versioned export schema for the iFORA HM CSV format.
//!
//! One data table describes every supported column: the human-readable CSV
//! header, the internal column key (`<kind>_<unit token>`), and the (kind,
//! unit) pair the key encodes. Supporting a new device field is an edit to
//! this table, not a logic change elsewhere.

use crate::measurement::{MeasurementKind, MeasurementUnit};

/// Schema revision, bumped whenever a column is added or renamed.
pub const SCHEMA_VERSION: u32 = 1;

/// Column keys, in the device's declared column order.
pub mod keys {
    pub const BLOOD_GLUCOSE_MG_DL: &str = "blood_glucose_mg_dl";
    pub const BLOOD_GLUCOSE_MMOL: &str = "blood_glucose_mmol";
    pub const HEMATOCRIT_PERC: &str = "hematocrit_perc";
    pub const KETONE_MMOL: &str = "ketone_mmol";
    pub const KETONE_MG_DL: &str = "ketone_mg_dl";
    pub const HEMOGLOBIN_MMOL: &str = "hemoglobin_mmol";
    pub const HEMOGLOBIN_G_DL: &str = "hemoglobin_g_dl";
    pub const CHOLESTEROL_MG_DL: &str = "cholesterol_mg_dl";
    pub const CHOLESTEROL_MMOL: &str = "cholesterol_mmol";
    pub const URIC_ACID_MG_DL: &str = "uric_acid_mg_dl";
    pub const URIC_ACID_UMOL: &str = "uric_acid_umol";
    pub const URIC_ACID_MMOL: &str = "uric_acid_mmol";
    pub const TRIGLYCERIDES_MG_DL: &str = "triglycerides_mg_dl";
    pub const TRIGLYCERIDES_MMOL: &str = "triglycerides_mmol";
    pub const LACTATE_MMOL: &str = "lactate_mmol";
    pub const NOTE: &str = "note";
}

/// One supported device column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Header string as it appears in the exported CSV.
    pub header: &'static str,
    /// Internal column key, `<kind>_<unit token>` (free text exempt).
    pub key: &'static str,
    pub kind: MeasurementKind,
    pub unit: MeasurementUnit,
}

/// All supported numeric reading columns, in export order.
///
/// The app double-wraps the hemoglobin header parentheses; that is how the
/// export really looks, not a typo.
pub const READING_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        header: "Blood Glucose(mg/dL)",
        key: keys::BLOOD_GLUCOSE_MG_DL,
        kind: MeasurementKind::BloodGlucose,
        unit: MeasurementUnit::MgDl,
    },
    ColumnSpec {
        header: "Blood Glucose(mmol/L)",
        key: keys::BLOOD_GLUCOSE_MMOL,
        kind: MeasurementKind::BloodGlucose,
        unit: MeasurementUnit::MmolL,
    },
    ColumnSpec {
        header: "Hematocrit(%)",
        key: keys::HEMATOCRIT_PERC,
        kind: MeasurementKind::Hematocrit,
        unit: MeasurementUnit::Percentage,
    },
    ColumnSpec {
        header: "Ketone(mmol/L)",
        key: keys::KETONE_MMOL,
        kind: MeasurementKind::Ketone,
        unit: MeasurementUnit::MmolL,
    },
    ColumnSpec {
        header: "Ketone(mg/dL)",
        key: keys::KETONE_MG_DL,
        kind: MeasurementKind::Ketone,
        unit: MeasurementUnit::MgDl,
    },
    ColumnSpec {
        header: "Hemoglobin((mmol/L))",
        key: keys::HEMOGLOBIN_MMOL,
        kind: MeasurementKind::Hemoglobin,
        unit: MeasurementUnit::MmolL,
    },
    ColumnSpec {
        header: "Hemoglobin((g/dL))",
        key: keys::HEMOGLOBIN_G_DL,
        kind: MeasurementKind::Hemoglobin,
        unit: MeasurementUnit::GDl,
    },
    ColumnSpec {
        header: "Cholesterol(mg/dL)",
        key: keys::CHOLESTEROL_MG_DL,
        kind: MeasurementKind::Cholesterol,
        unit: MeasurementUnit::MgDl,
    },
    ColumnSpec {
        header: "Cholesterol(mmol/L)",
        key: keys::CHOLESTEROL_MMOL,
        kind: MeasurementKind::Cholesterol,
        unit: MeasurementUnit::MmolL,
    },
    ColumnSpec {
        header: "Uric Acid(mg/dL)",
        key: keys::URIC_ACID_MG_DL,
        kind: MeasurementKind::UricAcid,
        unit: MeasurementUnit::MgDl,
    },
    ColumnSpec {
        header: "Uric Acid(umol/L)",
        key: keys::URIC_ACID_UMOL,
        kind: MeasurementKind::UricAcid,
        unit: MeasurementUnit::UmolL,
    },
    ColumnSpec {
        header: "Uric Acid(mmol/L)",
        key: keys::URIC_ACID_MMOL,
        kind: MeasurementKind::UricAcid,
        unit: MeasurementUnit::MmolL,
    },
    ColumnSpec {
        header: "Triglycerides(mg/dL)",
        key: keys::TRIGLYCERIDES_MG_DL,
        kind: MeasurementKind::Triglycerides,
        unit: MeasurementUnit::MgDl,
    },
    ColumnSpec {
        header: "Triglycerides(mmol/L)",
        key: keys::TRIGLYCERIDES_MMOL,
        kind: MeasurementKind::Triglycerides,
        unit: MeasurementUnit::MmolL,
    },
    ColumnSpec {
        header: "Lactate(mmol/L)",
        key: keys::LACTATE_MMOL,
        kind: MeasurementKind::Lactate,
        unit: MeasurementUnit::MmolL,
    },
];

/// CSV header of the timestamp column.
pub const DATE_TIME_HEADER: &str = "Date/Time";
/// CSV header of the period column.
pub const PERIOD_HEADER: &str = "Period";
/// CSV header of the free-text note column.
pub const NOTE_HEADER: &str = "Note";

/// Timestamp format of the export, e.g. `2024/07/24 14:48`.
pub const DATE_TIME_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Look up a reading column by its CSV header.
pub fn column_for_header(header: &str) -> Option<&'static ColumnSpec> {
    READING_COLUMNS.iter().find(|c| c.header == header.trim())
}

/// Look up a reading column by its internal key.
pub fn column_for_key(key: &str) -> Option<&'static ColumnSpec> {
    READING_COLUMNS.iter().find(|c| c.key == key)
}
