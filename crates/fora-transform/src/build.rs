//! The measurement builder: wide rows in, canonical measurements out.

use chrono::NaiveDateTime;
use tracing::warn;

use fora_model::{
    CanonicalMeasurement, ForaError, MeasurementKind, MeasurementUnit, MeasurementValue,
    MedicalRecordRow, Result,
};

use crate::derive::derive_hemoglobin;
use crate::resolve::resolve_unit;

/// Options for a build run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Treat zero numeric readings as present instead of absent.
    pub include_empty: bool,
}

/// One failed row of a batch build.
#[derive(Debug, Clone, PartialEq)]
pub struct RowFailure {
    /// Index of the row in the input sequence.
    pub row_index: usize,
    /// Row timestamp, for operator diagnostics.
    pub timestamp: NaiveDateTime,
    pub error: ForaError,
}

/// Result of a batch build: measurements from the rows that succeeded plus
/// one failure record per row that did not. The caller decides whether a
/// partial batch is worth forwarding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub measurements: Vec<CanonicalMeasurement>,
    pub failures: Vec<RowFailure>,
}

impl BatchOutcome {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Build the canonical measurements for one row with default options.
///
/// Fail-fast within the row: the first resolution or derivation error is
/// returned and no partial emission is exposed.
pub fn build(row: &MedicalRecordRow) -> Result<Vec<CanonicalMeasurement>> {
    build_with_options(row, BuildOptions::default())
}

/// Build the canonical measurements for one row.
///
/// Present readings are processed in the row's declared column order, which
/// fixes the output order. A hematocrit reading emits two measurements: the
/// direct one followed immediately by the derived hemoglobin.
pub fn build_with_options(
    row: &MedicalRecordRow,
    options: BuildOptions,
) -> Result<Vec<CanonicalMeasurement>> {
    let mut out = Vec::new();
    for (column_key, value) in row.readings(options.include_empty) {
        let (unit, token) = resolve_unit(column_key)?;
        let kind: MeasurementKind = kind_key(column_key, token).parse().map_err(|_| {
            ForaError::UnsupportedMeasurementKind {
                column: column_key.to_string(),
            }
        })?;
        match kind {
            MeasurementKind::BloodGlucose
            | MeasurementKind::Ketone
            | MeasurementKind::Cholesterol
            | MeasurementKind::UricAcid
            | MeasurementKind::Triglycerides
            | MeasurementKind::Lactate
            | MeasurementKind::Note => {
                out.push(direct(row, kind, unit, value));
            }
            MeasurementKind::Hematocrit => {
                let hematocrit = value.as_f64();
                out.push(direct(row, kind, unit, value));
                if let Some(hematocrit) = hematocrit {
                    let target_unit = MeasurementKind::Hemoglobin.canonical_unit();
                    let hemoglobin = derive_hemoglobin(hematocrit, unit, target_unit)?;
                    out.push(CanonicalMeasurement {
                        timestamp: row.date_time,
                        kind: MeasurementKind::Hemoglobin,
                        unit: target_unit,
                        value: MeasurementValue::Numeric(hemoglobin),
                        period: row.period,
                        note: row.note.clone(),
                        derived: true,
                    });
                }
            }
            // Hemoglobin is derived-only; a direct device reading has no
            // construction rule.
            MeasurementKind::Hemoglobin => {
                return Err(ForaError::UnsupportedMeasurementKind {
                    column: column_key.to_string(),
                });
            }
        }
    }
    Ok(out)
}

/// Build a whole batch, isolating failures per row.
///
/// Row order is preserved in the concatenated output; a failed row
/// contributes nothing to `measurements` and one entry to `failures`.
pub fn build_all(rows: &[MedicalRecordRow], options: BuildOptions) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for (row_index, row) in rows.iter().enumerate() {
        match build_with_options(row, options) {
            Ok(measurements) => outcome.measurements.extend(measurements),
            Err(error) => {
                warn!(row_index, timestamp = %row.date_time, %error, "row failed to build");
                outcome.failures.push(RowFailure {
                    row_index,
                    timestamp: row.date_time,
                    error,
                });
            }
        }
    }
    outcome
}

/// Strip the resolved unit token (and its separator) off a column key,
/// leaving the kind prefix. Keys without the suffix (the free-text `note`
/// column) pass through whole.
fn kind_key<'a>(column_key: &'a str, token: &str) -> &'a str {
    column_key
        .strip_suffix(token)
        .and_then(|prefix| prefix.strip_suffix('_'))
        .unwrap_or(column_key)
}

fn direct(
    row: &MedicalRecordRow,
    kind: MeasurementKind,
    unit: MeasurementUnit,
    value: MeasurementValue,
) -> CanonicalMeasurement {
    CanonicalMeasurement {
        timestamp: row.date_time,
        kind,
        unit,
        value,
        period: row.period,
        note: row.note.clone(),
        derived: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_key_strips_unit_suffix() {
        assert_eq!(kind_key("blood_glucose_mg_dl", "mg_dl"), "blood_glucose");
        assert_eq!(kind_key("hematocrit_perc", "perc"), "hematocrit");
        assert_eq!(kind_key("uric_acid_umol", "umol"), "uric_acid");
        assert_eq!(kind_key("note", "text"), "note");
    }
}
