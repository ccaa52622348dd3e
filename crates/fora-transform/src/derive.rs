//! Derived-value formulas.

use fora_model::{ForaError, MeasurementKind, MeasurementUnit, Result};

/// Hematocrit(%) to hemoglobin(mg/dL) calibration factor, reverse-engineered
/// from the device's own derived readings.
pub const HEMATOCRIT_TO_HEMOGLOBIN: f64 = 0.340000003576279;

/// Compute hemoglobin from a hematocrit reading.
///
/// Only the percentage → mg/dL pair has a formula. The device truncates the
/// scaled value to one decimal place, so the exact two-step floor matters:
/// `floor(h * k * 10) / 10`, not `round` and not an unscaled floor.
/// 44.0% → 14.9, 40.0% → 13.6.
///
/// # Errors
///
/// `ForaError::UnsupportedUnitConversion` for any other unit pair. No
/// calibration formula is known for them; guessing or defaulting would
/// silently corrupt the series.
pub fn derive_hemoglobin(
    hematocrit: f64,
    from: MeasurementUnit,
    to: MeasurementUnit,
) -> Result<f64> {
    if from != MeasurementUnit::Percentage || to != MeasurementUnit::MgDl {
        return Err(ForaError::UnsupportedUnitConversion {
            kind: MeasurementKind::Hemoglobin,
            from,
            to,
        });
    }
    Ok((hematocrit * HEMATOCRIT_TO_HEMOGLOBIN * 10.0).floor() / 10.0)
}
