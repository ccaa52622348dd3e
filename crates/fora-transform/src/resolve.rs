//! Unit resolution from column-key suffixes.

use fora_model::schema::keys;
use fora_model::{ForaError, MeasurementUnit, Result};

/// Known unit tokens in matching priority order.
///
/// The order is load-bearing: the device's tokens are not prefix-free
/// (`..._mg_dl` also ends with `g_dl`), so `mg_dl` must be tested before
/// `g_dl`. First match wins.
const UNIT_TOKENS: &[(MeasurementUnit, &str)] = &[
    (MeasurementUnit::MgDl, "mg_dl"),
    (MeasurementUnit::GDl, "g_dl"),
    (MeasurementUnit::MmolL, "mmol"),
    (MeasurementUnit::UmolL, "umol"),
    (MeasurementUnit::Percentage, "perc"),
];

/// Resolve the measurement unit encoded in a column key's suffix.
///
/// Returns the unit together with the token that matched. The free-text
/// `note` column carries no unit suffix and resolves to the text sentinel.
/// Stateless and referentially transparent.
///
/// # Errors
///
/// `ForaError::UnrecognizedUnit` when no known token matches the suffix.
/// This indicates an export format the pipeline does not yet understand and
/// is not recoverable here.
pub fn resolve_unit(column_key: &str) -> Result<(MeasurementUnit, &'static str)> {
    if column_key == keys::NOTE {
        return Ok((MeasurementUnit::Text, MeasurementUnit::Text.token()));
    }
    for (unit, token) in UNIT_TOKENS {
        if column_key.ends_with(token) {
            return Ok((*unit, token));
        }
    }
    Err(ForaError::UnrecognizedUnit {
        column: column_key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_schema_column() {
        for column in fora_model::READING_COLUMNS {
            let (unit, token) = resolve_unit(column.key).expect(column.key);
            assert_eq!(unit, column.unit, "wrong unit for {}", column.key);
            assert_eq!(token, column.unit.token());
        }
    }

    #[test]
    fn mg_dl_wins_over_g_dl() {
        let (unit, token) = resolve_unit("blood_glucose_mg_dl").unwrap();
        assert_eq!(unit, MeasurementUnit::MgDl);
        assert_eq!(token, "mg_dl");

        let (unit, token) = resolve_unit("hemoglobin_g_dl").unwrap();
        assert_eq!(unit, MeasurementUnit::GDl);
        assert_eq!(token, "g_dl");
    }

    #[test]
    fn umol_is_not_mmol() {
        let (unit, _) = resolve_unit("uric_acid_umol").unwrap();
        assert_eq!(unit, MeasurementUnit::UmolL);
        let (unit, _) = resolve_unit("uric_acid_mmol").unwrap();
        assert_eq!(unit, MeasurementUnit::MmolL);
    }

    #[test]
    fn note_resolves_to_text_sentinel() {
        assert_eq!(
            resolve_unit("note").unwrap(),
            (MeasurementUnit::Text, "text")
        );
    }

    #[test]
    fn unknown_suffix_is_an_error() {
        let err = resolve_unit("heart_rate_bpm").unwrap_err();
        assert_eq!(
            err,
            ForaError::UnrecognizedUnit {
                column: "heart_rate_bpm".to_string()
            }
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        assert_eq!(
            resolve_unit("hematocrit_perc").unwrap(),
            resolve_unit("hematocrit_perc").unwrap()
        );
    }
}
