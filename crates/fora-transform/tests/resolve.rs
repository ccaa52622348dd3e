//! Property tests for the unit resolver.

use proptest::prelude::*;

use fora_model::{ForaError, MeasurementUnit};
use fora_transform::resolve_unit;

const TOKENS: &[(&str, MeasurementUnit)] = &[
    ("mg_dl", MeasurementUnit::MgDl),
    ("g_dl", MeasurementUnit::GDl),
    ("mmol", MeasurementUnit::MmolL),
    ("umol", MeasurementUnit::UmolL),
    ("perc", MeasurementUnit::Percentage),
];

const KIND_KEYS: &[&str] = &[
    "blood_glucose",
    "hematocrit",
    "hemoglobin",
    "ketone",
    "cholesterol",
    "uric_acid",
    "triglycerides",
    "lactate",
];

#[test]
fn every_kind_token_pair_resolves() {
    for kind in KIND_KEYS {
        for (token, unit) in TOKENS {
            let key = format!("{kind}_{token}");
            let (resolved, matched) = resolve_unit(&key).expect(&key);
            assert_eq!(resolved, *unit, "wrong unit for {key}");
            assert_eq!(matched, *token);
        }
    }
}

proptest! {
    // Any kind prefix works; only the suffix decides the unit.
    #[test]
    fn arbitrary_prefix_resolves_by_suffix(prefix in "[a-z][a-z_]{0,20}", idx in 0usize..TOKENS.len()) {
        let (token, unit) = TOKENS[idx];
        let key = format!("{prefix}_{token}");
        let (resolved, _) = resolve_unit(&key).unwrap();
        prop_assert_eq!(resolved, unit);
    }

    // Keys ending in none of the known tokens never resolve to a guessed unit.
    #[test]
    fn unknown_suffix_never_resolves(key in "[a-z_]{1,24}") {
        prop_assume!(!TOKENS.iter().any(|(token, _)| key.ends_with(token)));
        prop_assume!(key != "note");
        let err = resolve_unit(&key).unwrap_err();
        prop_assert_eq!(err, ForaError::UnrecognizedUnit { column: key });
    }
}
