use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Reading types the FORA device can report.
///
/// Hemoglobin is the only derived kind: the device never exports it as a
/// direct reading here, it is always computed from a hematocrit reading in
/// the same row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    BloodGlucose,
    Hematocrit,
    Hemoglobin,
    Ketone,
    Cholesterol,
    UricAcid,
    Triglycerides,
    Lactate,
    Note,
}

impl MeasurementKind {
    /// Canonical series name, also the kind prefix of the device column keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementKind::BloodGlucose => "blood_glucose",
            MeasurementKind::Hematocrit => "hematocrit",
            MeasurementKind::Hemoglobin => "hemoglobin",
            MeasurementKind::Ketone => "ketone",
            MeasurementKind::Cholesterol => "cholesterol",
            MeasurementKind::UricAcid => "uric_acid",
            MeasurementKind::Triglycerides => "triglycerides",
            MeasurementKind::Lactate => "lactate",
            MeasurementKind::Note => "note",
        }
    }

    /// Default unit for the kind when the column key does not say otherwise.
    pub fn canonical_unit(&self) -> MeasurementUnit {
        match self {
            MeasurementKind::BloodGlucose => MeasurementUnit::MgDl,
            MeasurementKind::Hematocrit => MeasurementUnit::Percentage,
            MeasurementKind::Hemoglobin => MeasurementUnit::MgDl,
            MeasurementKind::Ketone => MeasurementUnit::MmolL,
            MeasurementKind::Cholesterol => MeasurementUnit::MgDl,
            MeasurementKind::UricAcid => MeasurementUnit::MgDl,
            MeasurementKind::Triglycerides => MeasurementUnit::MgDl,
            MeasurementKind::Lactate => MeasurementUnit::MmolL,
            MeasurementKind::Note => MeasurementUnit::Text,
        }
    }

    /// True only for Hemoglobin, which is computed rather than read.
    pub fn is_derived(&self) -> bool {
        matches!(self, MeasurementKind::Hemoglobin)
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MeasurementKind {
    type Err = String;

    /// Parse a column-key kind prefix (unit suffix already stripped).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blood_glucose" => Ok(MeasurementKind::BloodGlucose),
            "hematocrit" => Ok(MeasurementKind::Hematocrit),
            "hemoglobin" => Ok(MeasurementKind::Hemoglobin),
            "ketone" => Ok(MeasurementKind::Ketone),
            "cholesterol" => Ok(MeasurementKind::Cholesterol),
            "uric_acid" => Ok(MeasurementKind::UricAcid),
            "triglycerides" => Ok(MeasurementKind::Triglycerides),
            "lactate" => Ok(MeasurementKind::Lactate),
            "note" => Ok(MeasurementKind::Note),
            other => Err(format!("unknown measurement kind: {other}")),
        }
    }
}

/// Physical units the device encodes in its column-name suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementUnit {
    MgDl,
    GDl,
    MmolL,
    UmolL,
    Percentage,
    /// Sentinel for free-text columns, which carry no physical unit.
    Text,
}

impl MeasurementUnit {
    /// Machine token used as the column-key suffix for this unit.
    pub fn token(&self) -> &'static str {
        match self {
            MeasurementUnit::MgDl => "mg_dl",
            MeasurementUnit::GDl => "g_dl",
            MeasurementUnit::MmolL => "mmol",
            MeasurementUnit::UmolL => "umol",
            MeasurementUnit::Percentage => "perc",
            MeasurementUnit::Text => "text",
        }
    }

    /// Human-readable unit symbol as printed on the device export headers.
    pub fn symbol(&self) -> &'static str {
        match self {
            MeasurementUnit::MgDl => "mg/dL",
            MeasurementUnit::GDl => "g/dL",
            MeasurementUnit::MmolL => "mmol/L",
            MeasurementUnit::UmolL => "umol/L",
            MeasurementUnit::Percentage => "%",
            MeasurementUnit::Text => "",
        }
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Meal-relative context of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    BeforeMeal,
    AfterMeal,
    Generic,
    /// The export left the period column blank.
    #[default]
    Empty,
}

impl Period {
    /// Tag value for time-series storage; None when the period is unset.
    pub fn as_tag(&self) -> Option<&'static str> {
        match self {
            Period::BeforeMeal => Some("before_meal"),
            Period::AfterMeal => Some("after_meal"),
            Period::Generic => Some("generic"),
            Period::Empty => None,
        }
    }
}

impl FromStr for Period {
    type Err = String;

    /// Parse the period strings the iFORA HM app exports.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Before Meal" => Ok(Period::BeforeMeal),
            "After Meal" => Ok(Period::AfterMeal),
            "GEN" => Ok(Period::Generic),
            "" => Ok(Period::Empty),
            other => Err(format!("unknown period: {other}")),
        }
    }
}

/// Field value of a canonical measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasurementValue {
    Numeric(f64),
    Text(String),
}

impl MeasurementValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MeasurementValue::Numeric(v) => Some(*v),
            MeasurementValue::Text(_) => None,
        }
    }
}

impl fmt::Display for MeasurementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementValue::Numeric(v) => write!(f, "{v}"),
            MeasurementValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// The narrow, single-value output representation used for time-series
/// storage. Constructed exactly once by the measurement builder from one
/// (row, column) pair or derivation step; immutable thereafter.
///
/// `unit` is always consistent with how `value` was produced: a derived
/// hemoglobin carries the unit of the derivation output, never the unit of
/// the hematocrit input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalMeasurement {
    pub timestamp: NaiveDateTime,
    pub kind: MeasurementKind,
    pub unit: MeasurementUnit,
    pub value: MeasurementValue,
    pub period: Period,
    pub note: String,
    pub derived: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_parses_device_strings() {
        assert_eq!("Before Meal".parse::<Period>(), Ok(Period::BeforeMeal));
        assert_eq!("After Meal".parse::<Period>(), Ok(Period::AfterMeal));
        assert_eq!("GEN".parse::<Period>(), Ok(Period::Generic));
        assert_eq!("".parse::<Period>(), Ok(Period::Empty));
        assert_eq!("  GEN  ".parse::<Period>(), Ok(Period::Generic));
        assert!("Lunch".parse::<Period>().is_err());
    }

    #[test]
    fn only_hemoglobin_is_derived() {
        assert!(MeasurementKind::Hemoglobin.is_derived());
        assert!(!MeasurementKind::Hematocrit.is_derived());
        assert!(!MeasurementKind::BloodGlucose.is_derived());
    }

    #[test]
    fn unit_tokens_are_distinct() {
        let tokens = [
            MeasurementUnit::MgDl.token(),
            MeasurementUnit::GDl.token(),
            MeasurementUnit::MmolL.token(),
            MeasurementUnit::UmolL.token(),
            MeasurementUnit::Percentage.token(),
            MeasurementUnit::Text.token(),
        ];
        for (i, a) in tokens.iter().enumerate() {
            for b in tokens.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn measurement_serializes() {
        let m = CanonicalMeasurement {
            timestamp: chrono::NaiveDate::from_ymd_opt(2024, 7, 24)
                .unwrap()
                .and_hms_opt(14, 48, 0)
                .unwrap(),
            kind: MeasurementKind::BloodGlucose,
            unit: MeasurementUnit::MgDl,
            value: MeasurementValue::Numeric(95.5),
            period: Period::BeforeMeal,
            note: String::new(),
            derived: false,
        };
        let json = serde_json::to_string(&m).expect("serialize measurement");
        let round: CanonicalMeasurement =
            serde_json::from_str(&json).expect("deserialize measurement");
        assert_eq!(round, m);
    }
}
