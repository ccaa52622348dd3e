use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::measurement::{MeasurementValue, Period};
use crate::schema::keys;

/// One wide row of the device export: a timestamp, a meal period, a free-text
/// note, and one numeric column per possible measurement/unit combination.
/// Most numeric columns are zero, which the export uses for "absent".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecordRow {
    pub date_time: NaiveDateTime,
    #[serde(default)]
    pub period: Period,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub blood_glucose_mg_dl: f64,
    #[serde(default)]
    pub blood_glucose_mmol: f64,
    #[serde(default)]
    pub hematocrit_perc: f64,
    #[serde(default)]
    pub ketone_mmol: f64,
    #[serde(default)]
    pub ketone_mg_dl: f64,
    #[serde(default)]
    pub hemoglobin_mmol: f64,
    #[serde(default)]
    pub hemoglobin_g_dl: f64,
    #[serde(default)]
    pub cholesterol_mg_dl: f64,
    #[serde(default)]
    pub cholesterol_mmol: f64,
    #[serde(default)]
    pub uric_acid_mg_dl: f64,
    #[serde(default)]
    pub uric_acid_umol: f64,
    #[serde(default)]
    pub uric_acid_mmol: f64,
    #[serde(default)]
    pub triglycerides_mg_dl: f64,
    #[serde(default)]
    pub triglycerides_mmol: f64,
    #[serde(default)]
    pub lactate_mmol: f64,
}

impl MedicalRecordRow {
    /// New row with the given timestamp and every reading absent.
    pub fn empty(date_time: NaiveDateTime) -> Self {
        Self {
            date_time,
            period: Period::Empty,
            note: String::new(),
            blood_glucose_mg_dl: 0.0,
            blood_glucose_mmol: 0.0,
            hematocrit_perc: 0.0,
            ketone_mmol: 0.0,
            ketone_mg_dl: 0.0,
            hemoglobin_mmol: 0.0,
            hemoglobin_g_dl: 0.0,
            cholesterol_mg_dl: 0.0,
            cholesterol_mmol: 0.0,
            uric_acid_mg_dl: 0.0,
            uric_acid_umol: 0.0,
            uric_acid_mmol: 0.0,
            triglycerides_mg_dl: 0.0,
            triglycerides_mmol: 0.0,
            lactate_mmol: 0.0,
        }
    }

    /// Numeric columns paired with their keys, in the device's declared
    /// column order. This order governs measurement output order.
    fn numeric_columns(&self) -> [(&'static str, f64); 15] {
        [
            (keys::BLOOD_GLUCOSE_MG_DL, self.blood_glucose_mg_dl),
            (keys::BLOOD_GLUCOSE_MMOL, self.blood_glucose_mmol),
            (keys::HEMATOCRIT_PERC, self.hematocrit_perc),
            (keys::KETONE_MMOL, self.ketone_mmol),
            (keys::KETONE_MG_DL, self.ketone_mg_dl),
            (keys::HEMOGLOBIN_MMOL, self.hemoglobin_mmol),
            (keys::HEMOGLOBIN_G_DL, self.hemoglobin_g_dl),
            (keys::CHOLESTEROL_MG_DL, self.cholesterol_mg_dl),
            (keys::CHOLESTEROL_MMOL, self.cholesterol_mmol),
            (keys::URIC_ACID_MG_DL, self.uric_acid_mg_dl),
            (keys::URIC_ACID_UMOL, self.uric_acid_umol),
            (keys::URIC_ACID_MMOL, self.uric_acid_mmol),
            (keys::TRIGLYCERIDES_MG_DL, self.triglycerides_mg_dl),
            (keys::TRIGLYCERIDES_MMOL, self.triglycerides_mmol),
            (keys::LACTATE_MMOL, self.lactate_mmol),
        ]
    }

    /// Set a numeric reading by column key. Unknown keys are ignored; the
    /// ingest layer only passes keys from the schema table.
    pub fn set_reading(&mut self, key: &str, value: f64) {
        match key {
            keys::BLOOD_GLUCOSE_MG_DL => self.blood_glucose_mg_dl = value,
            keys::BLOOD_GLUCOSE_MMOL => self.blood_glucose_mmol = value,
            keys::HEMATOCRIT_PERC => self.hematocrit_perc = value,
            keys::KETONE_MMOL => self.ketone_mmol = value,
            keys::KETONE_MG_DL => self.ketone_mg_dl = value,
            keys::HEMOGLOBIN_MMOL => self.hemoglobin_mmol = value,
            keys::HEMOGLOBIN_G_DL => self.hemoglobin_g_dl = value,
            keys::CHOLESTEROL_MG_DL => self.cholesterol_mg_dl = value,
            keys::CHOLESTEROL_MMOL => self.cholesterol_mmol = value,
            keys::URIC_ACID_MG_DL => self.uric_acid_mg_dl = value,
            keys::URIC_ACID_UMOL => self.uric_acid_umol = value,
            keys::URIC_ACID_MMOL => self.uric_acid_mmol = value,
            keys::TRIGLYCERIDES_MG_DL => self.triglycerides_mg_dl = value,
            keys::TRIGLYCERIDES_MMOL => self.triglycerides_mmol = value,
            keys::LACTATE_MMOL => self.lactate_mmol = value,
            _ => {}
        }
    }

    /// Enumerate the row's present readings as `(column_key, value)` pairs in
    /// declared column order. A zero numeric reading means "absent" unless
    /// `include_empty` is set. A non-blank note enumerates last, as a text
    /// reading under the `note` key.
    ///
    /// Columns of derived-only kinds (the direct hemoglobin columns) only
    /// enumerate when genuinely present: a zero there is not a reading the
    /// pipeline could ever construct, so `include_empty` does not surface it.
    pub fn readings(&self, include_empty: bool) -> Vec<(&'static str, MeasurementValue)> {
        let mut out = Vec::new();
        for (key, value) in self.numeric_columns() {
            let derived_only = crate::schema::column_for_key(key)
                .is_some_and(|column| column.kind.is_derived());
            if value > 0.0 || (include_empty && !derived_only) {
                out.push((key, MeasurementValue::Numeric(value)));
            }
        }
        if !self.note.trim().is_empty() {
            out.push((keys::NOTE, MeasurementValue::Text(self.note.clone())));
        }
        out
    }
}
