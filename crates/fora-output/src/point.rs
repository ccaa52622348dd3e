//! Line-protocol points for the time-series sink.
//!
//! The mapping contract: the measurement kind names the series, `unit`,
//! `period`, and `derived` become tags, the reading becomes the single
//! `value` field, and the row timestamp is the time index (nanoseconds).

use std::collections::BTreeMap;

use fora_model::{CanonicalMeasurement, MeasurementValue};

/// One InfluxDB line-protocol point.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub measurement: String,
    pub tags: BTreeMap<&'static str, String>,
    pub value: MeasurementValue,
    /// Nanoseconds since the Unix epoch.
    pub timestamp_ns: i64,
}

impl Point {
    /// Translate a canonical measurement into its sink representation.
    pub fn from_measurement(measurement: &CanonicalMeasurement) -> Self {
        let mut tags = BTreeMap::new();
        tags.insert("unit", measurement.unit.token().to_string());
        if let Some(period) = measurement.period.as_tag() {
            tags.insert("period", period.to_string());
        }
        if measurement.derived {
            tags.insert("derived", "true".to_string());
        }
        Self {
            measurement: measurement.kind.as_str().to_string(),
            tags,
            value: measurement.value.clone(),
            timestamp_ns: measurement
                .timestamp
                .and_utc()
                .timestamp_micros()
                .saturating_mul(1000),
        }
    }

    /// Render the point as one line of InfluxDB line protocol.
    pub fn to_line_protocol(&self) -> String {
        let mut line = String::new();
        write_escaped(&mut line, &self.measurement, &[',', ' ']);
        for (key, value) in &self.tags {
            line.push(',');
            line.push_str(key);
            line.push('=');
            write_escaped(&mut line, value, &[',', ' ', '=']);
        }
        line.push_str(" value=");
        match &self.value {
            MeasurementValue::Numeric(v) => line.push_str(&format!("{v}")),
            MeasurementValue::Text(s) => {
                line.push('"');
                for ch in s.chars() {
                    if ch == '"' || ch == '\\' {
                        line.push('\\');
                    }
                    line.push(ch);
                }
                line.push('"');
            }
        }
        line.push_str(&format!(" {}", self.timestamp_ns));
        line
    }
}

/// Render a whole batch, one point per line, input order preserved.
pub fn to_line_protocol(measurements: &[CanonicalMeasurement]) -> String {
    let mut out = String::new();
    for measurement in measurements {
        out.push_str(&Point::from_measurement(measurement).to_line_protocol());
        out.push('\n');
    }
    out
}

fn write_escaped(out: &mut String, value: &str, special: &[char]) {
    for ch in value.chars() {
        if special.contains(&ch) || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fora_model::{MeasurementKind, MeasurementUnit, Period};

    fn glucose() -> CanonicalMeasurement {
        CanonicalMeasurement {
            timestamp: NaiveDate::from_ymd_opt(2024, 7, 24)
                .unwrap()
                .and_hms_opt(14, 48, 0)
                .unwrap(),
            kind: MeasurementKind::BloodGlucose,
            unit: MeasurementUnit::MgDl,
            value: MeasurementValue::Numeric(95.5),
            period: Period::BeforeMeal,
            note: String::new(),
            derived: false,
        }
    }

    #[test]
    fn numeric_point_renders() {
        let line = Point::from_measurement(&glucose()).to_line_protocol();
        assert_eq!(
            line,
            "blood_glucose,period=before_meal,unit=mg_dl value=95.5 1721832480000000000"
        );
    }

    #[test]
    fn empty_period_omits_the_tag() {
        let mut m = glucose();
        m.period = Period::Empty;
        let point = Point::from_measurement(&m);
        assert!(!point.tags.contains_key("period"));
    }

    #[test]
    fn derived_measurement_is_tagged() {
        let mut m = glucose();
        m.kind = MeasurementKind::Hemoglobin;
        m.derived = true;
        let point = Point::from_measurement(&m);
        assert_eq!(point.tags.get("derived").map(String::as_str), Some("true"));
        assert_eq!(point.measurement, "hemoglobin");
    }

    #[test]
    fn text_value_is_quoted_and_escaped() {
        let mut m = glucose();
        m.kind = MeasurementKind::Note;
        m.unit = MeasurementUnit::Text;
        m.value = MeasurementValue::Text("said \"ok\"".to_string());
        let line = Point::from_measurement(&m).to_line_protocol();
        assert!(line.contains("value=\"said \\\"ok\\\"\""));
    }

    #[test]
    fn tag_values_escape_spaces() {
        let mut point = Point::from_measurement(&glucose());
        point.tags.insert("device", "fora 6 connect".to_string());
        let line = point.to_line_protocol();
        assert!(line.contains("device=fora\\ 6\\ connect"));
    }

    #[test]
    fn batch_renders_one_line_per_point() {
        let batch = to_line_protocol(&[glucose(), glucose()]);
        assert_eq!(batch.lines().count(), 2);
    }
}
