//! Data model for the FORA medical-record pipeline.
//!
//! - **measurement**: measurement kinds, units, periods, and the canonical
//!   measurement output type
//! - **record**: the wide medical-record row the CSV reader produces
//! - **schema**: the versioned table of supported device columns
//! - **error**: domain errors for unit resolution and derivation

pub mod error;
pub mod measurement;
pub mod record;
pub mod schema;

pub use error::{ForaError, Result};
pub use measurement::{
    CanonicalMeasurement, MeasurementKind, MeasurementUnit, MeasurementValue, Period,
};
pub use record::MedicalRecordRow;
pub use schema::{ColumnSpec, DATE_TIME_FORMAT, READING_COLUMNS, SCHEMA_VERSION};
