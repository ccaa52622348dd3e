use thiserror::Error;

use crate::measurement::{MeasurementKind, MeasurementUnit};

/// Domain errors raised while normalizing a medical record.
///
/// All three variants indicate a device export the pipeline does not yet
/// understand (new firmware, new unit encoding). They carry enough context
/// for an operator to diagnose the mismatch from a log line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForaError {
    /// A column key's suffix matches no known unit token.
    #[error("unrecognized unit suffix in column key `{column}`")]
    UnrecognizedUnit { column: String },

    /// A column key's kind has no construction rule.
    #[error("unsupported measurement kind for column key `{column}`")]
    UnsupportedMeasurementKind { column: String },

    /// A derivation was requested for a unit pair with no defined formula.
    #[error("no conversion defined for {kind} from {from} to {to}")]
    UnsupportedUnitConversion {
        kind: MeasurementKind,
        from: MeasurementUnit,
        to: MeasurementUnit,
    },
}

pub type Result<T> = std::result::Result<T, ForaError>;
