use thiserror::Error;

/// Errors raised while reading a CSV export.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("required column `{header}` not found in csv headers")]
    MissingColumn { header: String },
    #[error("line {line}: missing timestamp")]
    MissingTimestamp { line: usize },
    #[error("line {line}: `{value}` is not a YYYY/MM/DD HH:MM timestamp")]
    InvalidTimestamp { line: usize, value: String },
    #[error("line {line}: `{value}` is not a known period")]
    InvalidPeriod { line: usize, value: String },
    #[error("line {line}: column `{column}` value `{value}` is not numeric")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },
}
