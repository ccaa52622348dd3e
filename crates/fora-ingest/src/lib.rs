//! CSV ingestion for iFORA HM exports.
//!
//! Maps the export's human-readable headers onto internal column keys via
//! the model's schema table and produces [`fora_model::MedicalRecordRow`]
//! values for the normalization core.

#![deny(unsafe_code)]

pub mod csv_ingest;
pub mod error;

pub use csv_ingest::{read_records, read_records_from_reader};
pub use error::IngestError;
