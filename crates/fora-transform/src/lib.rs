//! Record-to-measurement normalization.
//!
//! Turns wide medical-record rows into the flat, ordered sequence of
//! canonical measurements the time-series sink stores:
//!
//! - **resolve**: unit inference from column-key suffixes
//! - **build**: the per-row construction rule table and batch building
//! - **derive**: derived-value formulas (hemoglobin from hematocrit)
//!
//! Everything here is pure computation over in-memory data: no I/O, no
//! state, deterministic for a given input.

pub mod build;
pub mod derive;
pub mod resolve;

pub use build::{BatchOutcome, BuildOptions, RowFailure, build, build_all, build_with_options};
pub use derive::{HEMATOCRIT_TO_HEMOGLOBIN, derive_hemoglobin};
pub use resolve::resolve_unit;
