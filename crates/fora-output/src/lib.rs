//! Time-series sink boundary.
//!
//! Translates canonical measurements into InfluxDB line-protocol points and
//! carries the sink configuration. Writing over the network is left to an
//! external client.

#![deny(unsafe_code)]

pub mod config;
pub mod point;

pub use config::SinkConfig;
pub use point::{Point, to_line_protocol};
