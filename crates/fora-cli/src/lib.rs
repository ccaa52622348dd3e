//! Shared pieces of the `fora-hm` binary.

pub mod logging;
