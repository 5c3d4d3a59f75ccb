//! Observability subsystem for launchboard
//!
//! Structured, synchronous JSON logging with deterministic field ordering.

mod logger;

pub use logger::{LogLevel, Logger};
