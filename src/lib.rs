//! launchboard - A reactive launch-records dashboard service
//!
//! Core pipeline: Dataset Store -> Domain Index -> Filter Engine ->
//! Aggregators -> chart payloads. Everything else is thin plumbing.

pub mod charts;
pub mod cli;
pub mod dataset;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod reaction;
