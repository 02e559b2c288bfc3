//! Corpus and crash-reproducer replay for the fuzzbridge shim.
//!
//! Runs stored inputs through the same shim and native target the fuzz
//! harness uses, reporting the relayed status of each.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod replay;

pub use config::ReplayConfig;
pub use error::ReplayError;
pub use replay::{collect_inputs, ReplayRecord, ReplaySummary, Replayer};
