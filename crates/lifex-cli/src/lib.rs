//! Library surface of the `lifex` CLI: logging setup and the clean pipeline.
//!
//! The binary's argument parsing and table printing live in the binary
//! target; everything a test (or another host) needs to drive the pipeline
//! is exported here.

pub mod logging;
pub mod pipeline;

pub use pipeline::{CleanSummary, run_pipeline};
