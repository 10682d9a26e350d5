//! # byeai-observability
//!
//! Structured tracing for the consensus engine: subscriber initialisation,
//! span constructors per operation, and named log events.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
