//! # registrar-observability
//!
//! Structured logging for the service: subscriber initialization and one
//! helper per notable domain event, so every crate logs the same field names.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
