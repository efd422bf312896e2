//! # govlens-core
//!
//! Foundation crate for the govlens governance analyzer.
//! Provides the snapshot model, snapshot sources, error handling,
//! configuration, tracing setup, and shared constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod snapshot;
pub mod source;
pub mod tracing;
pub mod types;
