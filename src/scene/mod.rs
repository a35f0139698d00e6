//! JSON-facing configuration.

/// Fill color parsing.
pub mod color;
/// View configuration.
pub mod config;
