//! Host integration: sizing, ticking and painting a flow wave.

/// The host-facing view object.
pub mod flow_view;
