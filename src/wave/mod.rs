//! Sine-wave sampling and the filled outline derived from it.

/// Wave inputs and their defaults.
pub mod params;
/// Closed outline handed to the paint step.
pub mod polygon;
/// The sampler that recomputes on every mutation.
pub mod renderer;
