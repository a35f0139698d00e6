//! Paint surfaces and rasterization.

/// Frame type and the paint-surface seam.
pub mod backend;
/// `vello_cpu` paint surface.
pub mod cpu;
