//! flowwave renders an animated sinusoidal "flow" wave as a filled shape.
//!
//! The core is [`WaveRenderer`]: it samples a sine wave across a surface and keeps a closed
//! [`WavePolygon`] (wave on top, filled down to the bottom edge) in sync with every parameter
//! change. [`FlowView`] adds the host side:
//!
//! - Configure with a [`FlowConfig`]
//! - Report sizes with [`FlowView::on_size_changed`], which starts the animation
//! - Advance time with [`FlowView::tick`] and paint onto any [`PaintSurface`], or render frames
//!   on the CPU and stream them into a [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

/// Time-driven parameter animation.
pub mod animation;
/// Frame sinks.
pub mod encode;
/// Paint surfaces and rasterization.
pub mod render;
/// Configuration.
pub mod scene;
/// Host integration.
pub mod session;
/// Wave sampling.
pub mod wave;

pub use crate::foundation::core::{
    BezPath, Fps, FrameIndex, FrameRange, Point, Rgba8Premul, SurfaceDimensions,
};
pub use crate::foundation::error::{FlowError, FlowResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::schedule::{AnimationTimings, FlowAnimator};
pub use crate::animation::track::{Repeat, RepeatMode, Track};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use crate::render::backend::{FrameRGBA, PaintSurface};
pub use crate::render::cpu::CpuSurface;
pub use crate::scene::color::FlowColor;
pub use crate::scene::config::FlowConfig;
pub use crate::session::flow_view::{FlowView, RenderStats};
pub use crate::wave::params::WaveParameters;
pub use crate::wave::polygon::WavePolygon;
pub use crate::wave::renderer::WaveRenderer;
