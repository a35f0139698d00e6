use crate::animation::schedule::{AnimationTimings, FlowAnimator};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameRange, Rgba8Premul, SurfaceDimensions};
use crate::foundation::error::{FlowError, FlowResult};
use crate::render::backend::{FrameRGBA, PaintSurface};
use crate::render::cpu::CpuSurface;
use crate::scene::color::FlowColor;
use crate::scene::config::FlowConfig;
use crate::wave::params::{DEFAULT_PERIOD, WaveParameters};
use crate::wave::polygon::WavePolygon;
use crate::wave::renderer::WaveRenderer;

/// Per-range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Total frames in the requested range.
    pub frames_total: u64,
    /// Frames whose wave polygon was empty (nothing but background painted).
    pub frames_empty: u64,
}

/// Host-facing flow wave: a [`WaveRenderer`] plus its color and animation schedule.
///
/// The host reports size changes with [`FlowView::on_size_changed`], advances time with
/// [`FlowView::tick`], and paints with [`FlowView::draw`]. Every size change restarts the
/// animation with its time origin at zero.
#[derive(Clone, Debug)]
pub struct FlowView {
    renderer: WaveRenderer,
    color: FlowColor,
    background: Option<FlowColor>,
    target_amplitude: f64,
    timings: AnimationTimings,
    animator: Option<FlowAnimator>,
}

impl FlowView {
    /// Build an unsized view from a validated configuration.
    pub fn new(config: &FlowConfig) -> FlowResult<Self> {
        config.validate()?;
        let renderer = WaveRenderer::with_params(WaveParameters {
            split_count: config.split_count,
            phase: config.phase,
            amplitude: config.amplitude,
            period: DEFAULT_PERIOD,
            vertical_offset: config.offset,
        });
        Ok(Self {
            renderer,
            color: config.flow_color,
            background: config.background,
            target_amplitude: config.amplitude,
            timings: config.animation,
            animator: None,
        })
    }

    /// Resize the wave and (re)start the animation.
    #[tracing::instrument(skip(self))]
    pub fn on_size_changed(&mut self, width: u32, height: u32) -> FlowResult<()> {
        self.renderer.resize(width, height);
        self.animator = Some(FlowAnimator::start(
            SurfaceDimensions::new(width, height),
            self.target_amplitude,
            self.timings,
        )?);
        Ok(())
    }

    /// Advance the animation to `elapsed_ms` after the last size change.
    ///
    /// Before the first size change there is nothing to animate and this is a no-op.
    pub fn tick(&mut self, elapsed_ms: f64) -> FlowResult<()> {
        match &self.animator {
            Some(animator) => animator.apply(&mut self.renderer, elapsed_ms),
            None => Ok(()),
        }
    }

    /// Fill the current wave onto `surface`.
    pub fn draw(&self, surface: &mut dyn PaintSurface) -> FlowResult<()> {
        surface.fill_polygon(self.renderer.polygon(), self.color.to_rgba8_premul())
    }

    /// Tick to `elapsed_ms` and rasterize one frame on the CPU.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn render_frame(&mut self, elapsed_ms: f64) -> FlowResult<FrameRGBA> {
        self.tick(elapsed_ms)?;
        self.rasterize()
    }

    /// Render `range` at `fps` and stream frames into `sink`.
    ///
    /// Frame `f` is sampled at `f * 1000 / fps` milliseconds.
    #[tracing::instrument(skip(self, sink))]
    pub fn render_range(
        &mut self,
        range: FrameRange,
        fps: Fps,
        sink: &mut dyn FrameSink,
    ) -> FlowResult<RenderStats> {
        if range.is_empty() {
            return Err(FlowError::validation("render_range range must be non-empty"));
        }
        if self.animator.is_none() {
            return Err(FlowError::validation(
                "render_range requires a sized view (call on_size_changed first)",
            ));
        }

        let dims = self.renderer.dimensions();
        sink.begin(SinkConfig {
            width: dims.width,
            height: dims.height,
            fps,
        })?;

        let mut stats = RenderStats::default();
        for idx in range.iter() {
            self.tick(fps.frame_to_ms(idx))?;
            if self.renderer.polygon().is_empty() {
                stats.frames_empty += 1;
            }
            let frame = self.rasterize()?;
            sink.push_frame(idx, &frame)?;
            stats.frames_total += 1;
        }
        sink.end()?;
        tracing::debug!(?stats, "render_range done");
        Ok(stats)
    }

    pub fn polygon(&self) -> &WavePolygon {
        self.renderer.polygon()
    }

    pub fn renderer(&self) -> &WaveRenderer {
        &self.renderer
    }

    pub fn color(&self) -> FlowColor {
        self.color
    }

    /// Return `true` once the animation has been started by a size change.
    pub fn is_animating(&self) -> bool {
        self.animator.is_some()
    }

    fn rasterize(&self) -> FlowResult<FrameRGBA> {
        let dims = self.renderer.dimensions();
        let mut surface = CpuSurface::new(dims.width, dims.height)?;
        let bg = self
            .background
            .map(FlowColor::to_rgba8_premul)
            .unwrap_or_else(Rgba8Premul::transparent);
        surface.clear(bg)?;
        self.draw(&mut surface)?;
        surface.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/flow_view.rs"]
mod tests;
