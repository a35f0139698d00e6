use crate::animation::ease::Ease;
use crate::animation::track::Track;
use crate::foundation::core::SurfaceDimensions;
use crate::foundation::error::{FlowError, FlowResult};
use crate::wave::renderer::WaveRenderer;

/// Durations and endpoints of the three wave animations.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationTimings {
    /// One full phase sweep, in milliseconds.
    pub phase_duration_ms: f64,
    /// Phase value reached at the end of a sweep. The sweep starts at 0.
    pub phase_to: f64,
    /// One offset leg (surface bottom to crest height), in milliseconds.
    pub offset_duration_ms: f64,
    /// One amplitude leg, in milliseconds.
    pub amplitude_duration_ms: f64,
    /// Amplitude at the start of the first leg.
    pub amplitude_from: f64,
    /// Easing of each amplitude and offset leg. The phase sweep is always linear.
    pub ease: Ease,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            phase_duration_ms: 60_000.0,
            phase_to: 360.0,
            offset_duration_ms: 5_000.0,
            amplitude_duration_ms: 5_000.0,
            amplitude_from: 5.0,
            ease: Ease::Linear,
        }
    }
}

/// Drives phase, amplitude and offset of a [`WaveRenderer`] from elapsed time.
///
/// Phase restarts its sweep forever; amplitude and offset ping-pong forever.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowAnimator {
    phase: Track<f64>,
    amplitude: Track<f64>,
    offset: Track<f64>,
}

impl FlowAnimator {
    /// Build the schedule for a freshly sized surface.
    ///
    /// The offset rises from the bottom edge to twice `target_amplitude`, which keeps the crest
    /// inside the surface at the top of its travel.
    pub fn start(
        dims: SurfaceDimensions,
        target_amplitude: f64,
        timings: AnimationTimings,
    ) -> FlowResult<Self> {
        if !target_amplitude.is_finite() {
            return Err(FlowError::animation("target amplitude must be finite"));
        }
        let out = Self {
            phase: Track::looping(0.0, timings.phase_to, timings.phase_duration_ms),
            amplitude: Track::ping_pong(
                timings.amplitude_from,
                target_amplitude,
                timings.amplitude_duration_ms,
            )
            .with_ease(timings.ease),
            offset: Track::ping_pong(
                f64::from(dims.height),
                target_amplitude * 2.0,
                timings.offset_duration_ms,
            )
            .with_ease(timings.ease),
        };
        out.phase.validate()?;
        out.amplitude.validate()?;
        out.offset.validate()?;
        Ok(out)
    }

    /// Push the values for `elapsed_ms` into the renderer.
    pub fn apply(&self, renderer: &mut WaveRenderer, elapsed_ms: f64) -> FlowResult<()> {
        renderer.set_phase(self.phase.sample(elapsed_ms)?);
        renderer.set_amplitude(self.amplitude.sample(elapsed_ms)?);
        renderer.set_offset(self.offset.sample(elapsed_ms)?);
        Ok(())
    }

    pub fn phase_track(&self) -> &Track<f64> {
        &self.phase
    }

    pub fn amplitude_track(&self) -> &Track<f64> {
        &self.amplitude
    }

    pub fn offset_track(&self) -> &Track<f64> {
        &self.offset
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;
