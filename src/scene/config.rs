use crate::animation::schedule::AnimationTimings;
use crate::foundation::core::SurfaceDimensions;
use crate::foundation::error::{FlowError, FlowResult};
use crate::scene::color::FlowColor;
use crate::wave::params::{DEFAULT_AMPLITUDE, DEFAULT_OFFSET, DEFAULT_SPLIT_COUNT};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// JSON-facing configuration of a flow view.
///
/// Every field has a default, so `{}` is a valid configuration that reproduces the stock look.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FlowConfig {
    /// Surface width used by the CLI and range rendering.
    pub width: u32,
    /// Surface height used by the CLI and range rendering.
    pub height: u32,
    /// Horizontal sampling intervals; fixed for the lifetime of a view.
    pub split_count: u32,
    /// Target amplitude the animation swings toward.
    pub amplitude: f64,
    /// Initial phase, before the first animation tick.
    pub phase: f64,
    /// Initial vertical offset, before the first animation tick.
    pub offset: f64,
    /// Wave fill color.
    pub flow_color: FlowColor,
    /// Optional background painted under the wave. Transparent when absent.
    pub background: Option<FlowColor>,
    /// Animation durations and endpoints.
    pub animation: AnimationTimings,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 300,
            split_count: DEFAULT_SPLIT_COUNT,
            amplitude: DEFAULT_AMPLITUDE,
            phase: 0.0,
            offset: DEFAULT_OFFSET,
            flow_color: FlowColor::DEFAULT,
            background: None,
            animation: AnimationTimings::default(),
        }
    }
}

impl FlowConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlowResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FlowError::serde(format!("parse flow config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FlowResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlowError::validation(format!("open flow config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check numeric sanity. Size may be zero; the wave is simply empty then.
    pub fn validate(&self) -> FlowResult<()> {
        if self.split_count == 0 {
            return Err(FlowError::validation("splitCount must be > 0"));
        }
        for (name, v) in [
            ("amplitude", self.amplitude),
            ("phase", self.phase),
            ("offset", self.offset),
            ("animation.phaseTo", self.animation.phase_to),
            ("animation.amplitudeFrom", self.animation.amplitude_from),
        ] {
            if !v.is_finite() {
                return Err(FlowError::validation(format!("{name} must be finite")));
            }
        }
        for (name, v) in [
            ("animation.phaseDurationMs", self.animation.phase_duration_ms),
            ("animation.offsetDurationMs", self.animation.offset_duration_ms),
            (
                "animation.amplitudeDurationMs",
                self.animation.amplitude_duration_ms,
            ),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(FlowError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    pub fn dimensions(&self) -> SurfaceDimensions {
        SurfaceDimensions::new(self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
