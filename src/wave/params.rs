/// Default number of horizontal sampling intervals.
pub const DEFAULT_SPLIT_COUNT: u32 = 100;
/// Default wave height in pixels.
pub const DEFAULT_AMPLITUDE: f64 = 30.0;
/// Default horizontal pixels per sine cycle, used until the first resize.
pub const DEFAULT_PERIOD: f64 = 500.0;
/// Default baseline y-position in pixels.
pub const DEFAULT_OFFSET: f64 = 100.0;

/// Inputs of the wave sampler.
///
/// `split_count` is fixed once a [`crate::WaveRenderer`] is built; the other fields are driven by
/// setters (phase, amplitude, offset) or by resizing (period).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveParameters {
    /// Number of horizontal sampling intervals.
    pub split_count: u32,
    /// Angular offset into the sine function, in radians.
    pub phase: f64,
    /// Wave height in pixels. Negative values invert the wave.
    pub amplitude: f64,
    /// Horizontal pixels per full cycle.
    pub period: f64,
    /// Baseline y-position in pixels.
    pub vertical_offset: f64,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            split_count: DEFAULT_SPLIT_COUNT,
            phase: 0.0,
            amplitude: DEFAULT_AMPLITUDE,
            period: DEFAULT_PERIOD,
            vertical_offset: DEFAULT_OFFSET,
        }
    }
}
