use crate::foundation::core::{Point, SurfaceDimensions};
use crate::wave::params::WaveParameters;
use crate::wave::polygon::WavePolygon;
use std::f64::consts::TAU;

/// Samples a sine wave across a surface and keeps the filled outline up to date.
///
/// Every mutator recomputes the samples and polygon synchronously, so [`WaveRenderer::polygon`]
/// always reflects the latest parameters and dimensions. Until the first resize with a non-zero
/// width the polygon is empty.
#[derive(Clone, Debug)]
pub struct WaveRenderer {
    params: WaveParameters,
    dims: SurfaceDimensions,
    resized: bool,
    samples: Vec<f64>,
    polygon: WavePolygon,
}

impl WaveRenderer {
    /// Renderer with default parameters and the given split count.
    pub fn new(split_count: u32) -> Self {
        Self::with_params(WaveParameters {
            split_count,
            ..WaveParameters::default()
        })
    }

    /// Renderer starting from explicit parameters.
    pub fn with_params(params: WaveParameters) -> Self {
        Self {
            params,
            dims: SurfaceDimensions::default(),
            resized: false,
            samples: Vec::new(),
            polygon: WavePolygon::empty(),
        }
    }

    /// Track a new surface size. The wave period follows the width.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resize(&mut self, width: u32, height: u32) {
        self.dims = SurfaceDimensions::new(width, height);
        self.params.period = f64::from(width);
        self.resized = true;
        self.recompute();
    }

    /// Set the angular offset (radians).
    pub fn set_phase(&mut self, phase: f64) {
        self.params.phase = phase;
        self.recompute();
    }

    /// Set the wave height in pixels. Not validated; negative values invert the wave.
    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.params.amplitude = amplitude;
        self.recompute();
    }

    /// Set the baseline y-position in pixels.
    pub fn set_offset(&mut self, offset: f64) {
        self.params.vertical_offset = offset;
        self.recompute();
    }

    /// Current closed outline.
    pub fn polygon(&self) -> &WavePolygon {
        &self.polygon
    }

    /// Current y-displacements, one per sample column.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn params(&self) -> &WaveParameters {
        &self.params
    }

    pub fn phase(&self) -> f64 {
        self.params.phase
    }

    pub fn amplitude(&self) -> f64 {
        self.params.amplitude
    }

    pub fn offset(&self) -> f64 {
        self.params.vertical_offset
    }

    pub fn period(&self) -> f64 {
        self.params.period
    }

    pub fn split_count(&self) -> u32 {
        self.params.split_count
    }

    pub fn dimensions(&self) -> SurfaceDimensions {
        self.dims
    }

    /// Return `true` once a resize has produced a drawable wave.
    pub fn is_ready(&self) -> bool {
        self.resized && !self.polygon.is_empty()
    }

    fn recompute(&mut self) {
        let splits = self.params.split_count;
        if !self.resized || self.dims.width == 0 || splits == 0 {
            tracing::trace!(
                resized = self.resized,
                width = self.dims.width,
                splits,
                "degenerate wave, clearing polygon"
            );
            self.samples.clear();
            self.polygon = WavePolygon::empty();
            return;
        }

        let width = f64::from(self.dims.width);
        let height = f64::from(self.dims.height);
        let x_spacing = width / f64::from(splits);
        // floor(width / x_spacing) + 1, kept in integers so the last column is never lost.
        let sample_count = splits as usize + 1;
        let angular_step = (TAU / self.params.period) * x_spacing;

        let phase = self.params.phase;
        let amplitude = self.params.amplitude;
        self.samples.clear();
        self.samples.extend(
            (0..sample_count).map(|i| (phase + (i as f64) * angular_step).sin() * amplitude),
        );

        let offset = self.params.vertical_offset;
        let wave = self
            .samples
            .iter()
            .enumerate()
            .map(|(i, y)| Point::new((i as f64) * x_spacing, y + offset))
            .collect();
        self.polygon = WavePolygon::from_wave(wave, width, height);
    }
}

impl Default for WaveRenderer {
    fn default() -> Self {
        Self::with_params(WaveParameters::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/renderer.rs"]
mod tests;
