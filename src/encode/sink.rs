use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{FlowError, FlowResult};
use crate::render::backend::FrameRGBA;
use std::path::PathBuf;

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Sink contract for consuming rendered frames in order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order within the
/// requested render range.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FlowResult<()>;
    /// Push one frame in strictly increasing order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FlowResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> FlowResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// Return `true` once `end` has been called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FlowResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FlowResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> FlowResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes each frame as `frame_NNNNNN.png` into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `out_dir`, created on `begin` if missing.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// File name used for a frame index.
    pub fn file_name(idx: FrameIndex) -> String {
        format!("frame_{:06}.png", idx.0)
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> FlowResult<()> {
        std::fs::create_dir_all(&self.out_dir).map_err(|e| {
            FlowError::render(format!(
                "create output dir '{}': {e}",
                self.out_dir.display()
            ))
        })?;
        self.written.clear();
        tracing::debug!(
            dir = %self.out_dir.display(),
            width = cfg.width,
            height = cfg.height,
            "png sequence begin"
        );
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FlowResult<()> {
        let path = self.out_dir.join(Self::file_name(idx));
        write_png(&path, frame)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> FlowResult<()> {
        tracing::debug!(frames = self.written.len(), "png sequence end");
        Ok(())
    }
}

/// Encode one frame as PNG (straight alpha).
pub fn write_png(path: &std::path::Path, frame: &FrameRGBA) -> FlowResult<()> {
    if frame.width == 0 || frame.height == 0 {
        return Err(FlowError::render(format!(
            "cannot encode empty {}x{} frame",
            frame.width, frame.height
        )));
    }
    let rgba = frame.to_straight_rgba();
    image::save_buffer_with_format(
        path,
        &rgba,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| FlowError::render(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
