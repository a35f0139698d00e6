use crate::foundation::core::{Rgba8Premul, SurfaceDimensions};
use crate::foundation::error::FlowResult;
use crate::wave::polygon::WavePolygon;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**. The `premultiplied` flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy of the pixel data converted to straight alpha.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// The fill primitive a host provides to paint the wave.
pub trait PaintSurface {
    /// Surface size in pixels.
    fn size(&self) -> SurfaceDimensions;

    /// Reset the surface to a uniform color.
    fn clear(&mut self, color: Rgba8Premul) -> FlowResult<()>;

    /// Fill `polygon` with a solid color using non-zero winding.
    ///
    /// An empty polygon paints nothing.
    fn fill_polygon(&mut self, polygon: &WavePolygon, color: Rgba8Premul) -> FlowResult<()>;
}
