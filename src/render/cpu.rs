use crate::foundation::core::{BezPath, Rgba8Premul, SurfaceDimensions};
use crate::foundation::error::{FlowError, FlowResult};
use crate::render::backend::{FrameRGBA, PaintSurface};
use crate::wave::polygon::WavePolygon;

/// CPU paint surface powered by `vello_cpu`.
///
/// Draw calls are recorded into a render context and rasterized by [`CpuSurface::finish`].
/// Zero-sized surfaces accept draw calls and produce an empty frame.
pub struct CpuSurface {
    dims: SurfaceDimensions,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuSurface {
    /// Create a surface. Each side must fit the rasterizer's `u16` limit.
    pub fn new(width: u32, height: u32) -> FlowResult<Self> {
        let w: u16 = width
            .try_into()
            .map_err(|_| FlowError::validation("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| FlowError::validation("surface height exceeds u16"))?;
        let dims = SurfaceDimensions::new(width, height);
        let ctx = (!dims.is_degenerate()).then(|| vello_cpu::RenderContext::new(w, h));
        Ok(Self { dims, ctx })
    }

    /// Rasterize everything drawn so far.
    pub fn finish(mut self) -> FlowResult<FrameRGBA> {
        let SurfaceDimensions { width, height } = self.dims;
        let Some(ctx) = self.ctx.as_mut() else {
            return Ok(FrameRGBA {
                width,
                height,
                data: Vec::new(),
                premultiplied: true,
            });
        };

        let mut pixmap = vello_cpu::Pixmap::new(width as u16, height as u16);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        let data = pixmap.data_as_u8_slice().to_vec();
        if data.len() != (width as usize) * (height as usize) * 4 {
            return Err(FlowError::render("pixmap byte len mismatch"));
        }
        Ok(FrameRGBA {
            width,
            height,
            data,
            premultiplied: true,
        })
    }
}

impl PaintSurface for CpuSurface {
    fn size(&self) -> SurfaceDimensions {
        self.dims
    }

    fn clear(&mut self, color: Rgba8Premul) -> FlowResult<()> {
        let SurfaceDimensions { width, height } = self.dims;
        let Some(ctx) = self.ctx.as_mut() else {
            return Ok(());
        };
        ctx.reset();
        if color.a == 0 {
            return Ok(());
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(paint_color(color));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));
        Ok(())
    }

    fn fill_polygon(&mut self, polygon: &WavePolygon, color: Rgba8Premul) -> FlowResult<()> {
        let Some(ctx) = self.ctx.as_mut() else {
            return Ok(());
        };
        if polygon.is_empty() {
            return Ok(());
        }
        let path = polygon.to_bez_path();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(paint_color(color));
        ctx.fill_path(&bezpath_to_cpu(&path));
        Ok(())
    }
}

fn paint_color(c: Rgba8Premul) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = unpremul_rgba8(c.to_array());
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn unpremul_rgba8(rgba: [u8; 4]) -> [u8; 4] {
    let [r, g, b, a] = rgba;
    if a == 0 || a == 255 {
        return rgba;
    }
    let a16 = u16::from(a);
    let un = |c: u8| -> u8 { ((u16::from(c) * 255 + a16 / 2) / a16).min(255) as u8 };
    [un(r), un(g), un(b), a]
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
