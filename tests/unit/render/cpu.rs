use super::*;
use crate::wave::renderer::WaveRenderer;

const FLOW: Rgba8Premul = Rgba8Premul {
    r: 107,
    g: 185,
    b: 240,
    a: 255,
};

fn close_to(px: [u8; 4], want: [u8; 4]) -> bool {
    px.iter()
        .zip(want.iter())
        .all(|(a, b)| (i16::from(*a) - i16::from(*b)).abs() <= 1)
}

fn wave(width: u32, height: u32, amplitude: f64, offset: f64) -> WaveRenderer {
    let mut r = WaveRenderer::new(50);
    r.resize(width, height);
    r.set_amplitude(amplitude);
    r.set_offset(offset);
    r
}

#[test]
fn fills_below_the_wave_only() {
    let r = wave(100, 60, 5.0, 30.0);
    let mut surface = CpuSurface::new(100, 60).unwrap();
    surface.clear(Rgba8Premul::transparent()).unwrap();
    surface.fill_polygon(r.polygon(), FLOW).unwrap();
    let frame = surface.finish().unwrap();

    assert_eq!(frame.width, 100);
    assert_eq!(frame.height, 60);
    assert_eq!(frame.data.len(), 100 * 60 * 4);
    assert!(frame.premultiplied);

    assert_eq!(frame.pixel(50, 5), Some([0, 0, 0, 0]));
    assert!(close_to(frame.pixel(50, 55).unwrap(), FLOW.to_array()));
    assert!(close_to(frame.pixel(2, 58).unwrap(), FLOW.to_array()));
}

#[test]
fn clear_paints_background() {
    let mut surface = CpuSurface::new(8, 8).unwrap();
    surface.clear(Rgba8Premul::opaque(255, 0, 0)).unwrap();
    let frame = surface.finish().unwrap();
    assert!(close_to(frame.pixel(3, 3).unwrap(), [255, 0, 0, 255]));
}

#[test]
fn empty_polygon_paints_nothing() {
    let mut surface = CpuSurface::new(16, 16).unwrap();
    surface.fill_polygon(&WavePolygon::empty(), FLOW).unwrap();
    let frame = surface.finish().unwrap();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn zero_sized_surface_yields_empty_frame() {
    let r = wave(100, 60, 5.0, 30.0);
    let mut surface = CpuSurface::new(0, 60).unwrap();
    assert_eq!(surface.size(), SurfaceDimensions::new(0, 60));
    surface.clear(Rgba8Premul::opaque(1, 2, 3)).unwrap();
    surface.fill_polygon(r.polygon(), FLOW).unwrap();
    let frame = surface.finish().unwrap();
    assert!(frame.data.is_empty());
}

#[test]
fn rejects_surfaces_beyond_rasterizer_limits() {
    assert!(CpuSurface::new(70_000, 10).is_err());
    assert!(CpuSurface::new(10, 70_000).is_err());
}

#[test]
fn unpremul_restores_straight_channels() {
    assert_eq!(unpremul_rgba8([64, 32, 0, 128]), [128, 64, 0, 128]);
    assert_eq!(unpremul_rgba8([0, 0, 0, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremul_rgba8([1, 2, 3, 255]), [1, 2, 3, 255]);
}
