use super::*;

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert_eq!(r.len_frames(), 3);
    assert!(!r.is_empty());
    let idx: Vec<u64> = r.iter().map(|f| f.0).collect();
    assert_eq!(idx, vec![2, 3, 4]);
}

#[test]
fn fps_validates_and_converts_time() {
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(0, 1).is_err());

    let fps = Fps::new(25, 1).unwrap();
    assert_eq!(fps.frame_to_ms(FrameIndex(0)), 0.0);
    assert_eq!(fps.frame_to_ms(FrameIndex(25)), 1000.0);
    assert_eq!(fps.ms_to_frames_floor(1000.0), 25);
    assert_eq!(fps.ms_to_frames_floor(-5.0), 0);
}

#[test]
fn surface_dimensions_degenerate_when_any_side_is_zero() {
    assert!(SurfaceDimensions::new(0, 10).is_degenerate());
    assert!(SurfaceDimensions::new(10, 0).is_degenerate());
    assert!(!SurfaceDimensions::new(1, 1).is_degenerate());
}

#[test]
fn premultiply_rounds_half_up() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(c.to_array(), [128, 64, 0, 128]);
    assert_eq!(Rgba8Premul::opaque(1, 2, 3).to_array(), [1, 2, 3, 255]);
    assert_eq!(Rgba8Premul::transparent().to_array(), [0, 0, 0, 0]);
}
