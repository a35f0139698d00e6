use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn looping_track_restarts_each_cycle() {
    let t = Track::looping(0.0, 360.0, 60_000.0);
    assert_eq!(t.sample(0.0).unwrap(), 0.0);
    assert!(approx(t.sample(30_000.0).unwrap(), 180.0));
    assert!(approx(t.sample(60_000.0).unwrap(), 0.0));
    assert!(approx(t.sample(75_000.0).unwrap(), 90.0));
}

#[test]
fn ping_pong_track_reverses_every_other_cycle() {
    let t = Track::ping_pong(5.0, 30.0, 5_000.0);
    assert_eq!(t.sample(0.0).unwrap(), 5.0);
    assert!(approx(t.sample(2_500.0).unwrap(), 17.5));
    assert!(approx(t.sample(5_000.0).unwrap(), 30.0));
    assert!(approx(t.sample(7_500.0).unwrap(), 17.5));
    assert!(approx(t.sample(10_000.0).unwrap(), 5.0));
    assert!(approx(t.sample(12_500.0).unwrap(), 17.5));
}

#[test]
fn ping_pong_can_run_downhill() {
    let t = Track::ping_pong(300.0, 60.0, 5_000.0);
    assert_eq!(t.sample(0.0).unwrap(), 300.0);
    assert!(approx(t.sample(5_000.0).unwrap(), 60.0));
    assert!(approx(t.sample(10_000.0).unwrap(), 300.0));
}

#[test]
fn negative_elapsed_clamps_to_start() {
    let t = Track::looping(1.0, 2.0, 100.0);
    assert_eq!(t.sample(-50.0).unwrap(), 1.0);
}

#[test]
fn finite_repeat_holds_final_value() {
    let once = Track::looping(0.0, 10.0, 100.0).with_repeat(Repeat::Count(0));
    assert!(approx(once.sample(50.0).unwrap(), 5.0));
    assert_eq!(once.sample(100.0).unwrap(), 10.0);
    assert_eq!(once.sample(1_000.0).unwrap(), 10.0);

    // Two cycles ping-pong: forward then back, ending on `from`.
    let there_and_back = Track::ping_pong(0.0, 10.0, 100.0).with_repeat(Repeat::Count(1));
    assert!(approx(there_and_back.sample(150.0).unwrap(), 5.0));
    assert_eq!(there_and_back.sample(500.0).unwrap(), 0.0);
}

#[test]
fn easing_shapes_each_cycle() {
    let t = Track::looping(0.0, 1.0, 100.0).with_ease(Ease::InQuad);
    assert!(approx(t.sample(50.0).unwrap(), 0.25));
    assert!(approx(t.sample(150.0).unwrap(), 0.25));
}

#[test]
fn rejects_non_positive_duration() {
    let t = Track::looping(0.0, 1.0, 0.0);
    assert!(t.validate().is_err());
    assert!(t.sample(1.0).is_err());
    assert!(Track::looping(0.0, 1.0, f64::NAN).validate().is_err());
    assert!(Track::ping_pong(0.0, 1.0, 1.0).validate().is_ok());
}

#[test]
fn rejects_non_finite_endpoints() {
    let nan_from = Track::looping(f64::NAN, 1.0, 100.0);
    assert!(nan_from.validate().is_err());
    assert!(nan_from.sample(10.0).is_err());
    assert!(Track::ping_pong(0.0, f64::INFINITY, 100.0).validate().is_err());
    assert!(Track::looping(0.0, 1.0, 100.0).validate().is_ok());
}
