use super::*;
use serde_json::json;

#[test]
fn empty_object_yields_stock_defaults() {
    let cfg: FlowConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(cfg, FlowConfig::default());
    assert_eq!(cfg.split_count, 100);
    assert_eq!(cfg.amplitude, 30.0);
    assert_eq!(cfg.offset, 100.0);
    assert_eq!(cfg.flow_color, FlowColor::rgb(107, 185, 240));
    assert_eq!(cfg.animation.phase_duration_ms, 60_000.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn camel_case_keys_override_defaults() {
    let cfg = FlowConfig::from_reader(
        json!({
            "width": 320,
            "height": 120,
            "splitCount": 40,
            "flowColor": "#102030",
            "background": "rgb(0,0,0)",
            "animation": { "offsetDurationMs": 2500 }
        })
        .to_string()
        .as_bytes(),
    )
    .unwrap();

    assert_eq!(cfg.dimensions(), SurfaceDimensions::new(320, 120));
    assert_eq!(cfg.split_count, 40);
    assert_eq!(cfg.flow_color, FlowColor::rgb(0x10, 0x20, 0x30));
    assert_eq!(cfg.background, Some(FlowColor::rgb(0, 0, 0)));
    assert_eq!(cfg.animation.offset_duration_ms, 2_500.0);
    assert_eq!(cfg.animation.amplitude_duration_ms, 5_000.0);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = FlowConfig::from_reader(json!({"splits": 3}).to_string().as_bytes()).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn validate_rejects_zero_splits_and_bad_durations() {
    let cfg = FlowConfig {
        split_count: 0,
        ..FlowConfig::default()
    };
    assert!(cfg.validate().is_err());

    let mut cfg = FlowConfig::default();
    cfg.animation.phase_duration_ms = -1.0;
    assert!(cfg.validate().is_err());

    let cfg = FlowConfig {
        amplitude: f64::NAN,
        ..FlowConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reports_missing_file() {
    let err = FlowConfig::from_path("target/definitely/missing.json").unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn animation_ease_is_configurable() {
    let cfg: FlowConfig =
        serde_json::from_value(json!({"animation": {"ease": "in_out_cubic"}})).unwrap();
    assert_eq!(cfg.animation.ease, crate::animation::ease::Ease::InOutCubic);
    assert_eq!(FlowConfig::default().animation.ease, crate::animation::ease::Ease::Linear);
}
