use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FlowError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FlowError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(FlowError::render("x").to_string().contains("render error:"));
    assert!(
        FlowError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FlowError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
