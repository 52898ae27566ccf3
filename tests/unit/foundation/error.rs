use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StaggerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StaggerError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        StaggerError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StaggerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
