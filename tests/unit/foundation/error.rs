use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DrawError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DrawError::layout("x").to_string().contains("layout error:"));
    assert!(DrawError::asset("x").to_string().contains("asset error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DrawError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
