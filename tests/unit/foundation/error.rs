use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        InkbetweenError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        InkbetweenError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        InkbetweenError::playback("x")
            .to_string()
            .contains("playback error:")
    );
    assert!(
        InkbetweenError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = InkbetweenError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: InkbetweenError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, InkbetweenError::Serde(_)));
}
