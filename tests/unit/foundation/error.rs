use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ChartError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ChartError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(ChartError::render("x").to_string().contains("render error:"));
    assert!(ChartError::encode("x").to_string().contains("encode error:"));
    assert!(
        ChartError::storage("x")
            .to_string()
            .contains("storage error:")
    );
    assert!(
        ChartError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ChartError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
