use annai_core::{ConfigError, EmbeddingError, GenerationError, StoreError};

#[test]
fn store_error_dimension_mismatch_names_both_sizes() {
    let err = StoreError::DimensionMismatch {
        expected: 1536,
        got: 768,
    };
    let rendered = format!("{err}");
    assert!(rendered.contains("1536"));
    assert!(rendered.contains("768"));
}

#[test]
fn config_error_missing_names_the_key() {
    let err = ConfigError::Missing("LINE_CHANNEL_SECRET");
    assert!(format!("{err}").contains("LINE_CHANNEL_SECRET"));
}

#[test]
fn provider_errors_render_their_messages() {
    let embed = EmbeddingError::Provider("connection reset".to_string());
    assert!(format!("{embed}").contains("connection reset"));

    let gen = GenerationError::RateLimited { retry_after: None };
    assert!(format!("{gen}").contains("rate limited"));
}
