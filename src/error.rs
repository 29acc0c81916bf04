use thiserror::Error;

/// Everything that can go wrong between a form submission and a crop name.
///
/// Routes collapse all variants into one generic user-facing error page;
/// the variant itself is what gets logged for operators.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("missing form field: {field}")]
    MissingField { field: &'static str },

    #[error("malformed number in field {field}: {value:?}")]
    MalformedNumber { field: &'static str, value: String },

    #[error("model unavailable (failed to load at startup)")]
    ModelUnavailable,

    #[error("inference failed: {0}")]
    Inference(#[from] anyhow::Error),
}
