use thiserror::Error;

/// Errors emitted while synthesizing or exporting data.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("random source unavailable: {0}")]
    Entropy(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("export is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl From<mockdata_core::Error> for SynthesisError {
    fn from(err: mockdata_core::Error) -> Self {
        match err {
            mockdata_core::Error::InvalidArgument(message) => Self::InvalidArgument(message),
            other => Self::InvalidArgument(other.to_string()),
        }
    }
}
