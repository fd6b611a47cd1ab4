use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    ProviderUnavailable(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("Malformed provider reply: {0}")]
    MalformedReply(String),

    #[error("Failed to fetch image from {url}: {reason}")]
    ImageFetch { url: String, reason: String },

    #[error("Failed to decode image: {0}")]
    ImageDecode(String),

    #[error("{0}")]
    DemoImageUnavailable(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Whether the failure happened before the provider produced any output,
    /// because no credential was configured for it.
    pub fn is_unconfigured(&self) -> bool {
        matches!(self, CoreError::ProviderUnavailable(_))
    }
}
