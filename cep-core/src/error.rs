use thiserror::Error;

/// Core error type for cep lookups.
/// Internally, modules can use `anyhow::Result<T>` for convenience,
/// but public boundaries should expose `CoreResult<T>` with this error.
#[derive(Debug, Error)]
pub enum CepError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("request to {provider} failed: {message}")]
    Transport { provider: String, message: String },

    #[error("reading response from {provider} failed: {message}")]
    BodyRead { provider: String, message: String },

    #[error("decoding response from {provider} failed: {message}")]
    Decode { provider: String, message: String },

    #[error("upstream error from {provider}: {code} {message}")]
    Upstream {
        provider: String,
        code: String,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CepError {
    /// Short, stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CepError::Validation(_) => "validation",
            CepError::Transport { .. } => "transport",
            CepError::BodyRead { .. } => "body_read",
            CepError::Decode { .. } => "decode",
            CepError::Upstream { .. } => "upstream",
            CepError::Io(_) => "io",
            CepError::Other(_) => "other",
        }
    }
}

pub type CoreResult<T> = std::result::Result<T, CepError>;
