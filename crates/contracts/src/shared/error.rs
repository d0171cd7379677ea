use thiserror::Error;

/// Ошибки обращения к Order Service
///
/// Every variant is turned into view state by the caller; none of them is
/// meant to reach a panic boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure, non-2xx HTTP status or a body that is not the
    /// expected JSON envelope.
    #[error("Network error: {0}")]
    Transport(String),

    /// Well-formed envelope whose `status` is not 200. `message` is shown to
    /// the admin as is.
    #[error("{message}")]
    Domain { status: i32, message: String },

    /// Client-side guard; no request was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ApiError::Transport(err.to_string())
    }

    /// Transport failures are worth a retry button; the others need the
    /// admin to change something first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "transport",
            ApiError::Domain { .. } => "domain",
            ApiError::Validation(_) => "validation",
        }
    }
}
