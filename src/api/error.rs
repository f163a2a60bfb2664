use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of the notes backend, mapped from HTTP at the client
/// boundary. Error bodies are never parsed; the status code is the signal.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The target note does not exist (HTTP 404).
    #[error("note not found")]
    NotFound,

    /// The backend rejected the request, or sent a body that does not
    /// match the wire schema.
    #[error("backend rejected the request: {0}")]
    Validation(String),

    /// Any other non-2xx response.
    #[error("backend returned status {0}")]
    Transport(StatusCode),

    /// The request never got a response (connection refused, timeout, DNS).
    #[error("network error: {0}")]
    Network(reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Validation(err.to_string())
        } else {
            Self::Network(err)
        }
    }
}

/// Map a non-success status to its error variant. Returns `None` for 2xx.
pub(crate) fn classify_status(status: StatusCode) -> Option<ApiError> {
    if status.is_success() {
        return None;
    }
    Some(match status {
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::Validation(format!("status {}", status))
        }
        _ => ApiError::Transport(status),
    })
}
