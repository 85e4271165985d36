use thiserror::Error;

/// Failure of a single fetch/upload operation. Local validation (no file
/// selected) never reaches this type; it is handled before any request.
#[derive(Error, Debug)]
pub enum RankerError {
    /// Response body did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success response carrying a `detail` message from the backend.
    #[error("{0}")]
    Backend(String),

    /// Request failed in transit or the error body carried no `detail`.
    #[error("transport error: {0}")]
    Transport(String),
}

impl RankerError {
    /// Message rendered in the error panel. Backend `detail` text is shown
    /// verbatim; everything else collapses to the variant's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            RankerError::Backend(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RankerError>;
