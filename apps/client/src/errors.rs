use thiserror::Error;

/// Client-level error type.
///
/// Validation errors stay local to the component that produced them; network
/// errors are caught once at the submission boundary and converted to display
/// state. Invariant violations (e.g. an out-of-bounds list index) are defects
/// and panic instead of appearing here.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// The single user-visible message for banner display.
    /// Transport details are logged, not shown.
    pub fn display_message(&self) -> String {
        match self {
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            ClientError::Api { .. } => "The server rejected the request".to_string(),
            ClientError::Http(_) => "A network error occurred. Please try again.".to_string(),
            ClientError::Parse(_) => "The server returned an unexpected response".to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}
