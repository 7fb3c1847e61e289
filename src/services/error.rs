use std::fmt;

/// Failures surfaced by the wallet and login API calls
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Server answered 401, or no token was available. The session has
    /// already been cleared when this is returned.
    AuthExpired,
    /// Non-2xx, non-401 status on a read
    RequestFailed { status: u16 },
    /// Non-2xx on create/update, with the server `msg` if it sent one
    ValidationFailed(Option<String>),
    /// Non-2xx on delete
    DeletionFailed,
    /// Non-2xx on login
    CredentialsInvalid,
    /// The request never produced an HTTP response
    Transport(String),
    /// The response body could not be decoded
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::AuthExpired => write!(f, "Session expired"),
            ApiError::RequestFailed { status } => write!(f, "Request failed with status {}", status),
            ApiError::ValidationFailed(Some(msg)) => write!(f, "Rejected by server: {}", msg),
            ApiError::ValidationFailed(None) => write!(f, "Rejected by server"),
            ApiError::DeletionFailed => write!(f, "Delete failed"),
            ApiError::CredentialsInvalid => write!(f, "Invalid username or password"),
            ApiError::Transport(e) => write!(f, "HTTP request failed: {}", e),
            ApiError::Decode(e) => write!(f, "Failed to parse response: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
