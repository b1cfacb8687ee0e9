use thiserror::Error;

use crate::utils::messages::USAGE_LIMIT_MARKER;

/// Failure taxonomy for ApiClient calls.
///
/// `Unauthorized` is kept separate from other server failures because a 401
/// always forces a logout, whatever the body said. `Server` carries the
/// message extracted from the response body (ErrorBody) for display.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    Parse(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// The backend signals an exhausted quota only through its error
    /// message, so detection is a substring match on the known wording.
    pub fn is_usage_limit(&self) -> bool {
        matches!(self, ApiError::Server { message, .. } if message.contains(USAGE_LIMIT_MARKER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_limit_is_matched_by_message() {
        let err = ApiError::Server {
            status: 429,
            message: "Usage limit exceeded. No more access attempts allowed.".into(),
        };
        assert!(err.is_usage_limit());
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn other_server_errors_are_not_usage_limit() {
        let err = ApiError::Server {
            status: 500,
            message: "internal error".into(),
        };
        assert!(!err.is_usage_limit());
    }

    #[test]
    fn unauthorized_is_its_own_bucket() {
        let err = ApiError::Unauthorized("Incorrect username or password".into());
        assert!(err.is_unauthorized());
        // the server message still reaches the display layer
        assert_eq!(err.to_string(), "Incorrect username or password");
        assert!(!ApiError::Network("timeout".into()).is_unauthorized());
    }
}
