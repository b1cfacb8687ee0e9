use serde::{Deserialize, Serialize};

/// JSON body for POST /register. Login does NOT use this: the backend
/// wants login credentials form-encoded (see ApiClient::login).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful POST /login response.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Failure payload the backend attaches to non-2xx responses.
/// FastAPI-style `detail` is the usual field; `error` shows up from the
/// reverse proxy, so both are accepted.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Server-provided message, `detail` over `error`, or the fallback.
    pub fn message(self, fallback: &str) -> String {
        self.detail
            .or(self.error)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_prefers_detail() {
        let body = ErrorBody {
            detail: Some("bad credentials".into()),
            error: Some("ignored".into()),
        };
        assert_eq!(body.message("fallback"), "bad credentials");
    }

    #[test]
    fn error_body_falls_back_to_error_field() {
        let body = ErrorBody {
            detail: None,
            error: Some("upstream exploded".into()),
        };
        assert_eq!(body.message("fallback"), "upstream exploded");
    }

    #[test]
    fn error_body_uses_fallback_when_empty() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message("Login failed"), "Login failed");
    }

    #[test]
    fn token_response_parses() {
        let resp: TokenResponse = serde_json::from_str(r#"{"access_token":"T"}"#).unwrap();
        assert_eq!(resp.access_token, "T");
    }
}
