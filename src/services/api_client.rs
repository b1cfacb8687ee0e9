// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic and no state; every method maps to one backend
// endpoint. Token handling and caching live in state/viewmodels.
// ============================================================================

use gloo_net::http::{Request, Response};
use web_sys::UrlSearchParams;

use crate::models::{Credentials, ErrorBody, QueryResponse, TokenResponse, UserProfile};
use crate::services::error::ApiError;
use crate::utils::constants::BACKEND_URL;
use crate::utils::messages::{GENERIC_ERROR_FALLBACK, LOGIN_FAILED_FALLBACK, REGISTER_FAILED_FALLBACK};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// POST /login. The backend expects form-encoded credentials here,
    /// unlike /register which takes JSON.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let url = format!("{}/login", self.base_url);

        let form = UrlSearchParams::new()
            .map_err(|_| ApiError::Network("Failed to build form body".to_string()))?;
        form.append("username", username);
        form.append("password", password);

        log::info!("🔐 Logging in as {}", username);

        let response = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response, LOGIN_FAILED_FALLBACK).await);
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// POST /register with a JSON body. Success carries no payload the
    /// client needs; the caller chains into login for the token.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let url = format!("{}/register", self.base_url);
        let body = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };

        log::info!("📝 Registering user {}", username);

        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response, REGISTER_FAILED_FALLBACK).await);
        }

        Ok(())
    }

    /// GET /users/me with bearer auth. 401 becomes ApiError::Unauthorized
    /// so the caller can force a logout.
    pub async fn current_user(&self, token: &str) -> Result<UserProfile, ApiError> {
        let url = format!("{}/users/me", self.base_url);

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response, GENERIC_ERROR_FALLBACK).await);
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// GET /query?itemID=<id> with bearer auth. Each accepted call
    /// decrements the server-side usage count. The item id goes through
    /// the query builder so reserved characters cannot rewrite the URL.
    pub async fn query_item(&self, token: &str, item_id: &str) -> Result<QueryResponse, ApiError> {
        let url = format!("{}/query", self.base_url);

        log::info!("🔎 Querying item {}", item_id);

        let response = Request::get(&url)
            .query([("itemID", item_id)])
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response, GENERIC_ERROR_FALLBACK).await);
        }

        response
            .json::<QueryResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a non-2xx response into an ApiError, reading the server's
/// ErrorBody when one is present.
async fn error_from_response(response: Response, fallback: &str) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message(fallback),
        Err(_) => fallback.to_string(),
    };

    if status == 401 {
        return ApiError::Unauthorized(message);
    }

    ApiError::Server { status, message }
}
