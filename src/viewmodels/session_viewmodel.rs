// ============================================================================
// SESSION VIEWMODEL - login / register / logout / profile cache gate
// ============================================================================
// Business logic only; no DOM. Views call in, state gets mutated, and
// subscribers re-render.
// ============================================================================

use crate::models::UserProfile;
use crate::services::{ApiClient, ApiError};
use crate::state::AppState;
use crate::utils::time::now_ms;

/// Seam around GET /users/me so the cache gate can be driven by a
/// scripted client in tests. ApiClient is the production implementation.
pub trait CurrentUserApi {
    async fn current_user(&self, token: &str) -> Result<UserProfile, ApiError>;
}

impl CurrentUserApi for ApiClient {
    async fn current_user(&self, token: &str) -> Result<UserProfile, ApiError> {
        ApiClient::current_user(self, token).await
    }
}

pub struct SessionViewModel<A = ApiClient> {
    api: A,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Log in and persist the returned token. The caller reloads the page
    /// afterwards; the reload is the state reset, exactly like the old
    /// frontend did it.
    pub async fn login(&self, state: &AppState, username: &str, password: &str) -> Result<(), ApiError> {
        let response = self.api.login(username, password).await?;
        state.session.set_token(response.access_token);
        log::info!("✅ Login successful for {}", username);
        Ok(())
    }

    /// Register, then chain straight into login with the same credentials.
    pub async fn register(&self, state: &AppState, username: &str, password: &str) -> Result<(), ApiError> {
        self.api.register(username, password).await?;
        log::info!("✅ Registration successful for {}", username);
        self.login(state, username, password).await
    }
}

impl<A: CurrentUserApi> SessionViewModel<A> {
    /// Universal recovery action: wipe the session and start over with a
    /// clean page. Safe to call repeatedly.
    pub fn logout(&self, state: &AppState) {
        log::info!("👋 Logging out, clearing session");
        state.session.clear();
        reload_page();
    }

    /// The cache gate around GET /users/me.
    ///
    /// - no token: make sure no stale profile lingers, render logged out;
    /// - cached profile younger than 30s and not forced: no network call;
    /// - otherwise fetch; 401 or any other failure forces a logout.
    pub async fn load_current_user(&self, state: &AppState, force: bool) {
        let Some(token) = state.session.get_token() else {
            state.session.invalidate_profile();
            state.notify_change();
            return;
        };

        if !force {
            if let Some(profile) = state.session.fresh_profile(now_ms()) {
                log::info!("📋 Using cached profile ({} calls left)", profile.usage_count);
                state.notify_change();
                return;
            }
        }

        match self.api.current_user(&token).await {
            Ok(profile) => {
                log::info!(
                    "👤 Profile refreshed: {} ({} calls left)",
                    profile.username,
                    profile.usage_count
                );
                state.session.cache_profile(profile, now_ms());
                state.notify_change();
            }
            Err(e) if e.is_unauthorized() => {
                log::warn!("⚠️ Token rejected (401), logging out");
                self.logout(state);
            }
            Err(e) => {
                log::error!("❌ Failed to fetch current user: {}", e);
                self.logout(state);
            }
        }
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Full page reload; the deliberate reset after login, registration
/// and logout. A no-op off wasm, where there is no page.
pub fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Hands out at most one scripted response and counts how often the
    /// endpoint was hit.
    struct ScriptedApi {
        response: RefCell<Option<Result<UserProfile, ApiError>>>,
        calls: Cell<u32>,
    }

    impl ScriptedApi {
        fn returning(response: Result<UserProfile, ApiError>) -> Self {
            Self {
                response: RefCell::new(Some(response)),
                calls: Cell::new(0),
            }
        }

        fn unreachable_endpoint() -> Self {
            Self {
                response: RefCell::new(None),
                calls: Cell::new(0),
            }
        }
    }

    impl CurrentUserApi for ScriptedApi {
        async fn current_user(&self, _token: &str) -> Result<UserProfile, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.response
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted response".into())))
        }
    }

    fn profile(usage_count: u32) -> UserProfile {
        UserProfile {
            username: "alice".into(),
            usage_count,
        }
    }

    fn logged_in_state() -> AppState {
        let state = AppState::new();
        state.session.set_token("T".into());
        state
    }

    #[tokio::test]
    async fn fresh_cache_skips_the_network() {
        let state = logged_in_state();
        state.session.cache_profile(profile(3), now_ms());

        let vm = SessionViewModel {
            api: ScriptedApi::unreachable_endpoint(),
        };
        vm.load_current_user(&state, false).await;

        assert_eq!(vm.api.calls.get(), 0);
        assert_eq!(state.session.profile().unwrap().usage_count, 3);
    }

    #[tokio::test]
    async fn stale_cache_fetches_and_recaches() {
        let state = logged_in_state();
        // cached long ago, well past the TTL
        state.session.cache_profile(profile(3), 0.0);

        let vm = SessionViewModel {
            api: ScriptedApi::returning(Ok(profile(2))),
        };
        vm.load_current_user(&state, false).await;

        assert_eq!(vm.api.calls.get(), 1);
        assert_eq!(state.session.profile().unwrap().usage_count, 2);
        assert!(state.session.fresh_profile(now_ms()).is_some());
    }

    #[tokio::test]
    async fn force_bypasses_a_fresh_cache() {
        let state = logged_in_state();
        state.session.cache_profile(profile(3), now_ms());

        let vm = SessionViewModel {
            api: ScriptedApi::returning(Ok(profile(2))),
        };
        vm.load_current_user(&state, true).await;

        assert_eq!(vm.api.calls.get(), 1);
        assert_eq!(state.session.profile().unwrap().usage_count, 2);
    }

    #[tokio::test]
    async fn unauthorized_clears_the_session() {
        let state = logged_in_state();
        state.session.cache_profile(profile(3), 0.0);

        let vm = SessionViewModel {
            api: ScriptedApi::returning(Err(ApiError::Unauthorized("token expired".into()))),
        };
        vm.load_current_user(&state, false).await;

        assert!(state.session.get_token().is_none());
        assert!(state.session.profile().is_none());
    }

    #[tokio::test]
    async fn any_other_fetch_failure_also_logs_out() {
        let state = logged_in_state();

        let vm = SessionViewModel {
            api: ScriptedApi::returning(Err(ApiError::Network("connection refused".into()))),
        };
        vm.load_current_user(&state, false).await;

        assert!(state.session.get_token().is_none());
        assert!(state.session.profile().is_none());
    }

    #[tokio::test]
    async fn missing_token_never_touches_the_endpoint() {
        let state = AppState::new();

        let vm = SessionViewModel {
            api: ScriptedApi::unreachable_endpoint(),
        };
        vm.load_current_user(&state, false).await;

        assert_eq!(vm.api.calls.get(), 0);
        assert!(state.session.get_token().is_none());
    }
}
