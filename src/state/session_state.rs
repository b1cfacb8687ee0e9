// ============================================================================
// SESSION STATE - token + cached user profile + search gating
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::UserProfile;
use crate::utils::constants::PROFILE_CACHE_TTL_MS;
use crate::utils::storage;

/// Session state shared across views and viewmodels.
///
/// Timestamps come in as arguments (ms since epoch) instead of being read
/// from the browser clock here, so the cache logic runs under plain
/// `cargo test`. `utils::time::now_ms()` supplies them in the app.
#[derive(Clone)]
pub struct SessionState {
    token: Rc<RefCell<Option<String>>>,
    profile: Rc<RefCell<Option<UserProfile>>>,
    fetched_at_ms: Rc<RefCell<Option<f64>>>,
    search_input: Rc<RefCell<String>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            token: Rc::new(RefCell::new(None)),
            profile: Rc::new(RefCell::new(None)),
            fetched_at_ms: Rc::new(RefCell::new(None)),
            search_input: Rc::new(RefCell::new(String::new())),
        }
    }

    /// Restore a previously persisted session, if any.
    pub fn restore() -> Self {
        let state = Self::new();
        if let Some(token) = storage::load_token() {
            *state.token.borrow_mut() = Some(token);
        }
        state
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    /// Store a fresh token and persist it across reloads.
    pub fn set_token(&self, token: String) {
        if let Err(e) = storage::save_token(&token) {
            log::error!("❌ Failed to persist token: {}", e);
        }
        *self.token.borrow_mut() = Some(token);
    }

    /// Drop the whole session: token, cached profile and the persisted
    /// storage entry. Used by logout and by any 401.
    pub fn clear(&self) {
        storage::clear_token();
        *self.token.borrow_mut() = None;
        *self.profile.borrow_mut() = None;
        *self.fetched_at_ms.borrow_mut() = None;
    }

    /// Whatever profile is held right now, fresh or not. Views render
    /// from this; only the fetch decision cares about age.
    pub fn profile(&self) -> Option<UserProfile> {
        self.profile.borrow().clone()
    }

    /// The cached profile, but only while younger than the TTL.
    /// Returns None once stale so the caller knows to hit the network.
    pub fn fresh_profile(&self, now_ms: f64) -> Option<UserProfile> {
        let fetched_at = (*self.fetched_at_ms.borrow())?;
        if now_ms - fetched_at < PROFILE_CACHE_TTL_MS {
            self.profile.borrow().clone()
        } else {
            None
        }
    }

    pub fn cache_profile(&self, profile: UserProfile, now_ms: f64) {
        *self.profile.borrow_mut() = Some(profile);
        *self.fetched_at_ms.borrow_mut() = Some(now_ms);
    }

    /// Force the next profile access to fetch, without blanking what the
    /// UI currently shows. Called after every successful query, because
    /// the server just decremented the quota.
    pub fn invalidate_profile(&self) {
        *self.fetched_at_ms.borrow_mut() = None;
    }

    pub fn search_input(&self) -> String {
        self.search_input.borrow().clone()
    }

    pub fn set_search_input(&self, value: String) {
        *self.search_input.borrow_mut() = value;
    }

    /// The search button is enabled iff the profile reports remaining
    /// quota AND the trimmed item-id input is non-empty. Recomputed on
    /// every input change and every profile refresh.
    pub fn search_enabled(&self) -> bool {
        let has_quota = self
            .profile
            .borrow()
            .as_ref()
            .map(|p| p.has_quota())
            .unwrap_or(false);
        has_quota && !self.search_input.borrow().trim().is_empty()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(usage_count: u32) -> UserProfile {
        UserProfile {
            username: "alice".into(),
            usage_count,
        }
    }

    #[test]
    fn fresh_profile_hits_within_ttl() {
        let state = SessionState::new();
        state.cache_profile(profile(3), 1_000.0);

        assert_eq!(state.fresh_profile(1_000.0).unwrap().usage_count, 3);
        assert_eq!(state.fresh_profile(30_999.0).unwrap().usage_count, 3);
    }

    #[test]
    fn fresh_profile_is_stale_at_ttl() {
        let state = SessionState::new();
        state.cache_profile(profile(3), 1_000.0);

        // "younger than 30 seconds" is strict, 30s exactly is stale
        assert!(state.fresh_profile(31_000.0).is_none());
        assert!(state.fresh_profile(500_000.0).is_none());
        // the raw profile is still there for rendering
        assert!(state.profile().is_some());
    }

    #[test]
    fn invalidate_forces_next_access_to_fetch() {
        let state = SessionState::new();
        state.cache_profile(profile(3), 1_000.0);
        assert!(state.fresh_profile(1_001.0).is_some());

        state.invalidate_profile();
        assert!(state.fresh_profile(1_002.0).is_none());
        // display data survives until the re-fetch lands
        assert_eq!(state.profile().unwrap().usage_count, 3);
    }

    #[test]
    fn clear_wipes_token_and_cache() {
        let state = SessionState::new();
        *state.token.borrow_mut() = Some("T".into());
        state.cache_profile(profile(3), 1_000.0);

        state.clear();
        assert!(state.get_token().is_none());
        assert!(state.profile().is_none());
        assert!(state.fresh_profile(1_001.0).is_none());
    }

    #[test]
    fn search_requires_quota_and_input() {
        let state = SessionState::new();

        // no profile at all
        state.set_search_input("12345".into());
        assert!(!state.search_enabled());

        // quota exhausted
        state.cache_profile(profile(0), 1_000.0);
        assert!(!state.search_enabled());

        // quota available but blank input
        state.cache_profile(profile(2), 1_000.0);
        state.set_search_input("   ".into());
        assert!(!state.search_enabled());

        // both conditions hold
        state.set_search_input(" 12345 ".into());
        assert!(state.search_enabled());
    }

    #[test]
    fn search_gate_tracks_profile_refreshes() {
        let state = SessionState::new();
        state.set_search_input("12345".into());

        state.cache_profile(profile(1), 1_000.0);
        assert!(state.search_enabled());

        // quota ran out on the refreshed profile
        state.cache_profile(profile(0), 2_000.0);
        assert!(!state.search_enabled());
    }

    #[test]
    fn clones_share_state() {
        let state = SessionState::new();
        let alias = state.clone();

        alias.cache_profile(profile(5), 1_000.0);
        assert_eq!(state.profile().unwrap().usage_count, 5);
    }
}
