// ============================================================================
// QUERY VIEWMODEL - guarded item search + two-bucket error display
// ============================================================================

use crate::services::{ApiClient, ApiError};
use crate::state::{AppState, QueryOutcome};
use crate::utils::messages::{ITEM_NOT_FOUND, MUST_LOGIN, NO_QUOTA};
use crate::viewmodels::SessionViewModel;

pub struct QueryViewModel {
    api: ApiClient,
}

impl QueryViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Run the item search for the current input.
    ///
    /// Guarded: a disabled search (no quota or blank input) is a silent
    /// no-op, a missing token fails visibly. On success the profile cache
    /// is invalidated and re-fetched so the shown quota reflects the
    /// server-side decrement.
    pub async fn run_query(&self, state: &AppState) {
        let input = state.session.search_input();
        let item_id = input.trim();
        if item_id.is_empty() || !state.session.search_enabled() {
            return;
        }

        let Some(token) = state.session.get_token() else {
            state.set_query_outcome(Some(QueryOutcome::Message(MUST_LOGIN.to_string())));
            state.notify_change();
            return;
        };

        state.set_query_outcome(Some(QueryOutcome::Pending));
        state.notify_change();

        match self.api.query_item(&token, item_id).await {
            Ok(response) => {
                if response.count == 0 {
                    state.set_query_outcome(Some(QueryOutcome::Message(ITEM_NOT_FOUND.to_string())));
                } else {
                    log::info!("✅ Query returned {} listings", response.count);
                    state.set_query_outcome(Some(QueryOutcome::Results(response)));
                }

                // The server consumed one call; drop the cached count and
                // force a fresh profile so the UI shows the new quota.
                state.session.invalidate_profile();
                SessionViewModel::new().load_current_user(state, true).await;
            }
            Err(e) => {
                log::error!("❌ Query failed: {}", e);
                state.set_query_outcome(Some(QueryOutcome::Message(
                    classify_query_error(&e).to_string(),
                )));
                state.notify_change();
            }
        }
    }
}

impl Default for QueryViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Query failures collapse into exactly two display buckets: quota
/// exhausted, and everything else shown as "item not found".
pub fn classify_query_error(err: &ApiError) -> &'static str {
    if err.is_usage_limit() {
        NO_QUOTA
    } else {
        ITEM_NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_limit_renders_no_quota() {
        let err = ApiError::Server {
            status: 429,
            message: "Usage limit exceeded. No more access attempts allowed.".into(),
        };
        assert_eq!(classify_query_error(&err), "没有可用额度");
    }

    #[test]
    fn every_other_failure_renders_not_found() {
        let cases = [
            ApiError::Server {
                status: 500,
                message: "internal error".into(),
            },
            ApiError::Network("connection refused".into()),
            ApiError::Parse("unexpected token".into()),
            ApiError::Unauthorized("token expired".into()),
        ];
        for err in cases {
            assert_eq!(classify_query_error(&err), "未找到物品。");
        }
    }
}
