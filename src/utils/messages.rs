// ============================================================================
// UI STRINGS - literal display texts
// ============================================================================
// The UI deliberately mixes Chinese and English the way the original site
// did. No translation layer; these are the canonical strings.
// ============================================================================

/// Shown for a zero-result query and for any query failure that is not
/// a quota problem.
pub const ITEM_NOT_FOUND: &str = "未找到物品。";

/// Shown when the server rejects a query because the usage quota ran out.
pub const NO_QUOTA: &str = "没有可用额度";

/// Substring the backend puts in its quota-exhausted error detail.
pub const USAGE_LIMIT_MARKER: &str = "Usage limit exceeded";

pub const MUST_LOGIN: &str = "You must be logged in to use the query API.";
pub const QUERYING: &str = "查询中...";
pub const LOGGING_IN: &str = "Logging in...";
pub const REGISTERING: &str = "Registering...";

pub const LOGIN_FAILED_FALLBACK: &str = "Login failed";
pub const REGISTER_FAILED_FALLBACK: &str = "Registration failed";
pub const GENERIC_ERROR_FALLBACK: &str = "An error occurred.";
