/// Base URL of the query backend.
/// Configured at compile time:
/// - Development: http://localhost:8000 (default)
/// - Production: via BACKEND_URL env var (see build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// localStorage key holding the bearer token. Same key the old
/// JavaScript frontend used, so existing sessions survive the migration.
pub const TOKEN_STORAGE_KEY: &str = "accessToken";

/// How long a fetched user profile stays servable from memory.
pub const PROFILE_CACHE_TTL_MS: f64 = 30_000.0;
