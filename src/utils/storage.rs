// localStorage wrappers. The non-wasm variants are no-ops so the state
// machinery (which persists through here) can run under native cargo test.

#[cfg(target_arch = "wasm32")]
use crate::utils::constants::TOKEN_STORAGE_KEY;

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Persist the bearer token. Stored as a plain string, not JSON,
/// so it stays compatible with what the backend hands out.
#[cfg(target_arch = "wasm32")]
pub fn save_token(token: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage is not available")?;
    storage
        .set_item(TOKEN_STORAGE_KEY, token)
        .map_err(|_| "Failed to write token to localStorage".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn load_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_STORAGE_KEY).ok()?
}

#[cfg(target_arch = "wasm32")]
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_token(_token: &str) -> Result<(), String> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_token() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_token() {}
