/// Current time in ms since the epoch. Browser clock on wasm, system
/// clock elsewhere so viewmodel tests can run natively. State methods
/// still take timestamps as arguments; this only feeds the call sites.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}
