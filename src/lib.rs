// ============================================================================
// AUCTION QUERY PWA
// ============================================================================
// Browser client for the auction house item database:
// - Models: wire types shared with the backend
// - Services: HTTP only (stateless ApiClient)
// - State: session + view state with Rc<RefCell>
// - ViewModels: session/query logic, no DOM
// - Views: render DOM from state
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Auction Query starting...");

    let mut app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Full re-render of the mounted app; state subscribers schedule this.
pub(crate) fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Re-render failed: {:?}", e);
            }
        }
    });
}
