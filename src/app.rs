// ============================================================================
// APP - application controller
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;

        // Restores a persisted token, if the store has one
        let state = AppState::new();
        if state.session.get_token().is_some() {
            log::info!("💾 Stored token found, session will be validated");
        }

        // Batch change notifications into one re-render per tick
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        // Initial profile load: renders logged-out UI when there is no
        // token, serves the cache when fresh, logs out on 401/failure.
        {
            let state = state.clone();
            spawn_local(async move {
                SessionViewModel::new().load_current_user(&state, false).await;
            });
        }

        Ok(Self { state, root })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;
        Ok(())
    }
}
