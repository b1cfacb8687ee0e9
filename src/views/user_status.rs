// ============================================================================
// USER STATUS VIEW - 登录/注册 triggers or icon + quota tooltip + logout
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, set_inner_html, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

pub fn render_user_status(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.id("user-status")?.build();

    // No token means logged out, whatever else might linger in memory
    if state.session.get_token().is_none() {
        let login_btn = ElementBuilder::new("button")?
            .id("login-btn")?
            .text("登录")
            .build();
        {
            let state = state.clone();
            on_click(&login_btn, move |_| state.open_login_modal())?;
        }

        let register_btn = ElementBuilder::new("button")?
            .id("register-btn")?
            .text("注册")
            .build();
        {
            let state = state.clone();
            on_click(&register_btn, move |_| state.open_register_modal())?;
        }

        append_child(&container, &login_btn)?;
        append_child(&container, &register_btn)?;
        return Ok(container);
    }

    // Token present but the profile fetch has not landed yet: render
    // nothing, the post-fetch notify re-renders (or forces a logout).
    let Some(profile) = state.session.profile() else {
        return Ok(container);
    };

    let user_info = ElementBuilder::new("div")?.id("user-info")?.build();
    let icon = ElementBuilder::new("div")?
        .id("user-icon")?
        .text("🤖")
        .build();
    append_child(&user_info, &icon)?;

    let tooltip = ElementBuilder::new("div")?.class("tooltip").build();
    set_inner_html(
        &tooltip,
        &format!(
            "<div><strong>User:</strong> {}</div>\
             <div><strong>API Calls Left:</strong> {}</div>",
            profile.username, profile.usage_count
        ),
    );
    append_child(&user_info, &tooltip)?;
    append_child(&container, &user_info)?;

    let logout_btn = ElementBuilder::new("button")?
        .id("logout-btn")?
        .text("Logout")
        .build();
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            SessionViewModel::new().logout(&state);
        })?;
    }
    append_child(&container, &logout_btn)?;

    Ok(container)
}
