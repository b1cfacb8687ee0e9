// ============================================================================
// APP VIEW - page layout, rebuilt from state on every render
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::views::{
    render_login_modal, render_query_form, render_register_modal, render_results,
    render_user_status,
};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("app").build();

    let header = ElementBuilder::new("header")?.class("app-header").build();
    let title = ElementBuilder::new("h1")?.text("拍卖行物品查询").build();
    append_child(&header, &title)?;
    append_child(&header, &render_user_status(state)?)?;
    append_child(&container, &header)?;

    let main = ElementBuilder::new("main")?.class("app-main").build();
    append_child(&main, &render_query_form(state)?)?;
    append_child(&main, &render_results(state)?)?;
    append_child(&container, &main)?;

    // Modals are part of the state-driven render, no style.display games
    if *state.show_login_modal.borrow() {
        append_child(&container, &render_login_modal(state)?)?;
    }
    if *state.show_register_modal.borrow() {
        append_child(&container, &render_register_modal(state)?)?;
    }

    Ok(container)
}
