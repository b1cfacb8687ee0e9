// ============================================================================
// AUTH MODALS - login and register forms
// ============================================================================
// Form values live in Rc<RefCell<String>> captured by the input closures,
// matching how the login view keeps its local state elsewhere in the app.
// Status lines are updated in place instead of through a full re-render,
// so a failed attempt keeps whatever the user typed.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, event_hit_self, on_click, on_input, on_submit, set_text_content, ElementBuilder,
};
use crate::state::AppState;
use crate::utils::messages::{LOGGING_IN, REGISTERING};
use crate::viewmodels::session_viewmodel::reload_page;
use crate::viewmodels::SessionViewModel;

pub fn render_login_modal(state: &AppState) -> Result<Element, JsValue> {
    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let (overlay, content) = modal_shell(state, "login-modal")?;
    append_child(&content, &ElementBuilder::new("h2")?.text("登录").build())?;

    let form = ElementBuilder::new("form")?.id("login-form")?.build();
    append_child(
        &form,
        &text_input("login-username", "text", "用户名", username.clone())?,
    )?;
    append_child(
        &form,
        &text_input("login-password", "password", "密码", password.clone())?,
    )?;
    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .text("登录")
        .build();
    append_child(&form, &submit)?;
    append_child(&content, &form)?;

    let message = ElementBuilder::new("p")?
        .id("login-message")?
        .class("form-message")
        .build();
    append_child(&content, &message)?;

    {
        let state = state.clone();
        on_submit(&form, move |event| {
            event.prevent_default();
            let user = username.borrow().clone();
            let pass = password.borrow().clone();

            message.set_class_name("form-message");
            set_text_content(&message, LOGGING_IN);

            let state = state.clone();
            let message = message.clone();
            spawn_local(async move {
                match SessionViewModel::new().login(&state, &user, &pass).await {
                    Ok(()) => reload_page(),
                    Err(e) => {
                        message.set_class_name("form-message error");
                        set_text_content(&message, &e.to_string());
                    }
                }
            });
        })?;
    }

    Ok(overlay)
}

pub fn render_register_modal(state: &AppState) -> Result<Element, JsValue> {
    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let (overlay, content) = modal_shell(state, "register-modal")?;
    append_child(&content, &ElementBuilder::new("h2")?.text("注册").build())?;

    let form = ElementBuilder::new("form")?.id("register-form")?.build();
    append_child(
        &form,
        &text_input("register-username", "text", "用户名", username.clone())?,
    )?;
    append_child(
        &form,
        &text_input("register-password", "password", "密码", password.clone())?,
    )?;
    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .text("注册")
        .build();
    append_child(&form, &submit)?;
    append_child(&content, &form)?;

    let message = ElementBuilder::new("p")?
        .id("register-message")?
        .class("form-message")
        .build();
    append_child(&content, &message)?;

    {
        let state = state.clone();
        on_submit(&form, move |event| {
            event.prevent_default();
            let user = username.borrow().clone();
            let pass = password.borrow().clone();

            message.set_class_name("form-message");
            set_text_content(&message, REGISTERING);

            let state = state.clone();
            let message = message.clone();
            spawn_local(async move {
                // register chains into login with the same credentials;
                // the reload lands on a logged-in page, no interim status
                match SessionViewModel::new().register(&state, &user, &pass).await {
                    Ok(()) => reload_page(),
                    Err(e) => {
                        message.set_class_name("form-message error");
                        set_text_content(&message, &e.to_string());
                    }
                }
            });
        })?;
    }

    Ok(overlay)
}

/// Backdrop + content container + close button. A click on the backdrop
/// itself (not on the content) closes the modal, like a click on ×.
fn modal_shell(state: &AppState, id: &str) -> Result<(Element, Element), JsValue> {
    let overlay = ElementBuilder::new("div")?.id(id)?.class("modal").build();
    let content = ElementBuilder::new("div")?.class("modal-content").build();

    let close = ElementBuilder::new("span")?
        .class("close-btn")
        .text("×")
        .build();
    {
        let state = state.clone();
        on_click(&close, move |_| state.close_modals())?;
    }
    append_child(&content, &close)?;

    {
        let state = state.clone();
        let overlay_el = overlay.clone();
        on_click(&overlay, move |event| {
            if event_hit_self(&event, &overlay_el) {
                state.close_modals();
            }
        })?;
    }

    append_child(&overlay, &content)?;
    Ok((overlay, content))
}

fn text_input(
    id: &str,
    input_type: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .attr("required", "")?
        .build();

    let input_el: HtmlInputElement = input.clone().dyn_into()?;
    on_input(&input, move |_| {
        *value.borrow_mut() = input_el.value();
    })?;

    Ok(input)
}
