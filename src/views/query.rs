// ============================================================================
// QUERY VIEW - item-id input + gated search button
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, on_input, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::QueryViewModel;

pub fn render_query_form(state: &AppState) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?.id("query-form")?.build();

    let input = ElementBuilder::new("input")?
        .id("item-id-input")?
        .attr("type", "text")?
        .attr("placeholder", "输入物品ID")?
        .attr("value", &state.session.search_input())?
        .build();

    let button = ElementBuilder::new("button")?
        .id("search-btn")?
        .attr("type", "submit")?
        .text("搜索")
        .build();
    if !state.session.search_enabled() {
        button.set_attribute("disabled", "")?;
    }

    // Enablement is recomputed on every keystroke, toggled in place so
    // the input keeps focus (a full re-render would drop it).
    {
        let state = state.clone();
        let input_el: HtmlInputElement = input.clone().dyn_into()?;
        let button_el = button.clone();
        on_input(&input, move |_| {
            state.session.set_search_input(input_el.value());
            if state.session.search_enabled() {
                let _ = button_el.remove_attribute("disabled");
            } else {
                let _ = button_el.set_attribute("disabled", "");
            }
        })?;
    }

    {
        let state = state.clone();
        on_submit(&form, move |event| {
            event.prevent_default();
            let state = state.clone();
            spawn_local(async move {
                // run_query re-checks the guard itself
                QueryViewModel::new().run_query(&state).await;
            });
        })?;
    }

    append_child(&form, &input)?;
    append_child(&form, &button)?;
    Ok(form)
}
