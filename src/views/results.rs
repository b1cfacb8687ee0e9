// ============================================================================
// RESULTS VIEW - query outcome: table, message, or in-flight note
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, set_inner_html, set_text_content, ElementBuilder};
use crate::models::QueryResponse;
use crate::state::{AppState, QueryOutcome};
use crate::utils::format_buyout;
use crate::utils::messages::QUERYING;

pub fn render_results(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.id("query-result")?.build();

    match state.query_outcome() {
        None => {}
        Some(QueryOutcome::Pending) => {
            set_text_content(&container, QUERYING);
        }
        Some(QueryOutcome::Message(message)) => {
            let line = ElementBuilder::new("p")?
                .class("query-message")
                .text(&message)
                .build();
            append_child(&container, &line)?;
        }
        Some(QueryOutcome::Results(response)) => {
            append_child(&container, &render_table(&response)?)?;
        }
    }

    Ok(container)
}

fn render_table(response: &QueryResponse) -> Result<Element, JsValue> {
    let wrapper = ElementBuilder::new("div")?.class("result-table").build();

    let count_line = ElementBuilder::new("p")?
        .class("result-count")
        .text(&format!("共找到 {} 件物品", response.count))
        .build();
    append_child(&wrapper, &count_line)?;

    let table = ElementBuilder::new("table")?.build();

    let thead = ElementBuilder::new("thead")?.build();
    set_inner_html(
        &thead,
        "<tr><th>物品ID</th><th>名称</th><th>数量</th><th>一口价</th></tr>",
    );
    append_child(&table, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for item in &response.data {
        let row = ElementBuilder::new("tr")?.build();
        for cell_text in [
            item.item_id.to_string(),
            item.name.clone(),
            item.quantity.to_string(),
            format_buyout(item.buyout_amount),
        ] {
            let cell = ElementBuilder::new("td")?.text(&cell_text).build();
            append_child(&row, &cell)?;
        }
        append_child(&tbody, &row)?;
    }
    append_child(&table, &tbody)?;

    append_child(&wrapper, &table)?;
    Ok(wrapper)
}
