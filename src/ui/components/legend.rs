use dioxus::prelude::*;

use crate::domain::legend::{LegendCell, LegendRow};

#[component]
pub fn Legend(rows: Vec<LegendRow>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; padding: 8px 0;",
            {rows.iter().map(|row| {
                let columns = row.len().max(1);
                rsx!(
                    div {
                        style: "display: grid; grid-template-columns: repeat({columns}, 1fr); gap: 8px;",
                        {row.iter().map(|cell| match cell {
                            LegendCell::Entry { category, color } => rsx!(
                                div {
                                    style: "display: flex; align-items: center; margin-bottom: 4px;",
                                    div {
                                        style: "width: 14px; height: 14px; background: {color}; border-radius: 3px; border: 1px solid #ccc; margin-right: 6px; flex-shrink: 0;",
                                    }
                                    span { style: "font-size: 13px; font-family: sans-serif;", "{category}" }
                                }
                            ),
                            LegendCell::Placeholder => rsx!(
                                div { dangerous_inner_html: "&nbsp;" }
                            ),
                        })}
                    }
                )
            })}
        }
    }
}
