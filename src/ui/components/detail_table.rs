use dioxus::prelude::*;

use crate::domain::{DetailRow, DetailValue};
use crate::ui::theme;
use crate::util::format;

#[component]
pub fn DetailTable(rows: Vec<DetailRow>, currency: String) -> Element {
    let rendered_rows = rows
        .into_iter()
        .map(|row| {
            let absolute = render_value(&row.absolute);
            let per_tonne = render_value(&row.per_tonne);
            let weight = if row.subtotal {
                "font-semibold text-slate-100"
            } else {
                "text-slate-300"
            };
            (row.position, absolute, per_tonne, weight)
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: theme::TABLE_CONTAINER,
            table {
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: "{theme::TABLE_HEADER} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Position" }
                        th { class: "px-4 py-3 font-medium text-right", "Absolute ({currency})" }
                        th { class: "px-4 py-3 font-medium text-right", "Per tonne ({currency})" }
                    }
                }
                tbody {
                    class: theme::TABLE_DIVIDER,
                    for (position, absolute, per_tonne, weight) in rendered_rows {
                        tr { key: "{position}",
                            td { class: "px-4 py-3 {weight}", "{position}" }
                            td { class: "px-4 py-3 text-right tabular-nums {weight}", "{absolute}" }
                            td { class: "px-4 py-3 text-right tabular-nums {weight}", "{per_tonne}" }
                        }
                    }
                }
            }
        }
    }
}

fn render_value(value: &DetailValue) -> String {
    match value {
        DetailValue::Amount(amount) => format::grouped(*amount, 2),
        DetailValue::Tonnes(mass) => format::tonnes(*mass),
        DetailValue::Empty => "-".to_string(),
    }
}
