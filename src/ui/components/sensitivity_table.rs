use dioxus::prelude::*;

use crate::domain::SensitivityRow;
use crate::ui::theme;
use crate::util::format;

#[component]
pub fn SensitivityTable(rows: Vec<SensitivityRow>, currency: String) -> Element {
    rsx! {
        div {
            class: theme::TABLE_CONTAINER,
            table {
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: "{theme::TABLE_HEADER} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Logistics change" }
                        th { class: "px-4 py-3 font-medium text-right", "Logistics cost" }
                        th { class: "px-4 py-3 font-medium text-right", "Result" }
                        th { class: "px-4 py-3 font-medium text-right", "vs. baseline" }
                    }
                }
                tbody {
                    class: theme::TABLE_DIVIDER,
                    for row in rows {
                        tr { key: "{row.label}",
                            td { class: "px-4 py-3 text-slate-300", "{row.label}" }
                            td { class: "px-4 py-3 text-right tabular-nums text-slate-300",
                                {format::money(row.scaled_logistics_cost, &currency)}
                            }
                            td { class: "px-4 py-3 text-right tabular-nums {theme::signed_text(row.scaled_profit)}",
                                {format::money(row.scaled_profit, &currency)}
                            }
                            td { class: "px-4 py-3 text-right tabular-nums {theme::TEXT_MUTED}",
                                {format::money(row.profit_delta, &currency)}
                            }
                        }
                    }
                }
            }
        }
    }
}
