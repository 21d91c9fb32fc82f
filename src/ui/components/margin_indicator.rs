use dioxus::prelude::*;

use crate::domain::MarginIndicator as IndicatorState;
use crate::ui::theme;
use crate::util::format;

#[component]
pub fn MarginIndicator(indicator: IndicatorState) -> Element {
    let badge = theme::margin_badge(indicator.status);
    let margin_display = format::percent(indicator.margin_percent);

    rsx! {
        div {
            class: "rounded-xl border px-4 py-3 {badge}",
            div {
                class: "flex items-center justify-between",
                span { class: "text-xs font-semibold uppercase tracking-wide", "Margin" }
                span { class: "text-xs font-semibold uppercase", "{indicator.status.label()}" }
            }
            p { class: "mt-2 text-2xl font-semibold", "{margin_display}" }
            p { class: "mt-1 text-xs opacity-80", "{indicator.rationale}" }
        }
    }
}
