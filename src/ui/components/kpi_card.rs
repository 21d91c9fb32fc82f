use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn KpiCard(
    title: &'static str,
    value: String,
    description: Option<String>,
    tone: Option<&'static str>,
) -> Element {
    let tone = tone.unwrap_or("text-slate-200");
    rsx! {
        div {
            class: "{theme::PANEL} p-4 shadow-sm",
            h3 { class: theme::LABEL, "{title}" }
            p { class: "mt-2 text-2xl font-semibold {tone}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::TEXT_MUTED}", "{desc}" }
            }
        }
    }
}
