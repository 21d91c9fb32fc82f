use dioxus::prelude::*;

use super::chart_scale::donut_segments;
use crate::domain::CostShare;
use crate::ui::theme;
use crate::util::format;

const RADIUS: f64 = 60.0;

/// Cost structure as a donut with the total in the middle.
#[component]
pub fn CostDonut(shares: Vec<CostShare>, total: f64, currency: String) -> Element {
    let fractions: Vec<f64> = shares.iter().map(|share| share.percent / 100.0).collect();
    let segments = donut_segments(&fractions, RADIUS);
    let rows = shares
        .into_iter()
        .zip(segments)
        .map(|(share, (dash, offset))| (theme::component_color(share.component), share, dash, offset))
        .collect::<Vec<_>>();
    let total_display = format::money(total, &currency);

    rsx! {
        div { class: "flex flex-col items-center gap-4 sm:flex-row",
            svg {
                class: "h-48 w-48 shrink-0",
                view_box: "0 0 160 160",
                circle { cx: "80", cy: "80", r: "{RADIUS}", fill: "none", stroke: "#1e293b", stroke_width: "26" }
                g { transform: "rotate(-90 80 80)",
                    for (color, share, dash, offset) in rows.clone() {
                        circle {
                            key: "{share.component.label()}",
                            cx: "80",
                            cy: "80",
                            r: "{RADIUS}",
                            fill: "none",
                            stroke: color,
                            stroke_width: "26",
                            stroke_dasharray: "{dash}",
                            stroke_dashoffset: "{offset}",
                        }
                    }
                }
                text { class: "chart-value", x: "80", y: "84", text_anchor: "middle", "{total_display}" }
            }
            ul { class: "space-y-2 text-sm",
                for (color, share, _, _) in rows {
                    li { class: "flex items-center gap-2",
                        span { class: "inline-block h-3 w-3 rounded-sm", style: "background-color: {color}" }
                        span { class: "text-slate-300", "{share.component.label()}" }
                        span { class: "ml-auto pl-4 font-semibold text-slate-100", {format::percent(share.percent)} }
                    }
                }
            }
        }
    }
}
