use dioxus::prelude::*;

use super::chart_scale::ValueScale;
use crate::domain::SensitivityRow;
use crate::ui::theme;
use crate::util::format;

const WIDTH: f64 = 360.0;
const BAR_WIDTH: f64 = 40.0;

/// Result per logistics scenario, one bar per factor.
#[component]
pub fn SensitivityChart(rows: Vec<SensitivityRow>) -> Element {
    let scale = ValueScale::new(rows.iter().map(|row| row.scaled_profit), 20.0, 150.0);
    let slot = WIDTH / rows.len().max(1) as f64;
    let baseline = scale.y(0.0);

    let bars = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let (y, height) = scale.span(0.0, row.scaled_profit);
            let x = index as f64 * slot + (slot - BAR_WIDTH) / 2.0;
            let color = if row.scaled_profit < 0.0 {
                theme::LOSS_COLOR
            } else {
                theme::PROFIT_COLOR
            };
            // Label above positive bars, below negative ones.
            let value_y = if row.scaled_profit < 0.0 { y + height + 12.0 } else { y - 4.0 };
            BarView {
                label: row.label,
                value: format::grouped(row.scaled_profit, 0),
                x,
                y,
                height,
                value_y,
                center: x + BAR_WIDTH / 2.0,
                color,
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        svg {
            class: "w-full",
            view_box: "0 0 {WIDTH} 200",
            line { class: "chart-axis", x1: "0", y1: "{baseline}", x2: "{WIDTH}", y2: "{baseline}" }
            for bar in bars {
                g { key: "{bar.label}",
                    rect { x: "{bar.x}", y: "{bar.y}", width: "{BAR_WIDTH}", height: "{bar.height}", fill: bar.color, rx: "3" }
                    text { class: "chart-value", x: "{bar.center}", y: "{bar.value_y}", text_anchor: "middle", "{bar.value}" }
                    text { class: "chart-label", x: "{bar.center}", y: "194", text_anchor: "middle", "{bar.label}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct BarView {
    label: String,
    value: String,
    x: f64,
    y: f64,
    height: f64,
    value_y: f64,
    center: f64,
    color: &'static str,
}
