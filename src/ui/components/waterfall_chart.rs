use dioxus::prelude::*;

use super::chart_scale::ValueScale;
use crate::domain::{WaterfallKind, WaterfallStep};
use crate::ui::theme;
use crate::util::format;

const WIDTH: f64 = 360.0;
const PLOT_TOP: f64 = 20.0;
const PLOT_HEIGHT: f64 = 150.0;
const BAR_WIDTH: f64 = 44.0;

/// Per-tonne waterfall from sale price down to profit.
#[component]
pub fn Waterfall(steps: Vec<WaterfallStep>) -> Element {
    let scale = ValueScale::new(
        steps.iter().flat_map(|step| [step.from, step.to]),
        PLOT_TOP,
        PLOT_HEIGHT,
    );
    let slot = WIDTH / steps.len().max(1) as f64;
    let baseline = scale.y(0.0);

    let bars = steps
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            let (y, height) = scale.span(step.from, step.to);
            let x = index as f64 * slot + (slot - BAR_WIDTH) / 2.0;
            let color = match step.kind {
                WaterfallKind::Start => theme::START_COLOR,
                WaterfallKind::Decrease => theme::LOSS_COLOR,
                WaterfallKind::Result if step.value < 0.0 => theme::LOSS_COLOR,
                WaterfallKind::Result => theme::PROFIT_COLOR,
            };
            let shown = match step.kind {
                WaterfallKind::Decrease => -step.value,
                _ => step.value,
            };
            BarView {
                label: step.label,
                value: format::grouped(shown, 2),
                x,
                y,
                height,
                value_y: y - 4.0,
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
                    text { class: "chart-label", x: "{bar.center}", y: "192", text_anchor: "middle", "{bar.label}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct BarView {
    label: &'static str,
    value: String,
    x: f64,
    y: f64,
    height: f64,
    value_y: f64,
    center: f64,
    color: &'static str,
}
