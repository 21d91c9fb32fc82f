use dioxus::prelude::*;

use crate::domain::{freight_band_label, CalculationInput, MaterialUnit, ParameterField};
use crate::ui::theme;

/// Text box bound to one numeric field. While the user types, the raw text is kept
/// locally; every parseable value is pushed out immediately, so the dashboard
/// recomputes on each keystroke. On blur the box snaps back to the canonical value.
#[component]
pub fn ParameterInput(
    field: ParameterField,
    input: CalculationInput,
    on_change: EventHandler<CalculationInput>,
    hint: Option<String>,
) -> Element {
    let mut draft = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);

    let shown = draft().unwrap_or_else(|| field.format(&input));
    let invalid = error().is_some();
    let footnote = match error() {
        Some(message) => Some(("text-rose-300", message)),
        None => hint.map(|hint| (theme::TEXT_MUTED, hint)),
    };

    rsx! {
        div {
            label { class: theme::LABEL, "{field.label()}" }
            input {
                class: theme::input_class(invalid),
                inputmode: "decimal",
                value: "{shown}",
                oninput: move |evt| {
                    let raw = evt.value();
                    match field.parse(&raw) {
                        Ok(value) => {
                            error.set(None);
                            on_change.call(field.apply(&input, value));
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                    draft.set(Some(raw));
                },
                onblur: move |_| {
                    draft.set(None);
                    error.set(None);
                },
            }
            if let Some((tone, text)) = footnote {
                p { class: "mt-1 text-xs {tone}", "{text}" }
            }
        }
    }
}

const SLIDER_MAX_KM: f64 = 100.0;

/// Upper end of the distance slider: the usual 100 km haul range, stretched to the
/// next 10 km step when a longer distance is already set.
fn slider_max_km(distance_km: f64) -> f64 {
    if distance_km > SLIDER_MAX_KM {
        (distance_km / 10.0).ceil() * 10.0
    } else {
        SLIDER_MAX_KM
    }
}

/// Whole-kilometre distance slider. Moving it re-suggests the freight price.
#[component]
pub fn DistanceSlider(input: CalculationInput, on_change: EventHandler<CalculationInput>) -> Element {
    let distance = input.distance_km;
    let band = freight_band_label(distance);
    let max_km = slider_max_km(distance);

    rsx! {
        div {
            div { class: "flex items-center justify-between",
                label { class: theme::LABEL, "{ParameterField::DistanceKm.label()}" }
                span { class: "text-xs text-slate-300", "{distance:.0} km ({band})" }
            }
            input {
                class: "mt-2 w-full",
                r#type: "range",
                min: "0",
                max: "{max_km:.0}",
                step: "1",
                value: "{distance:.0}",
                oninput: move |evt| {
                    if let Ok(value) = ParameterField::DistanceKm.parse(&evt.value()) {
                        on_change.call(ParameterField::DistanceKm.apply(&input, value));
                    }
                },
            }
        }
    }
}

#[component]
pub fn UnitSelect(input: CalculationInput, on_change: EventHandler<CalculationInput>) -> Element {
    let current = input.unit;

    rsx! {
        div {
            label { class: theme::LABEL, "Unit" }
            select {
                class: theme::input_class(false),
                value: current.key(),
                onchange: move |evt| {
                    if let Some(unit) = MaterialUnit::from_key(&evt.value()) {
                        on_change.call(CalculationInput { unit, ..input.clone() });
                    }
                },
                for unit in MaterialUnit::ALL {
                    option {
                        value: unit.key(),
                        selected: unit == current,
                        "{unit.symbol()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_keeps_default_range_up_to_100_km() {
        assert_eq!(slider_max_km(0.0), 100.0);
        assert_eq!(slider_max_km(40.0), 100.0);
        assert_eq!(slider_max_km(100.0), 100.0);
    }

    #[test]
    fn slider_range_covers_longer_hauls() {
        assert_eq!(slider_max_km(120.0), 120.0);
        assert_eq!(slider_max_km(123.4), 130.0);
        assert!(slider_max_km(250.5) >= 250.5);
    }
}
