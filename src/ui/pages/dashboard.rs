use dioxus::prelude::*;

use crate::{
    domain::{
        cost_shares, evaluate, margin_indicator, sensitivity_analysis, suggested_freight_price,
        waterfall_per_tonne, AppState, CalculationInput, ParameterField,
    },
    ui::{
        components::{
            donut_chart::CostDonut,
            toast::{push_toast, ToastKind, ToastMessage},
            kpi_card::KpiCard,
            margin_indicator::MarginIndicator,
            parameter_input::{DistanceSlider, ParameterInput, UnitSelect},
            sensitivity_chart::SensitivityChart,
            waterfall_chart::Waterfall,
        },
        theme,
    },
    util::format,
};

const MATERIAL_FIELDS: [ParameterField; 2] =
    [ParameterField::Quantity, ParameterField::DensityFactor];
const COST_FIELDS: [ParameterField; 4] = [
    ParameterField::ThroughputPerHour,
    ParameterField::MachineRatePerHour,
    ParameterField::OverheadPercent,
    ParameterField::SalePricePerTonne,
];

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let input = state.with(|st| st.input.clone());
    let currency = state.with(|st| st.currency.clone());

    let result = evaluate(&input);
    let indicator = margin_indicator(&result);
    let shares = cost_shares(&result);
    let steps = waterfall_per_tonne(&result);
    let sensitivity = sensitivity_analysis(&result);

    let freight_hint = if input.freight_price_overridden() {
        format!(
            "Manual price; list price at {:.0} km is {}",
            input.distance_km,
            format::money(suggested_freight_price(input.distance_km), &currency)
        )
    } else {
        "List price for this distance".to_string()
    };
    let mass_hint = format!(
        "= {} / {} m³",
        format::tonnes(result.total_mass),
        format::grouped(result.total_volume, 1)
    );

    rsx! {
        div { class: "grid gap-8 lg:grid-cols-[18rem_1fr]",
            aside { class: "space-y-6",
                ParameterGroup { title: "1. Material",
                    ParameterInput {
                        field: MATERIAL_FIELDS[0],
                        input: input.clone(),
                        on_change: move |next| write_input(state, next),
                        hint: mass_hint.clone(),
                    }
                    UnitSelect { input: input.clone(), on_change: move |next| write_input(state, next) }
                    ParameterInput {
                        field: MATERIAL_FIELDS[1],
                        input: input.clone(),
                        on_change: move |next| write_input(state, next),
                    }
                }
                ParameterGroup { title: "2. Logistics",
                    ParameterInput {
                        field: ParameterField::TruckPayload,
                        input: input.clone(),
                        on_change: move |next| write_input(state, next),
                        hint: format!("{:.2} trips per year", result.trip_count),
                    }
                    DistanceSlider {
                        input: input.clone(),
                        on_change: move |next: CalculationInput| {
                            if state.with(|st| st.input.freight_price_overridden()) {
                                push_toast(
                                    toasts,
                                    ToastKind::Info,
                                    format!(
                                        "Manual freight price replaced by the list price for {:.0} km.",
                                        next.distance_km
                                    ),
                                );
                            }
                            write_input(state, next);
                        },
                    }
                    ParameterInput {
                        field: ParameterField::FreightPricePerTrip,
                        input: input.clone(),
                        on_change: move |next| write_input(state, next),
                        hint: freight_hint,
                    }
                }
                ParameterGroup { title: "3. Costs & revenue",
                    for field in COST_FIELDS {
                        ParameterInput {
                            key: "{field.label()}",
                            field,
                            input: input.clone(),
                            on_change: move |next| write_input(state, next),
                        }
                    }
                }
            }

            div { class: "space-y-8",
                div { class: "grid gap-4 sm:grid-cols-2 xl:grid-cols-4",
                    KpiCard {
                        title: "Total quantity",
                        value: format::tonnes(result.total_mass),
                        description: format!("{} m³", format::grouped(result.total_volume, 1)),
                    }
                    KpiCard {
                        title: "Cost per tonne",
                        value: format::money_per_tonne(result.cost_per_tonne, &currency),
                        description: format!(
                            "incl. {} VAK",
                            format::money_per_tonne(result.overhead_cost_per_tonne, &currency)
                        ),
                    }
                    KpiCard {
                        title: "Revenue per tonne",
                        value: format::money_per_tonne(result.sale_price_per_tonne, &currency),
                    }
                    KpiCard {
                        title: "Result per tonne",
                        value: format::money_per_tonne(result.profit_per_tonne, &currency),
                        description: format!("{} margin", format::percent(result.margin_percent)),
                        tone: theme::signed_text(result.profit_per_tonne),
                    }
                }

                MarginIndicator { indicator }

                div { class: "grid gap-6 xl:grid-cols-2",
                    section { class: "{theme::PANEL} p-6",
                        h2 { class: theme::SECTION_TITLE, "Cost structure" }
                        div { class: "mt-4",
                            CostDonut { shares, total: result.total_cost, currency: currency.clone() }
                        }
                    }
                    section { class: "{theme::PANEL} p-6",
                        h2 { class: theme::SECTION_TITLE, "Waterfall ({currency}/t)" }
                        div { class: "mt-4", Waterfall { steps } }
                    }
                }

                section { class: "{theme::PANEL} p-6",
                    h2 { class: theme::SECTION_TITLE, "What if diesel gets pricier?" }
                    p { class: "mt-1 text-sm text-slate-400",
                        "Result at ±20% logistics cost; production and overhead held fixed."
                    }
                    div { class: "mt-4", SensitivityChart { rows: sensitivity } }
                }
            }
        }
    }
}

fn write_input(mut state: Signal<AppState>, next: CalculationInput) {
    state.with_mut(|st| st.input = next);
}

#[component]
fn ParameterGroup(title: &'static str, children: Element) -> Element {
    rsx! {
        section { class: "{theme::PANEL} space-y-4 p-4",
            h2 { class: theme::SECTION_TITLE, "{title}" }
            {children}
        }
    }
}
