use dioxus::prelude::*;

use crate::{
    domain::{detail_rows, evaluate, sensitivity_analysis, AppState},
    ui::{
        components::{
            detail_table::DetailTable, freight_table::FreightTable,
            sensitivity_table::SensitivityTable,
        },
        theme,
    },
    util::format,
};

#[component]
pub fn DetailsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let input = state.with(|st| st.input.clone());
    let currency = state.with(|st| st.currency.clone());

    let result = evaluate(&input);
    let rows = detail_rows(&result);
    let sensitivity = sensitivity_analysis(&result);

    rsx! {
        div { class: "space-y-8",
            section { class: "space-y-3",
                h2 { class: theme::SECTION_TITLE, "Detailed calculation" }
                p { class: "text-sm text-slate-400",
                    {format!(
                        "{} trips · {:.1} machine hours · {} per year",
                        format::grouped(result.trip_count, 2),
                        result.hours_needed,
                        format::tonnes(result.total_mass)
                    )}
                }
                DetailTable { rows, currency: currency.clone() }
            }

            section { class: "space-y-3",
                h2 { class: theme::SECTION_TITLE, "Logistics sensitivity" }
                SensitivityTable { rows: sensitivity, currency: currency.clone() }
            }

            section { class: "space-y-3",
                h2 { class: theme::SECTION_TITLE, "Freight price list" }
                FreightTable { distance_km: input.distance_km, currency }
            }
        }
    }
}
