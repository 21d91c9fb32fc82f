use dioxus::prelude::*;

use crate::domain::{
    freight_band_label, EXTRAPOLATION_BASE_KM, EXTRAPOLATION_BASE_PRICE,
    EXTRAPOLATION_PRICE_PER_KM, FREIGHT_TIERS,
};
use crate::ui::theme;
use crate::util::format;

/// Haulier price list with the band for `distance_km` highlighted.
#[component]
pub fn FreightTable(distance_km: f64, currency: String) -> Element {
    let active_band = freight_band_label(distance_km);
    let mut rows = FREIGHT_TIERS
        .iter()
        .map(|tier| {
            (
                freight_band_label(tier.max_distance_km),
                format::money(tier.price_per_trip, &currency),
            )
        })
        .collect::<Vec<_>>();
    if let Some(last) = FREIGHT_TIERS.last() {
        rows.push((
            format!("> {:.0} km", last.max_distance_km),
            format!(
                "{} + {:.2} per km beyond {:.0} km",
                format::money(EXTRAPOLATION_BASE_PRICE, &currency),
                EXTRAPOLATION_PRICE_PER_KM,
                EXTRAPOLATION_BASE_KM,
            ),
        ));
    }

    rsx! {
        div {
            class: theme::TABLE_CONTAINER,
            table {
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: "{theme::TABLE_HEADER} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Distance" }
                        th { class: "px-4 py-3 font-medium text-right", "Suggested price per trip" }
                    }
                }
                tbody {
                    class: theme::TABLE_DIVIDER,
                    for (band, price) in rows {
                        tr {
                            key: "{band}",
                            class: if band == active_band { "bg-emerald-500/10" } else { "" },
                            td { class: "px-4 py-3 text-slate-300", "{band}" }
                            td { class: "px-4 py-3 text-right tabular-nums text-slate-300", "{price}" }
                        }
                    }
                }
            }
        }
    }
}
