//! Cost and margin logic for waste wood haulage and shredding. Everything in here is
//! pure; the UI only renders what these functions return.

pub mod app_state;
pub mod breakdown;
pub mod entities;
pub mod evaluation;
pub mod freight;
pub mod sensitivity;

pub use app_state::{AppState, ConfigStatus, ParameterField, DEFAULT_CURRENCY};
pub use breakdown::{
    cost_shares, detail_rows, waterfall_per_tonne, CostComponent, CostShare, DetailRow,
    DetailValue, WaterfallKind, WaterfallStep,
};
pub use entities::{CalculationInput, MaterialUnit, SensitivityRow};
pub use evaluation::{evaluate, margin_indicator, MarginIndicator, MarginStatus};
pub use freight::{
    freight_band_label, suggested_freight_price, EXTRAPOLATION_BASE_KM, EXTRAPOLATION_BASE_PRICE,
    EXTRAPOLATION_PRICE_PER_KM, FREIGHT_TIERS,
};
pub use sensitivity::sensitivity_analysis;
