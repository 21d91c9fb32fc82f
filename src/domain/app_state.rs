use std::path::PathBuf;

use thiserror::Error;

use super::entities::CalculationInput;

/// Session state shared through the Dioxus context. Only the current inputs live here;
/// results are recomputed from them on every render.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub input: CalculationInput,
    /// Inputs the session started with (built-ins plus config overrides).
    pub baseline: CalculationInput,
    pub currency: String,
    pub config: ConfigStatus,
}

impl AppState {
    pub fn new(baseline: CalculationInput, currency: String, config: ConfigStatus) -> Self {
        Self {
            input: baseline.clone(),
            baseline,
            currency,
            config,
        }
    }

    pub fn reset_input(&mut self) {
        self.input = self.baseline.clone();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            CalculationInput::default(),
            DEFAULT_CURRENCY.to_string(),
            ConfigStatus::BuiltIn,
        )
    }
}

pub const DEFAULT_CURRENCY: &str = "€";

/// Where the session defaults came from.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigStatus {
    BuiltIn,
    Loaded(PathBuf),
    /// A config file exists but could not be used.
    Failed { path: PathBuf, message: String },
}

/// Numeric sidebar parameters. The unit selector is handled separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterField {
    Quantity,
    DensityFactor,
    TruckPayload,
    DistanceKm,
    FreightPricePerTrip,
    ThroughputPerHour,
    MachineRatePerHour,
    OverheadPercent,
    SalePricePerTonne,
}

impl ParameterField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Quantity => "Annual quantity",
            Self::DensityFactor => "Density factor (t/m³)",
            Self::TruckPayload => "Avg. truck payload (t)",
            Self::DistanceKm => "Distance to processor (km)",
            Self::FreightPricePerTrip => "Freight price per trip",
            Self::ThroughputPerHour => "Shredder throughput (m³/h)",
            Self::MachineRatePerHour => "Machine rate (per h)",
            Self::OverheadPercent => "Overhead VAK (%)",
            Self::SalePricePerTonne => "Sale price (per t)",
        }
    }

    /// Decimal places shown in the input box.
    pub fn precision(&self) -> usize {
        match self {
            Self::DensityFactor => 3,
            Self::DistanceKm => 0,
            _ => 2,
        }
    }

    pub fn read(&self, input: &CalculationInput) -> f64 {
        match self {
            Self::Quantity => input.quantity,
            Self::DensityFactor => input.density_factor,
            Self::TruckPayload => input.truck_payload,
            Self::DistanceKm => input.distance_km,
            Self::FreightPricePerTrip => input.freight_price_per_trip,
            Self::ThroughputPerHour => input.throughput_per_hour,
            Self::MachineRatePerHour => input.machine_rate_per_hour,
            Self::OverheadPercent => input.overhead_percent,
            Self::SalePricePerTonne => input.sale_price_per_tonne,
        }
    }

    /// Writes a value into a copy of `input`. Setting the distance re-suggests the
    /// freight price.
    pub fn apply(&self, input: &CalculationInput, value: f64) -> CalculationInput {
        let mut next = input.clone();
        match self {
            Self::Quantity => next.quantity = value,
            Self::DensityFactor => next.density_factor = value,
            Self::TruckPayload => next.truck_payload = value,
            Self::DistanceKm => return next.with_distance(value),
            Self::FreightPricePerTrip => next.freight_price_per_trip = value,
            Self::ThroughputPerHour => next.throughput_per_hour = value,
            Self::MachineRatePerHour => next.machine_rate_per_hour = value,
            Self::OverheadPercent => next.overhead_percent = value,
            Self::SalePricePerTonne => next.sale_price_per_tonne = value,
        }
        next
    }

    pub fn format(&self, input: &CalculationInput) -> String {
        format!("{:.*}", self.precision(), self.read(input))
    }

    /// Parses user text. A decimal comma is accepted; only finite numbers pass.
    pub fn parse(&self, raw: &str) -> Result<f64, ParameterError> {
        let normalized = raw.trim().replace(',', ".");
        match normalized.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ParameterError::NotANumber {
                field: self.label(),
                raw: raw.trim().to_string(),
            }),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("{field} must be a number (got \"{raw}\")")]
    NotANumber { field: &'static str, raw: String },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_decimal_comma_and_whitespace() {
        assert_eq!(ParameterField::ThroughputPerHour.parse(" 20,5 "), Ok(20.5));
        assert_eq!(ParameterField::DensityFactor.parse("0.233"), Ok(0.233));
        assert_eq!(ParameterField::SalePricePerTonne.parse("-12"), Ok(-12.0));
    }

    #[test]
    fn parse_rejects_garbage_and_non_finite() {
        for raw in ["abc", "", "NaN", "inf", "1.2.3"] {
            assert!(ParameterField::Quantity.parse(raw).is_err(), "{raw} parsed");
        }
        let err = ParameterField::Quantity.parse("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Annual quantity must be a number (got \"abc\")"
        );
    }

    #[test]
    fn apply_distance_resets_freight_suggestion() {
        let input = ParameterField::FreightPricePerTrip.apply(&CalculationInput::default(), 999.0);
        assert_eq!(input.freight_price_per_trip, 999.0);

        let moved = ParameterField::DistanceKm.apply(&input, 60.0);
        assert_eq!(moved.distance_km, 60.0);
        assert!((moved.freight_price_per_trip - 203.04).abs() < 1e-9);
    }

    #[test]
    fn apply_then_read_returns_value() {
        let fields = [
            ParameterField::Quantity,
            ParameterField::DensityFactor,
            ParameterField::TruckPayload,
            ParameterField::ThroughputPerHour,
            ParameterField::MachineRatePerHour,
            ParameterField::OverheadPercent,
            ParameterField::SalePricePerTonne,
        ];
        for field in fields {
            let input = field.apply(&CalculationInput::default(), 7.25);
            assert_eq!(field.read(&input), 7.25, "{field:?}");
        }
    }

    #[test]
    fn reset_restores_baseline() {
        let mut state = AppState::default();
        state.input = ParameterField::Quantity.apply(&state.input, 5.0);
        state.reset_input();
        assert_eq!(state.input, CalculationInput::default());
    }

    #[test]
    fn format_uses_field_precision() {
        let input = CalculationInput::default();
        assert_eq!(ParameterField::DensityFactor.format(&input), "0.233");
        assert_eq!(ParameterField::DistanceKm.format(&input), "40");
        assert_eq!(ParameterField::FreightPricePerTrip.format(&input), "153.04");
    }
}
