use serde::{Deserialize, Serialize};

use super::freight::suggested_freight_price;

/// Unit the annual material quantity is entered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialUnit {
    /// Cubic metres (bulk volume).
    #[default]
    Volume,
    /// Tonnes.
    Mass,
}

impl MaterialUnit {
    pub const ALL: [MaterialUnit; 2] = [MaterialUnit::Volume, MaterialUnit::Mass];

    pub fn symbol(&self) -> &'static str {
        match self {
            MaterialUnit::Volume => "m³",
            MaterialUnit::Mass => "t",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MaterialUnit::Volume => "volume",
            MaterialUnit::Mass => "mass",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.key() == key)
    }
}

/// Parameters of one evaluation. Never mutated in place by the calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Annual material amount, in `unit`.
    pub quantity: f64,
    pub unit: MaterialUnit,
    /// Tonnes per cubic metre.
    pub density_factor: f64,
    /// Tonnes per truck trip.
    pub truck_payload: f64,
    pub distance_km: f64,
    pub freight_price_per_trip: f64,
    /// Cubic metres shredded per machine hour.
    pub throughput_per_hour: f64,
    pub machine_rate_per_hour: f64,
    /// Overhead (VAK) surcharge on pre-overhead cost, in percent.
    pub overhead_percent: f64,
    pub sale_price_per_tonne: f64,
}

impl Default for CalculationInput {
    fn default() -> Self {
        let distance_km = 40.0;
        Self {
            quantity: 1000.0,
            unit: MaterialUnit::Volume,
            density_factor: 0.233,
            truck_payload: 20.0,
            distance_km,
            freight_price_per_trip: suggested_freight_price(distance_km),
            throughput_per_hour: 20.5,
            machine_rate_per_hour: 180.0,
            overhead_percent: 12.0,
            sale_price_per_tonne: 45.0,
        }
    }
}

impl CalculationInput {
    /// Moves the haul distance and resets the freight price to the tier suggestion
    /// for the new distance. A manual freight price must be set afterwards.
    pub fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance_km = distance_km;
        self.freight_price_per_trip = suggested_freight_price(distance_km);
        self
    }

    /// True when the freight price differs from the suggestion for the current distance.
    pub fn freight_price_overridden(&self) -> bool {
        (self.freight_price_per_trip - suggested_freight_price(self.distance_km)).abs() > 1e-9
    }
}

/// Full cost breakdown for one `CalculationInput`.
///
/// Totals are absolute amounts for the whole annual quantity; `*_per_tonne` fields are
/// those totals divided by `total_mass`, or 0 when there is no mass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_mass: f64,
    pub total_volume: f64,

    pub trip_count: f64,
    pub logistics_cost_total: f64,
    pub logistics_cost_per_tonne: f64,

    pub hours_needed: f64,
    pub production_cost_total: f64,
    pub production_cost_per_tonne: f64,

    pub cost_before_overhead: f64,
    pub cost_before_overhead_per_tonne: f64,
    pub overhead_cost: f64,
    pub overhead_cost_per_tonne: f64,
    pub total_cost: f64,
    pub cost_per_tonne: f64,

    pub sale_price_per_tonne: f64,
    pub revenue_total: f64,
    pub profit_total: f64,
    pub profit_per_tonne: f64,
    pub margin_percent: f64,
}

/// One row of the logistics-cost sensitivity table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRow {
    pub factor: f64,
    /// Signed whole-percent change, e.g. `-20%` or `+10%`.
    pub label: String,
    pub scaled_logistics_cost: f64,
    pub scaled_profit: f64,
    /// `scaled_profit` minus the unscaled profit.
    pub profit_delta: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_uses_freight_suggestion_for_40_km() {
        let input = CalculationInput::default();
        assert_eq!(input.distance_km, 40.0);
        assert_eq!(input.freight_price_per_trip, 153.04);
        assert!(!input.freight_price_overridden());
    }

    #[test]
    fn with_distance_resets_freight_override() {
        let mut input = CalculationInput::default();
        input.freight_price_per_trip = 200.0;
        assert!(input.freight_price_overridden());

        let moved = input.with_distance(15.0);
        assert_eq!(moved.freight_price_per_trip, 124.52);
        assert!(!moved.freight_price_overridden());
    }

    #[test]
    fn unit_keys_round_trip() {
        for unit in MaterialUnit::ALL {
            assert_eq!(MaterialUnit::from_key(unit.key()), Some(unit));
        }
        assert_eq!(MaterialUnit::from_key("litres"), None);
    }

    #[test]
    fn unit_serializes_lowercase() {
        let json = serde_json::to_string(&MaterialUnit::Mass).unwrap();
        assert_eq!(json, "\"mass\"");
    }
}
