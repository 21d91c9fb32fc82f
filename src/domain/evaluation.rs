use tracing::debug;

use super::entities::{CalculationInput, CalculationResult, MaterialUnit};

/// Divides, yielding 0 unless the divisor is strictly positive.
pub(crate) fn guarded_div(numerator: f64, divisor: f64) -> f64 {
    if divisor > 0.0 {
        numerator / divisor
    } else {
        0.0
    }
}

/// Total mass (t) and volume (m³) of the annual quantity.
///
/// A non-positive density factor with a mass quantity gives a volume of 0.
pub fn normalize_quantity(quantity: f64, unit: MaterialUnit, density_factor: f64) -> (f64, f64) {
    match unit {
        MaterialUnit::Volume => (quantity * density_factor, quantity),
        MaterialUnit::Mass => (quantity, guarded_div(quantity, density_factor)),
    }
}

/// Runs the full cost chain for one set of parameters.
///
/// The chain is: haulage from trip count and freight price, shredding from machine
/// hours, overhead as a percentage of both, then revenue and profit. Every division by
/// a zero or negative figure yields 0, so the result never holds NaN or infinity for
/// finite inputs.
pub fn evaluate(input: &CalculationInput) -> CalculationResult {
    let (total_mass, total_volume) =
        normalize_quantity(input.quantity, input.unit, input.density_factor);
    let per_tonne = |amount: f64| guarded_div(amount, total_mass);

    let trip_count = guarded_div(total_mass, input.truck_payload);
    let logistics_cost_total = trip_count * input.freight_price_per_trip;

    let hours_needed = guarded_div(total_volume, input.throughput_per_hour);
    let production_cost_total = hours_needed * input.machine_rate_per_hour;

    let cost_before_overhead = logistics_cost_total + production_cost_total;
    let overhead_cost = cost_before_overhead * (input.overhead_percent / 100.0);
    let total_cost = cost_before_overhead + overhead_cost;

    let revenue_total = total_mass * input.sale_price_per_tonne;
    let profit_total = revenue_total - total_cost;
    let margin_percent = if revenue_total > 0.0 {
        profit_total / revenue_total * 100.0
    } else {
        0.0
    };

    debug!(
        total_mass,
        trip_count, hours_needed, total_cost, profit_total, "evaluated cost chain"
    );

    CalculationResult {
        total_mass,
        total_volume,
        trip_count,
        logistics_cost_total,
        logistics_cost_per_tonne: per_tonne(logistics_cost_total),
        hours_needed,
        production_cost_total,
        production_cost_per_tonne: per_tonne(production_cost_total),
        cost_before_overhead,
        cost_before_overhead_per_tonne: per_tonne(cost_before_overhead),
        overhead_cost,
        overhead_cost_per_tonne: per_tonne(overhead_cost),
        total_cost,
        cost_per_tonne: per_tonne(total_cost),
        sale_price_per_tonne: input.sale_price_per_tonne,
        revenue_total,
        profit_total,
        profit_per_tonne: per_tonne(profit_total),
        margin_percent,
    }
}

/// Margin at or above which a scenario counts as healthy.
pub const HEALTHY_MARGIN_PERCENT: f64 = 10.0;

pub fn margin_indicator(result: &CalculationResult) -> MarginIndicator {
    if result.revenue_total <= 0.0 {
        return MarginIndicator {
            status: MarginStatus::Loss,
            margin_percent: result.margin_percent,
            rationale: "No revenue at the current sale price".to_string(),
        };
    }

    let status = if result.margin_percent >= HEALTHY_MARGIN_PERCENT {
        MarginStatus::Healthy
    } else if result.margin_percent >= 0.0 {
        MarginStatus::Watch
    } else {
        MarginStatus::Loss
    };

    let rationale = format!(
        "Revenue {:.0} - cost {:.0} = {:.0}",
        result.revenue_total, result.total_cost, result.profit_total
    );

    MarginIndicator {
        status,
        margin_percent: result.margin_percent,
        rationale,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarginIndicator {
    pub status: MarginStatus,
    pub margin_percent: f64,
    pub rationale: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarginStatus {
    Healthy,
    Watch,
    Loss,
}

impl MarginStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MarginStatus::Healthy => "Healthy",
            MarginStatus::Watch => "Watch",
            MarginStatus::Loss => "Loss",
        }
    }
}
