//! What-if analysis on haulage cost (e.g. a diesel price swing).

use super::entities::{CalculationResult, SensitivityRow};

/// Logistics cost multipliers, ascending.
pub const SENSITIVITY_FACTORS: [f64; 5] = [0.8, 0.9, 1.0, 1.1, 1.2];

pub fn sensitivity_analysis(result: &CalculationResult) -> Vec<SensitivityRow> {
    sensitivity_analysis_with(result, &SENSITIVITY_FACTORS)
}

/// Scales only the logistics cost. Production and overhead keep their computed values;
/// the overhead is not re-derived from the scaled haulage. Rows come back sorted by
/// factor.
pub fn sensitivity_analysis_with(result: &CalculationResult, factors: &[f64]) -> Vec<SensitivityRow> {
    let mut factors = factors.to_vec();
    factors.sort_by(|a, b| a.total_cmp(b));

    factors
        .into_iter()
        .map(|factor| {
            let scaled_logistics_cost = result.logistics_cost_total * factor;
            let scaled_profit = result.revenue_total
                - (scaled_logistics_cost + result.production_cost_total + result.overhead_cost);
            SensitivityRow {
                factor,
                label: factor_label(factor),
                scaled_logistics_cost,
                scaled_profit,
                profit_delta: scaled_profit - result.profit_total,
            }
        })
        .collect()
}

/// `0.8` -> `-20%`, `1.0` -> `0%`, `1.1` -> `+10%`.
pub fn factor_label(factor: f64) -> String {
    let percent = ((factor - 1.0) * 100.0).round() as i64;
    if percent > 0 {
        format!("+{percent}%")
    } else {
        format!("{percent}%")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{evaluate, CalculationInput};

    #[test]
    fn labels_are_rounded_and_signed() {
        let labels: Vec<_> = SENSITIVITY_FACTORS.iter().map(|f| factor_label(*f)).collect();
        assert_eq!(labels, vec!["-20%", "-10%", "0%", "+10%", "+20%"]);
    }

    #[test]
    fn unit_factor_reproduces_baseline_profit() {
        let result = evaluate(&CalculationInput::default());
        let rows = sensitivity_analysis(&result);

        let baseline = rows.iter().find(|row| row.factor == 1.0).unwrap();
        assert_eq!(baseline.scaled_profit, result.profit_total);
        assert_eq!(baseline.scaled_logistics_cost, result.logistics_cost_total);
        assert_eq!(baseline.profit_delta, 0.0);
    }

    #[test]
    fn scaling_touches_logistics_only() {
        let result = evaluate(&CalculationInput::default());
        let rows = sensitivity_analysis(&result);

        let top = rows.last().unwrap();
        assert_eq!(top.factor, 1.2);
        assert_eq!(top.scaled_logistics_cost, result.logistics_cost_total * 1.2);

        // Overhead held fixed: the profit drop is exactly the extra haulage.
        let extra_haulage = top.scaled_logistics_cost - result.logistics_cost_total;
        assert!((top.profit_delta + extra_haulage).abs() < 1e-9);
    }

    #[test]
    fn rows_are_ordered_by_factor_and_profit_falls() {
        let result = evaluate(&CalculationInput::default());
        let rows = sensitivity_analysis_with(&result, &[1.2, 0.8, 1.0]);

        let factors: Vec<_> = rows.iter().map(|row| row.factor).collect();
        assert_eq!(factors, vec![0.8, 1.0, 1.2]);
        assert!(rows.windows(2).all(|pair| pair[0].scaled_profit > pair[1].scaled_profit));
    }

    #[test]
    fn zero_logistics_cost_makes_rows_flat() {
        let result = evaluate(&CalculationInput {
            truck_payload: 0.0,
            ..CalculationInput::default()
        });
        for row in sensitivity_analysis(&result) {
            assert_eq!(row.scaled_logistics_cost, 0.0);
            assert_eq!(row.scaled_profit, result.profit_total);
        }
    }
}
