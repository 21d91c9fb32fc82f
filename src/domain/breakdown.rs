//! Presentation-neutral views of a `CalculationResult` for the dashboard charts and
//! tables. Nothing here computes new business figures.

use super::entities::CalculationResult;
use super::evaluation::guarded_div;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostComponent {
    Logistics,
    Production,
    Overhead,
}

impl CostComponent {
    pub fn label(&self) -> &'static str {
        match self {
            CostComponent::Logistics => "Logistics",
            CostComponent::Production => "Production / machine",
            CostComponent::Overhead => "Overhead (VAK)",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CostShare {
    pub component: CostComponent,
    pub amount: f64,
    /// Percent of total cost, 0 when the total is not positive.
    pub percent: f64,
}

pub fn cost_shares(result: &CalculationResult) -> Vec<CostShare> {
    [
        (CostComponent::Logistics, result.logistics_cost_total),
        (CostComponent::Production, result.production_cost_total),
        (CostComponent::Overhead, result.overhead_cost),
    ]
    .into_iter()
    .map(|(component, amount)| CostShare {
        component,
        amount,
        percent: guarded_div(amount, result.total_cost) * 100.0,
    })
    .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaterfallKind {
    Start,
    Decrease,
    Result,
}

/// One bar of the per-tonne waterfall. `from` and `to` are the running total before and
/// after the bar, so a renderer only has to draw between them.
#[derive(Clone, Debug, PartialEq)]
pub struct WaterfallStep {
    pub label: &'static str,
    pub kind: WaterfallKind,
    pub value: f64,
    pub from: f64,
    pub to: f64,
}

/// Revenue per tonne actually earned: the sale price when there is mass, else 0 like
/// every other per-tonne figure.
fn revenue_per_tonne(result: &CalculationResult) -> f64 {
    guarded_div(result.revenue_total, result.total_mass)
}

/// Revenue per tonne, minus logistics, production and overhead per tonne, down to the
/// profit per tonne.
pub fn waterfall_per_tonne(result: &CalculationResult) -> Vec<WaterfallStep> {
    let start = revenue_per_tonne(result);
    let mut steps = vec![WaterfallStep {
        label: "Sale price",
        kind: WaterfallKind::Start,
        value: start,
        from: 0.0,
        to: start,
    }];

    let mut running = start;
    for (label, cost) in [
        ("Logistics", result.logistics_cost_per_tonne),
        ("Production", result.production_cost_per_tonne),
        ("Overhead", result.overhead_cost_per_tonne),
    ] {
        let next = running - cost;
        steps.push(WaterfallStep {
            label,
            kind: WaterfallKind::Decrease,
            value: cost,
            from: running,
            to: next,
        });
        running = next;
    }

    steps.push(WaterfallStep {
        label: "Profit",
        kind: WaterfallKind::Result,
        value: result.profit_per_tonne,
        from: 0.0,
        to: result.profit_per_tonne,
    });
    steps
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailValue {
    Amount(f64),
    Tonnes(f64),
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailRow {
    pub position: &'static str,
    pub absolute: DetailValue,
    pub per_tonne: DetailValue,
    /// Subtotal rows are rendered emphasised.
    pub subtotal: bool,
}

impl DetailRow {
    fn line(position: &'static str, absolute: f64, per_tonne: f64) -> Self {
        Self {
            position,
            absolute: DetailValue::Amount(absolute),
            per_tonne: DetailValue::Amount(per_tonne),
            subtotal: false,
        }
    }

    fn subtotal(position: &'static str, absolute: f64, per_tonne: f64) -> Self {
        Self {
            subtotal: true,
            ..Self::line(position, absolute, per_tonne)
        }
    }
}

pub fn detail_rows(result: &CalculationResult) -> Vec<DetailRow> {
    vec![
        DetailRow {
            position: "Quantity",
            absolute: DetailValue::Empty,
            per_tonne: DetailValue::Tonnes(result.total_mass),
            subtotal: false,
        },
        DetailRow::line(
            "Logistics",
            result.logistics_cost_total,
            result.logistics_cost_per_tonne,
        ),
        DetailRow::line(
            "Production",
            result.production_cost_total,
            result.production_cost_per_tonne,
        ),
        DetailRow::subtotal(
            "Subtotal",
            result.cost_before_overhead,
            result.cost_before_overhead_per_tonne,
        ),
        DetailRow::line("Overhead (VAK)", result.overhead_cost, result.overhead_cost_per_tonne),
        DetailRow::subtotal("Total cost", result.total_cost, result.cost_per_tonne),
        DetailRow::line("Revenue", result.revenue_total, revenue_per_tonne(result)),
        DetailRow::subtotal("Result", result.profit_total, result.profit_per_tonne),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{evaluate, CalculationInput};

    #[test]
    fn shares_sum_to_hundred_percent() {
        let result = evaluate(&CalculationInput::default());
        let shares = cost_shares(&result);

        let total: f64 = shares.iter().map(|share| share.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(
            shares.iter().map(|share| share.component).collect::<Vec<_>>(),
            vec![
                CostComponent::Logistics,
                CostComponent::Production,
                CostComponent::Overhead
            ]
        );
    }

    #[test]
    fn shares_are_zero_without_cost() {
        let result = evaluate(&CalculationInput {
            quantity: 0.0,
            ..CalculationInput::default()
        });
        assert!(cost_shares(&result).iter().all(|share| share.percent == 0.0));
    }

    #[test]
    fn waterfall_lands_on_profit_per_tonne() {
        let result = evaluate(&CalculationInput::default());
        let steps = waterfall_per_tonne(&result);

        let kinds: Vec<_> = steps.iter().map(|step| step.kind).collect();
        assert_eq!(
            kinds,
            vec![
                WaterfallKind::Start,
                WaterfallKind::Decrease,
                WaterfallKind::Decrease,
                WaterfallKind::Decrease,
                WaterfallKind::Result,
            ]
        );

        let last_decrease = &steps[3];
        assert!((last_decrease.to - result.profit_per_tonne).abs() < 1e-9);
        assert_eq!(steps[4].to, result.profit_per_tonne);
        // Bars chain: each decrease starts where the previous one ended.
        for pair in steps[..4].windows(2) {
            assert_eq!(pair[1].from, pair[0].to);
        }
    }

    #[test]
    fn waterfall_without_mass_starts_and_ends_at_zero() {
        let result = evaluate(&CalculationInput {
            quantity: 0.0,
            ..CalculationInput::default()
        });
        let steps = waterfall_per_tonne(&result);

        let start = steps[0].value;
        let decreases: f64 = steps
            .iter()
            .filter(|step| step.kind == WaterfallKind::Decrease)
            .map(|step| step.value)
            .sum();
        assert_eq!(start, 0.0);
        assert_eq!(start - decreases, result.profit_per_tonne);
        assert_eq!(steps[3].to, steps[4].to);
    }

    #[test]
    fn detail_rows_have_no_per_tonne_figures_without_mass() {
        let result = evaluate(&CalculationInput {
            quantity: 0.0,
            ..CalculationInput::default()
        });
        for row in detail_rows(&result).iter().skip(1) {
            assert_eq!(row.per_tonne, DetailValue::Amount(0.0), "{}", row.position);
        }
    }

    #[test]
    fn detail_rows_reuse_calculated_per_tonne_figures() {
        let result = evaluate(&CalculationInput::default());
        let rows = detail_rows(&result);

        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].per_tonne, DetailValue::Tonnes(result.total_mass));
        let overhead = rows
            .iter()
            .find(|row| row.position == "Overhead (VAK)")
            .unwrap();
        assert_eq!(overhead.per_tonne, DetailValue::Amount(result.overhead_cost_per_tonne));
        let subtotals: Vec<_> = rows
            .iter()
            .filter(|row| row.subtotal)
            .map(|row| row.position)
            .collect();
        assert_eq!(subtotals, vec!["Subtotal", "Total cost", "Result"]);
    }
}
