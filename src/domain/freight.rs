//! Freight price suggestion by haul distance.

/// A distance band of the haulier's price list. A band covers every distance up to
/// and including `max_distance_km`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreightTier {
    pub max_distance_km: f64,
    pub price_per_trip: f64,
}

pub const FREIGHT_TIERS: [FreightTier; 5] = [
    FreightTier { max_distance_km: 10.0, price_per_trip: 116.26 },
    FreightTier { max_distance_km: 20.0, price_per_trip: 124.52 },
    FreightTier { max_distance_km: 30.0, price_per_trip: 138.78 },
    FreightTier { max_distance_km: 40.0, price_per_trip: 153.04 },
    FreightTier { max_distance_km: 50.0, price_per_trip: 165.00 },
];

/// Base and slope of the extrapolation past the last band. The line is anchored on
/// the 40 km price, not the 50 km one, and is not capped.
pub const EXTRAPOLATION_BASE_KM: f64 = 40.0;
pub const EXTRAPOLATION_BASE_PRICE: f64 = 153.04;
pub const EXTRAPOLATION_PRICE_PER_KM: f64 = 2.5;

/// Suggested price per truck trip for a haul distance.
pub fn suggested_freight_price(distance_km: f64) -> f64 {
    FREIGHT_TIERS
        .iter()
        .find(|tier| distance_km <= tier.max_distance_km)
        .map(|tier| tier.price_per_trip)
        .unwrap_or_else(|| {
            EXTRAPOLATION_BASE_PRICE
                + (distance_km - EXTRAPOLATION_BASE_KM) * EXTRAPOLATION_PRICE_PER_KM
        })
}

/// Human label for the band a distance falls in, e.g. `"≤ 20 km"` or `"> 50 km"`.
pub fn freight_band_label(distance_km: f64) -> String {
    FREIGHT_TIERS
        .iter()
        .find(|tier| distance_km <= tier.max_distance_km)
        .map(|tier| format!("≤ {:.0} km", tier.max_distance_km))
        .unwrap_or_else(|| format!("> {:.0} km", last_tier_limit()))
}

fn last_tier_limit() -> f64 {
    FREIGHT_TIERS
        .last()
        .map(|tier| tier.max_distance_km)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn band_upper_bounds_are_inclusive() {
        assert_eq!(suggested_freight_price(10.0), 116.26);
        assert_eq!(suggested_freight_price(20.0), 124.52);
        assert_eq!(suggested_freight_price(30.0), 138.78);
        assert_eq!(suggested_freight_price(40.0), 153.04);
        assert_eq!(suggested_freight_price(50.0), 165.00);
    }

    #[test]
    fn just_past_a_boundary_moves_to_next_band() {
        assert_eq!(suggested_freight_price(10.5), 124.52);
        assert_eq!(suggested_freight_price(40.01), 165.00);
    }

    #[test]
    fn short_and_negative_distances_use_first_band() {
        assert_eq!(suggested_freight_price(0.0), 116.26);
        assert_eq!(suggested_freight_price(-5.0), 116.26);
    }

    #[test]
    fn beyond_last_band_extrapolates_from_40_km() {
        assert_close(suggested_freight_price(60.0), 203.04);
        assert_close(suggested_freight_price(100.0), 303.04);
        // Unbounded.
        assert_close(suggested_freight_price(1040.0), 2653.04);
    }

    #[test]
    fn extrapolation_jumps_above_last_band_past_50_km() {
        let price = suggested_freight_price(50.1);
        assert_close(price, 153.04 + 10.1 * 2.5);
        assert!(price > suggested_freight_price(50.0));
    }

    #[test]
    fn band_labels() {
        assert_eq!(freight_band_label(5.0), "≤ 10 km");
        assert_eq!(freight_band_label(40.0), "≤ 40 km");
        assert_eq!(freight_band_label(75.0), "> 50 km");
    }
}
