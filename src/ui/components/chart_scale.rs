//! Geometry helpers shared by the SVG charts.

use std::f64::consts::PI;

/// Linear map from values to SVG y coordinates. The domain always includes 0 so bars
/// have a baseline to grow from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    min: f64,
    max: f64,
    top: f64,
    height: f64,
}

impl ValueScale {
    pub fn new(values: impl IntoIterator<Item = f64>, top: f64, height: f64) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold((0.0_f64, 0.0_f64), |(min, max), value| (min.min(value), max.max(value)));
        // A flat domain would divide by zero.
        let max = if max - min < f64::EPSILON { min + 1.0 } else { max };
        Self {
            min,
            max,
            top,
            height,
        }
    }

    pub fn y(&self, value: f64) -> f64 {
        self.top + (self.max - value) / (self.max - self.min) * self.height
    }

    /// Top edge and height of a bar spanning two values, in either order.
    pub fn span(&self, a: f64, b: f64) -> (f64, f64) {
        let (ya, yb) = (self.y(a), self.y(b));
        (ya.min(yb), (ya - yb).abs().max(1.0))
    }
}

/// `stroke-dasharray` and `stroke-dashoffset` for donut segments drawn as stroked
/// circles, in input order, starting at 12 o'clock once the circle is rotated -90°.
pub fn donut_segments(fractions: &[f64], radius: f64) -> Vec<(String, String)> {
    let circumference = 2.0 * PI * radius;
    let mut offset = 0.0;
    fractions
        .iter()
        .map(|fraction| {
            let length = fraction.clamp(0.0, 1.0) * circumference;
            let dash = format!("{length:.3} {:.3}", circumference - length);
            let dash_offset = format!("{:.3}", 0.0 - offset);
            offset += length;
            (dash, dash_offset)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scale_includes_zero_baseline() {
        let scale = ValueScale::new([10.0, 40.0], 0.0, 100.0);
        assert_eq!(scale.y(40.0), 0.0);
        assert_eq!(scale.y(0.0), 100.0);
    }

    #[test]
    fn scale_handles_negative_values() {
        let scale = ValueScale::new([45.0, -5.0], 10.0, 100.0);
        assert_eq!(scale.y(45.0), 10.0);
        assert_eq!(scale.y(-5.0), 110.0);
        assert_eq!(scale.span(0.0, -5.0), (scale.y(0.0), 10.0));
    }

    #[test]
    fn flat_domain_does_not_divide_by_zero() {
        let scale = ValueScale::new([0.0, 0.0], 0.0, 50.0);
        assert!(scale.y(0.0).is_finite());
    }

    #[test]
    fn donut_offsets_accumulate() {
        let segments = donut_segments(&[0.25, 0.75], 10.0);
        let circumference = 2.0 * PI * 10.0;
        assert_eq!(segments[0].1, "0.000");
        assert_eq!(segments[1].1, format!("{:.3}", -circumference * 0.25));
    }
}
