//! The single choke point for slider values.

use crate::config::SliderConfig;
use crate::precision::round_to;

/// Clamp, quantize and round `raw` so it satisfies the slider invariants.
///
/// The result lies in `[min, max]`, sits on the `min + k * step` grid and
/// carries at most `value_precision` fraction digits. NaN maps to `min`.
pub fn normalize(raw: f64, config: &SliderConfig) -> f64 {
    let min = config.min();
    let max = config.max();

    let clamped = if raw.is_nan() { min } else { raw.clamp(min, max) };

    let steps = ((clamped - min) / config.step()).round();
    let mut value = grid_point(steps, config);

    // Rounding to the nearest step may overshoot an off-grid max.
    if value > max {
        value = grid_point(steps - 1.0, config);
    }

    // Only reachable when min/max themselves are off the precision grid.
    value.clamp(min, max)
}

/// `min + steps * step`. The offset is rounded at the step's precision
/// before `min` is added back, so the grid stays anchored at `min`.
fn grid_point(steps: f64, config: &SliderConfig) -> f64 {
    let offset = round_to(steps * config.step(), config.precision());
    round_to(config.min() + offset, config.value_precision())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::decimal_digits;
    use proptest::prelude::*;

    fn cfg(min: f64, max: f64, step: f64) -> SliderConfig {
        SliderConfig::new(min, max, step).unwrap()
    }

    #[test]
    fn clamps_and_snaps_to_step() {
        let c = cfg(0.0, 100.0, 10.0);
        assert_eq!(normalize(105.0, &c), 100.0);
        assert_eq!(normalize(-5.0, &c), 0.0);
        assert_eq!(normalize(47.0, &c), 50.0);
        assert_eq!(normalize(44.9, &c), 40.0);
    }

    #[test]
    fn off_grid_max_snaps_down() {
        let c = cfg(0.0, 0.36, 0.1);
        assert_eq!(normalize(0.36, &c), 0.3);
        assert_eq!(normalize(10.0, &c), 0.3);
    }

    #[test]
    fn float_drift_does_not_pull_max_down() {
        // 3 * 0.1 == 0.30000000000000004 before precision rounding.
        let c = cfg(0.0, 0.3, 0.1);
        assert_eq!(normalize(0.3, &c), 0.3);
        assert_eq!(normalize(0.29, &c), 0.3);
    }

    #[test]
    fn grid_is_anchored_at_min() {
        let c = cfg(3.0, 20.0, 5.0);
        assert_eq!(normalize(3.0, &c), 3.0);
        assert_eq!(normalize(6.0, &c), 8.0);
        assert_eq!(normalize(19.0, &c), 18.0);
    }

    #[test]
    fn negative_ranges() {
        let c = cfg(-1.0, 1.0, 0.25);
        assert_eq!(normalize(-0.9, &c), -1.0);
        assert_eq!(normalize(-0.1, &c), 0.0);
        assert_eq!(normalize(0.6, &c), 0.5);
    }

    #[test]
    fn fractional_min_keeps_grid_anchored() {
        let c = cfg(0.5, 10.5, 1.0);
        assert_eq!(c.value_precision(), 1);
        assert_eq!(normalize(0.5, &c), 0.5);
        assert_eq!(normalize(3.5, &c), 3.5);
        assert_eq!(normalize(3.9, &c), 3.5);
        assert_eq!(normalize(4.1, &c), 4.5);
        assert_eq!(normalize(99.0, &c), 10.5);
    }

    #[test]
    fn min_with_more_digits_than_step() {
        let c = cfg(0.05, 1.0, 0.1);
        assert_eq!(normalize(0.05, &c), 0.05);
        assert_eq!(normalize(0.15, &c), 0.15);
        assert_eq!(normalize(0.31, &c), 0.35);
        // 1.05 would overshoot max.
        assert_eq!(normalize(1.0, &c), 0.95);
    }

    #[test]
    fn nan_maps_to_min() {
        let c = cfg(2.0, 4.0, 1.0);
        assert_eq!(normalize(f64::NAN, &c), 2.0);
    }

    #[test]
    fn infinities_clamp() {
        let c = cfg(0.0, 1.0, 0.1);
        assert_eq!(normalize(f64::INFINITY, &c), 1.0);
        assert_eq!(normalize(f64::NEG_INFINITY, &c), 0.0);
    }

    fn arb_config() -> impl Strategy<Value = SliderConfig> {
        (
            // Hundredths, so min often has more digits than step.
            -100_000i32..100_000,
            prop::sample::select(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0]),
            1u32..500,
            0.0f64..0.9,
        )
            .prop_map(|(hundredths, step, steps, extra)| {
                let min = round_to(f64::from(hundredths) / 100.0, 2);
                let digits = decimal_digits(step).max(decimal_digits(min));
                let grid_max = round_to(min + f64::from(steps) * step, digits);
                // Max is not necessarily on the step grid.
                let max = grid_max + extra * step;
                SliderConfig::new(min, max, step).unwrap()
            })
    }

    proptest! {
        #[test]
        fn output_is_in_range_and_on_grid(c in arb_config(), raw in -5000.0f64..5000.0) {
            let v = normalize(raw, &c);
            prop_assert!(v >= c.min() && v <= c.max());
            let k = (v - c.min()) / c.step();
            prop_assert!((k - k.round()).abs() < 1e-6, "k = {k}");
        }

        #[test]
        fn normalize_is_idempotent(c in arb_config(), raw in -5000.0f64..5000.0) {
            let once = normalize(raw, &c);
            prop_assert_eq!(normalize(once, &c), once);
        }

        #[test]
        fn above_max_gives_largest_grid_value(c in arb_config(), extra in 0.0f64..1000.0) {
            let v = normalize(c.max() + extra, &c);
            prop_assert!(v <= c.max());
            prop_assert!(v + c.step() > c.max() + 1e-9);
        }
    }
}
