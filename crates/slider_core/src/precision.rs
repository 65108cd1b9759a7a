//! Decimal precision helpers.
//!
//! Precision is the number of digits after the decimal point in the shortest
//! decimal representation of a number. Rust's `Display` for `f64` already
//! produces the shortest round-tripping form and never switches to exponent
//! notation, so counting fraction digits of `to_string()` is exact.

use crate::error::ConfigError;

/// Upper bound for derived precision. Steps needing more digits are rounded.
pub const MAX_PRECISION: u32 = 4;

/// Upper bound for the digits kept on normalized values. Beyond this `f64`
/// has no exact fraction digits left to keep.
pub const MAX_VALUE_PRECISION: u32 = 15;

/// Number of fraction digits in the shortest decimal form of `num`.
pub fn decimal_digits(num: f64) -> u32 {
    let repr = num.to_string();
    repr.split_once('.')
        .map(|(_, frac)| frac.len() as u32)
        .unwrap_or(0)
}

/// Round `num` to `precision` fraction digits.
pub fn round_to(num: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let rounded = (num * factor).round() / factor;
    // Avoid leaking `-0` into display strings.
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// A step together with the precision derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepPrecision {
    pub step: f64,
    pub precision: u32,
}

/// Derive the precision of `step`, capping it at [`MAX_PRECISION`].
///
/// When the step needs more digits than allowed it is rounded to
/// `MAX_PRECISION` digits first, and the precision is recomputed from the
/// rounded step (so `0.10000001` becomes `0.1` with precision 1).
pub fn derive_precision(step: f64) -> Result<StepPrecision, ConfigError> {
    if !step.is_finite() {
        return Err(ConfigError::NonNumericStep);
    }

    let precision = decimal_digits(step);
    if precision <= MAX_PRECISION {
        return Ok(StepPrecision { step, precision });
    }

    let rounded = round_to(step, MAX_PRECISION);
    if rounded <= 0.0 {
        return Err(ConfigError::StepTooSmall(step));
    }

    Ok(StepPrecision {
        step: rounded,
        precision: decimal_digits(rounded),
    })
}

/// Shortest decimal text for a value, as shown in tooltips and attributes.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_fraction_digits() {
        assert_eq!(decimal_digits(10.0), 0);
        assert_eq!(decimal_digits(0.5), 1);
        assert_eq!(decimal_digits(0.25), 2);
        assert_eq!(decimal_digits(1e-7), 7);
        assert_eq!(decimal_digits(-1.125), 3);
    }

    #[test]
    fn long_step_is_rounded_to_four_digits() {
        let sp = derive_precision(0.12345678).unwrap();
        assert_eq!(sp.step, 0.1235);
        assert_eq!(sp.precision, 4);
    }

    #[test]
    fn precision_is_recomputed_after_rounding() {
        let sp = derive_precision(0.10000001).unwrap();
        assert_eq!(sp.step, 0.1);
        assert_eq!(sp.precision, 1);
    }

    #[test]
    fn short_step_keeps_its_precision() {
        let sp = derive_precision(0.05).unwrap();
        assert_eq!(sp.step, 0.05);
        assert_eq!(sp.precision, 2);
    }

    #[test]
    fn non_numeric_step_is_rejected() {
        assert_eq!(derive_precision(f64::NAN), Err(ConfigError::NonNumericStep));
        assert_eq!(
            derive_precision(f64::INFINITY),
            Err(ConfigError::NonNumericStep)
        );
    }

    #[test]
    fn vanishing_step_is_rejected() {
        assert_eq!(
            derive_precision(0.00001),
            Err(ConfigError::StepTooSmall(0.00001))
        );
    }

    #[test]
    fn round_to_never_returns_negative_zero() {
        let v = round_to(-0.00001, 2);
        assert!(v.is_sign_positive());
        assert_eq!(format_value(v), "0");
    }

    #[test]
    fn format_uses_shortest_form() {
        assert_eq!(format_value(50.0), "50");
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(-2.25), "-2.25");
    }
}
