use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

/// Prices travel as JSON numbers. Going through the shortest decimal
/// rendering keeps `10.1` as `10.1` instead of its binary expansion.
pub fn decimal_from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}

/// `None` when the decimal has no finite `f64` counterpart.
pub fn try_decimal_to_f64(value: &BigDecimal) -> Option<f64> {
    value.to_f64().filter(|v| v.is_finite())
}

/// Lossy rendering for catalog listings; unrepresentable values are logged
/// and rendered as zero.
pub fn decimal_to_f64(value: &BigDecimal) -> f64 {
    try_decimal_to_f64(value).unwrap_or_else(|| {
        tracing::error!("Decimal {value} cannot be rendered as a JSON number");
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_short_decimal_representation() {
        let decimal = decimal_from_f64(10.1).unwrap();

        assert_eq!(decimal, BigDecimal::from_str("10.1").unwrap());
    }

    #[test]
    fn should_reject_non_finite_values() {
        assert!(decimal_from_f64(f64::NAN).is_none());
        assert!(decimal_from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn should_render_total_as_number() {
        let total = BigDecimal::from_str("32.75").unwrap();

        assert_eq!(decimal_to_f64(&total), 32.75);
    }

    #[test]
    fn should_refuse_totals_outside_float_range() {
        let huge = BigDecimal::from_str("1e400").unwrap();

        assert!(try_decimal_to_f64(&huge).is_none());
        assert_eq!(decimal_to_f64(&huge), 0.0);
    }
}
