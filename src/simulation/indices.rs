//! Derived indices computed from other indicators

/// GDP per capita (in thousands) at and above which the finance index saturates
pub const FINANCE_SATURATION_KGDP: f64 = 70.0;

/// Finance index from PPP GDP per capita.
///
/// Calibrated so that 40k lands near 8. The polynomial is negative below
/// roughly 1k; the bounds policy clamps the stored value to [0, 10], this
/// function does not. Negative GDP yields NaN.
pub fn finance_index(gdp_capita: f64) -> f64 {
    let x = gdp_capita / 1000.0;
    if x >= FINANCE_SATURATION_KGDP {
        return 10.0;
    }

    8e-7 * x.powf(4.1) - 7.8e-6 * x.powf(3.5) - 5e-3 * x.powf(2.3) + 1.6e-2 * x.powi(2)
        + 0.175 * x
        - 0.17
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_gdp_is_constant_term() {
        assert_eq!(finance_index(0.0), -0.17);
    }

    #[test]
    fn test_saturates_from_70k() {
        assert_eq!(finance_index(70_000.0), 10.0);
        assert_eq!(finance_index(70_001.0), 10.0);
        assert_eq!(finance_index(1e12), 10.0);
    }

    #[test]
    fn test_40k_is_about_8() {
        let value = finance_index(40_000.0);
        assert!((value - 8.0).abs() <= 0.5, "finance_index(40000) = {}", value);
    }

    #[test]
    fn test_increasing_over_realistic_range() {
        let mut previous = finance_index(827.0);
        for gdp in (1_000..70_000).step_by(500) {
            let value = finance_index(gdp as f64);
            assert!(value > previous, "not increasing at {}", gdp);
            previous = value;
        }
    }

    #[test]
    fn test_stays_below_saturation_just_under_threshold() {
        let value = finance_index(69_999.0);
        assert!(value > 9.0 && value < 10.0, "finance_index(69999) = {}", value);
    }
}
