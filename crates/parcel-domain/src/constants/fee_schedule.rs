//! Fee schedule in dollars, weights in pounds

/// Small standard flat fee
pub const SMALL_STANDARD_FEE: f64 = 3.22;

/// Small standard flat fee for apparel and footwear
pub const SMALL_STANDARD_APPAREL_FEE: f64 = 3.45;

/// Large standard brackets as (inclusive weight ceiling, fee), ascending
pub const LARGE_STANDARD_BRACKETS: [(f64, f64); 5] = [
    (0.5, 3.86),
    (1.0, 4.08),
    (1.5, 4.54),
    (2.0, 5.05),
    (3.0, 5.60),
];

/// Base fee for large standard items above the last bracket
pub const LARGE_STANDARD_HEAVY_BASE: f64 = 6.50;

/// Charge per started half pound above the last bracket
pub const LARGE_STANDARD_HALF_POUND_FEE: f64 = 0.08;

/// Apparel surcharge, applied above the last bracket only
pub const LARGE_STANDARD_APPAREL_SURCHARGE: f64 = 1.00;

pub const OVERSIZE_BASE_FEE: f64 = 15.00;
pub const OVERSIZE_PER_POUND_FEE: f64 = 0.50;

/// Cubic inches per pound of dimensional weight
pub const DIMENSIONAL_WEIGHT_DIVISOR: f64 = 139.0;

/// Savings at or below this amount are not reported
pub const SAVING_EPSILON: f64 = 0.01;

/// Heaviest weight covered by the bracket table
pub fn last_bracket_ceiling() -> f64 {
    LARGE_STANDARD_BRACKETS[LARGE_STANDARD_BRACKETS.len() - 1].0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets_ascending() {
        for pair in LARGE_STANDARD_BRACKETS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 < pair[1].1);
        }
    }

    #[test]
    fn test_last_bracket_ceiling() {
        assert_eq!(last_bracket_ceiling(), 3.0);
    }
}
