//! Exact arithmetic used throughout the solver and ranking layers.
//!
//! Voltages and resistances are compared for exact equality, so every
//! computation stays in arbitrary-precision rationals. Floats appear only
//! in display formatting, never in ordering decisions.

use num_bigint::BigInt;

/// Exact rational type used throughout the system.
pub type Rational = num_rational::BigRational;

/// Build a rational `n / d`.
pub fn ratio(n: i64, d: i64) -> Rational {
    Rational::new(BigInt::from(n), BigInt::from(d))
}

/// Build a whole-number rational.
pub fn whole(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_reduces() {
        assert_eq!(ratio(2, 4), ratio(1, 2));
        assert_eq!(ratio(5, 1), whole(5));
    }

    #[test]
    fn exact_comparison() {
        // 1/3 + 1/3 + 1/3 is exactly one, which no float can promise.
        let third = ratio(1, 3);
        assert_eq!(&third + &third + &third, whole(1));
    }
}
