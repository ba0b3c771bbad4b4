//! Rational approximations of floats.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::FormatError;

/// Denominator bound used by [`fraction`], [`frac`], and [`mixed`].
pub const DEFAULT_MAX_DENOMINATOR: u64 = 1_000_000;

/// Closest rational to `x` whose denominator does not exceed `max_denominator`.
///
/// Works on the exact binary value of `x` and walks its continued fraction,
/// then picks the nearer of the last convergent and the best semiconvergent.
pub fn limit_denominator(x: f64, max_denominator: u64) -> Result<BigRational, FormatError> {
    if max_denominator == 0 {
        return Err(FormatError::InvalidDenominator);
    }
    let exact = BigRational::from_float(x).ok_or(FormatError::NonFinite(x))?;
    let max_den = BigInt::from(max_denominator);
    if exact.denom() <= &max_den {
        return Ok(exact);
    }

    let negative = exact.is_negative();
    let target = exact.abs();

    let (mut p0, mut q0) = (BigInt::zero(), BigInt::one());
    let (mut p1, mut q1) = (BigInt::one(), BigInt::zero());
    let mut n = target.numer().clone();
    let mut d = target.denom().clone();
    loop {
        let a = &n / &d;
        let q2 = &q0 + &a * &q1;
        if q2 > max_den {
            break;
        }
        let p2 = &p0 + &a * &p1;
        p0 = std::mem::replace(&mut p1, p2);
        q0 = std::mem::replace(&mut q1, q2);
        let r = &n - &a * &d;
        n = std::mem::replace(&mut d, r);
    }

    let k = (&max_den - &q0) / &q1;
    let semiconvergent = BigRational::new(&p0 + &k * &p1, &q0 + &k * &q1);
    let convergent = BigRational::new(p1, q1);
    let closest = if (&convergent - &target).abs() <= (&semiconvergent - &target).abs() {
        convergent
    } else {
        semiconvergent
    };
    Ok(if negative { -closest } else { closest })
}

/// [`limit_denominator`] with the default bound of one million.
pub fn fraction(x: f64) -> Result<BigRational, FormatError> {
    limit_denominator(x, DEFAULT_MAX_DENOMINATOR)
}

/// `x` as `"n/d"`, or `"n"` when it is a whole number.
pub fn frac(x: f64) -> Result<String, FormatError> {
    let r = fraction(x)?;
    if r.denom().is_one() {
        Ok(r.numer().to_string())
    } else {
        Ok(format!("{}/{}", r.numer(), r.denom()))
    }
}

/// `x` as a mixed number: `"2 1/2"`, `"-1 3/4"`, `"3/8"`, or `"4"`.
pub fn mixed(x: f64) -> Result<String, FormatError> {
    let r = fraction(x)?;
    let sign = if r.is_negative() { "-" } else { "" };
    let magnitude = r.abs();
    let denom = magnitude.denom();
    let whole = magnitude.numer() / denom;
    let rest = magnitude.numer() - &whole * denom;

    Ok(match (whole.is_zero(), rest.is_zero()) {
        (true, true) => "0".to_string(),
        (false, true) => format!("{sign}{whole}"),
        (true, false) => format!("{sign}{rest}/{denom}"),
        (false, false) => format!("{sign}{whole} {rest}/{denom}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn recovers_simple_fractions() {
        assert_eq!(fraction(0.5).unwrap(), ratio(1, 2));
        assert_eq!(fraction(0.1).unwrap(), ratio(1, 10));
        assert_eq!(fraction(-0.75).unwrap(), ratio(-3, 4));
        assert_eq!(fraction(1.0 / 3.0).unwrap(), ratio(1, 3));
    }

    #[test]
    fn bounded_denominators_pick_best_approximation() {
        let pi = std::f64::consts::PI;
        assert_eq!(limit_denominator(pi, 10).unwrap(), ratio(22, 7));
        assert_eq!(limit_denominator(pi, 100).unwrap(), ratio(311, 99));
        assert_eq!(limit_denominator(pi, 1000).unwrap(), ratio(355, 113));
        assert_eq!(limit_denominator(-pi, 1000).unwrap(), ratio(-355, 113));
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(limit_denominator(0.5, 0), Err(FormatError::InvalidDenominator));
        assert!(matches!(fraction(f64::INFINITY), Err(FormatError::NonFinite(_))));
    }

    #[test]
    fn renders_fractions_and_mixed_numbers() {
        assert_eq!(frac(0.375).unwrap(), "3/8");
        assert_eq!(frac(4.0).unwrap(), "4");
        assert_eq!(mixed(2.5).unwrap(), "2 1/2");
        assert_eq!(mixed(0.375).unwrap(), "3/8");
        assert_eq!(mixed(-1.75).unwrap(), "-1 3/4");
        assert_eq!(mixed(4.0).unwrap(), "4");
        assert_eq!(mixed(0.0).unwrap(), "0");
    }
}
