//! Number formatting: scientific and engineering notation, arbitrary radix,
//! and rational approximations rendered as fractions or mixed numbers.

pub mod fraction;
pub mod notation;

pub use fraction::{fraction, frac, limit_denominator, mixed};
pub use notation::{eng, sci, to_base};

use thiserror::Error;

/// Errors surfaced by the formatting helpers.
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("radix {0} is outside 2..=36")]
    InvalidBase(u32),
    #[error("maximum denominator must be at least 1")]
    InvalidDenominator,
    #[error("{0} has no rational representation")]
    NonFinite(f64),
}
