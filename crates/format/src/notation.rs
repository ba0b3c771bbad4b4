//! Positional notations for floats and integers.

use crate::FormatError;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Scientific notation with `sigfig` significant figures (minimum 1).
///
/// The exponent always carries a sign and at least two digits: `1.23457e+03`.
pub fn sci(x: f64, sigfig: usize) -> String {
    if !x.is_finite() {
        return non_finite(x);
    }
    let precision = sigfig.max(1) - 1;
    let raw = format!("{x:.precision$e}");
    match split_exponent(&raw) {
        Some((mantissa, exponent)) => format!("{mantissa}{}", exponent_suffix(exponent)),
        None => raw,
    }
}

/// Engineering notation: the exponent is a multiple of three and the mantissa
/// keeps `sigfig` significant digits (`12.3450e+03`).
pub fn eng(x: f64, sigfig: usize) -> String {
    let scientific = sci(x, sigfig);
    let Some((mantissa, exponent)) = split_exponent(&scientific) else {
        return scientific;
    };

    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let mut digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let offset = exponent.rem_euclid(3) as usize;
    while digits.len() < offset + 1 {
        digits.push('0');
    }
    let (head, tail) = digits.split_at(offset + 1);

    let mut out = String::with_capacity(scientific.len() + 2);
    if negative {
        out.push('-');
    }
    out.push_str(head);
    if !tail.is_empty() {
        out.push('.');
        out.push_str(tail);
    }
    out.push_str(&exponent_suffix(exponent - offset as i32));
    out
}

/// Render an integer in radix `base` (2..=36) using lowercase digits.
pub fn to_base(n: i64, base: u32) -> Result<String, FormatError> {
    if !(2..=36).contains(&base) {
        return Err(FormatError::InvalidBase(base));
    }
    if n == 0 {
        return Ok("0".to_string());
    }

    let radix = u64::from(base);
    let mut magnitude = n.unsigned_abs();
    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(DIGITS[(magnitude % radix) as usize]);
        magnitude /= radix;
    }
    if n < 0 {
        digits.push(b'-');
    }
    digits.reverse();
    Ok(digits.into_iter().map(char::from).collect())
}

fn split_exponent(s: &str) -> Option<(&str, i32)> {
    let (mantissa, exponent) = s.split_once('e')?;
    Some((mantissa, exponent.parse().ok()?))
}

fn exponent_suffix(exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("e{sign}{:02}", exponent.unsigned_abs())
}

fn non_finite(x: f64) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else {
        x.to_string()
    }
}
