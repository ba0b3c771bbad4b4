//! Temperature conversions with absolute-zero checks, and molar heat
//! capacity / enthalpy helpers for `cp = a + bT + cT²` polynomials.

use std::fmt;

use thiserror::Error;

/// Temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    /// Absolute zero expressed on this scale.
    pub fn absolute_zero(self) -> f64 {
        match self {
            Scale::Celsius => -273.15,
            Scale::Fahrenheit => -459.67,
            Scale::Kelvin => 0.0,
        }
    }

    fn to_kelvin(self, value: f64) -> f64 {
        match self {
            Scale::Celsius => value + 273.15,
            Scale::Fahrenheit => (value + 459.67) * (5.0 / 9.0),
            Scale::Kelvin => value,
        }
    }

    fn kelvin_to(self, kelvin: f64) -> f64 {
        match self {
            Scale::Celsius => kelvin - 273.15,
            Scale::Fahrenheit => kelvin * (9.0 / 5.0) - 459.67,
            Scale::Kelvin => kelvin,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TemperatureError {
    #[error("{value} {scale} is below absolute zero")]
    BelowAbsoluteZero { value: f64, scale: Scale },
}

/// Convert `value` between scales, rounding to eight decimal places.
pub fn convert(value: f64, from: Scale, to: Scale) -> Result<f64, TemperatureError> {
    let result = match (from, to) {
        (Scale::Fahrenheit, Scale::Celsius) => (value - 32.0) * (5.0 / 9.0),
        (Scale::Celsius, Scale::Fahrenheit) => value * (9.0 / 5.0) + 32.0,
        _ => to.kelvin_to(from.to_kelvin(value)),
    };
    check_absolute_zero(result, to)
}

fn check_absolute_zero(value: f64, scale: Scale) -> Result<f64, TemperatureError> {
    let rounded = (value * 1e8).round() / 1e8;
    if rounded < scale.absolute_zero() {
        tracing::debug!("rejecting {} {}: below absolute zero", value, scale);
        return Err(TemperatureError::BelowAbsoluteZero { value, scale });
    }
    Ok(rounded)
}

pub fn temp_fc(f: f64) -> Result<f64, TemperatureError> {
    convert(f, Scale::Fahrenheit, Scale::Celsius)
}

pub fn temp_cf(c: f64) -> Result<f64, TemperatureError> {
    convert(c, Scale::Celsius, Scale::Fahrenheit)
}

pub fn temp_ck(c: f64) -> Result<f64, TemperatureError> {
    convert(c, Scale::Celsius, Scale::Kelvin)
}

pub fn temp_kc(k: f64) -> Result<f64, TemperatureError> {
    convert(k, Scale::Kelvin, Scale::Celsius)
}

pub fn temp_fk(f: f64) -> Result<f64, TemperatureError> {
    convert(f, Scale::Fahrenheit, Scale::Kelvin)
}

pub fn temp_kf(k: f64) -> Result<f64, TemperatureError> {
    convert(k, Scale::Kelvin, Scale::Fahrenheit)
}

/// Coefficients `[a, b, c]` of `cp = a + bT + cT²` on a molar basis.
pub type HeatCoefficients = [f64; 3];

/// Molar constant-pressure heat capacity at temperature `t`.
pub fn heat_cp_mol(t: f64, coeffs: &HeatCoefficients) -> f64 {
    coeffs
        .iter()
        .enumerate()
        .map(|(i, c)| c * t.powi(i as i32))
        .sum()
}

/// Molar constant-volume heat capacity (`cp - R`).
pub fn heat_cv_mol(r: f64, t: f64, coeffs: &HeatCoefficients) -> f64 {
    heat_cp_mol(t, coeffs) - r
}

/// Molar enthalpy: the integral of `cp` from 0 to `t`.
pub fn heat_h_mol(t: f64, coeffs: &HeatCoefficients) -> f64 {
    coeffs
        .iter()
        .enumerate()
        .map(|(i, c)| c * t.powi(i as i32 + 1) / (i as f64 + 1.0))
        .sum()
}

/// Molar internal energy (`h - RT`).
pub fn heat_u_mol(r: f64, t: f64, coeffs: &HeatCoefficients) -> f64 {
    heat_h_mol(t, coeffs) - r * t
}
