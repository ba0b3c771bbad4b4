//! Checks against a real GNU units install. Skipped when the oracle is not on PATH.

use desk_calculator::units::{self, ConversionResult, OracleError};

fn skip_if_missing<T>(result: Result<T, OracleError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(OracleError::Launch { executable, .. }) => {
            eprintln!("Skipping GNU units checks: `{executable}` is not installed.");
            None
        }
        Err(err) => panic!("Unexpected oracle failure: {err}"),
    }
}

#[test]
fn meter_to_feet() {
    let Some(result) = skip_if_missing(units::convert(1.0, "meter", "feet")) else {
        return;
    };
    let factor = result.factor().expect("forward factor");
    let reciprocal = result.reciprocal_factor().expect("reciprocal factor");
    assert!((factor - 3.28084).abs() < 1e-4, "factor = {factor}");
    assert!((reciprocal - 0.3048).abs() < 1e-6, "reciprocal = {reciprocal}");
    assert!((factor * reciprocal - 1.0).abs() < 1e-6);
}

#[test]
fn kilogram_to_meter_is_not_conformable() {
    let Some(result) = skip_if_missing(units::convert(1.0, "kilogram", "meter")) else {
        return;
    };
    match result {
        ConversionResult::ConformabilityError {
            input_unit_description,
            output_unit_description,
        } => {
            assert!(!input_unit_description.is_empty());
            assert!(!output_unit_description.is_empty());
        }
        other => panic!("expected a conformability error, got {other:?}"),
    }
}

#[test]
fn convert_or_none_matches_convert() {
    let Some(factor) = skip_if_missing(units::convert_or_none(1.0, "inch", "cm", true)) else {
        return;
    };
    assert_eq!(factor, Some(2.54));
}
