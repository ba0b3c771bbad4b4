use std::fmt;

use serde::Serialize;

/// Outcome of a single conversion query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionResult {
    /// `factor` is the quantity in destination units; `reciprocal_factor`
    /// converts in the opposite direction.
    Converted { factor: f64, reciprocal_factor: f64 },
    /// As `Converted`, but the oracle only reached the target through a
    /// reciprocal relationship (a rate converted to a period, say).
    ConvertedWithReciprocalNote {
        factor: f64,
        reciprocal_factor: f64,
        note: String,
    },
    /// The two sides have different dimensions; each description is the
    /// oracle's expansion into base units.
    ConformabilityError {
        input_unit_description: String,
        output_unit_description: String,
    },
    /// Oracle output that matched no known shape, verbatim.
    Unparseable { raw: String },
}

impl ConversionResult {
    /// Forward factor, present for both converted variants.
    pub fn factor(&self) -> Option<f64> {
        match self {
            ConversionResult::Converted { factor, .. }
            | ConversionResult::ConvertedWithReciprocalNote { factor, .. } => Some(*factor),
            _ => None,
        }
    }

    pub fn reciprocal_factor(&self) -> Option<f64> {
        match self {
            ConversionResult::Converted {
                reciprocal_factor, ..
            }
            | ConversionResult::ConvertedWithReciprocalNote {
                reciprocal_factor, ..
            } => Some(*reciprocal_factor),
            _ => None,
        }
    }

    /// Stable label, matching the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionResult::Converted { .. } => "converted",
            ConversionResult::ConvertedWithReciprocalNote { .. } => {
                "converted_with_reciprocal_note"
            }
            ConversionResult::ConformabilityError { .. } => "conformability_error",
            ConversionResult::Unparseable { .. } => "unparseable",
        }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionResult::Converted {
                factor,
                reciprocal_factor,
            } => write!(f, "* {factor}\n/ {reciprocal_factor}"),
            ConversionResult::ConvertedWithReciprocalNote {
                factor,
                reciprocal_factor,
                note,
            } => write!(f, "{note}\n* {factor}\n/ {reciprocal_factor}"),
            ConversionResult::ConformabilityError {
                input_unit_description,
                output_unit_description,
            } => write!(
                f,
                "conformability error\n\t{input_unit_description}\n\t{output_unit_description}"
            ),
            ConversionResult::Unparseable { raw } => f.write_str(raw.trim_end()),
        }
    }
}
