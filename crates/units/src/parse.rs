//! Classification of oracle output.
//!
//! Each recognized response shape has its own parser. They are tried in a
//! fixed order and the first match wins; output nothing recognizes is kept
//! verbatim as [`ConversionResult::Unparseable`].

use std::sync::LazyLock;

use regex::Regex;

use crate::result::ConversionResult;

/// Token class the oracle uses for numbers (`3.2808399`, `1.5e+07`, `-2`).
const NUMBER: &str = r"[0-9.+\-e]+";

static CONFORMABILITY: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\A\t?conformability error\r?\n\t{NUMBER} ([^\r\n]+)\r?\n\t{NUMBER} ([^\r\n]+)"
    ))
});

static RECIPROCAL: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\A\t?(reciprocal conversion)\r?\n\t\* ({NUMBER})\r?\n\t/ ({NUMBER})"
    ))
});

static PLAIN: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"\A\t\* ({NUMBER})\r?\n\t/ ({NUMBER})")));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("oracle response patterns are valid")
}

type ShapeParser = fn(&str) -> Option<ConversionResult>;

/// Priority order of the recognized shapes.
const SHAPES: [ShapeParser; 3] = [conformability_error, reciprocal_conversion, plain_conversion];

/// Classify raw oracle output.
pub fn parse_response(raw: &str) -> ConversionResult {
    SHAPES
        .iter()
        .find_map(|shape| shape(raw))
        .unwrap_or_else(|| ConversionResult::Unparseable {
            raw: raw.to_string(),
        })
}

fn conformability_error(raw: &str) -> Option<ConversionResult> {
    let caps = CONFORMABILITY.captures(raw)?;
    Some(ConversionResult::ConformabilityError {
        input_unit_description: caps[1].to_string(),
        output_unit_description: caps[2].to_string(),
    })
}

fn reciprocal_conversion(raw: &str) -> Option<ConversionResult> {
    let caps = RECIPROCAL.captures(raw)?;
    let (factor, reciprocal_factor) = factors(&caps[2], &caps[3])?;
    Some(ConversionResult::ConvertedWithReciprocalNote {
        factor,
        reciprocal_factor,
        note: caps[1].to_string(),
    })
}

fn plain_conversion(raw: &str) -> Option<ConversionResult> {
    let caps = PLAIN.captures(raw)?;
    let (factor, reciprocal_factor) = factors(&caps[1], &caps[2])?;
    Some(ConversionResult::Converted {
        factor,
        reciprocal_factor,
    })
}

// The token class admits strings like `1.2.3`; those fall through to `Unparseable`.
fn factors(forward: &str, reciprocal: &str) -> Option<(f64, f64)> {
    Some((forward.parse().ok()?, reciprocal.parse().ok()?))
}
