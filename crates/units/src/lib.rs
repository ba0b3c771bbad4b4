//! Unit conversion queries delegated to an external oracle (GNU `units`).
//!
//! The oracle does the dimensional analysis; this crate only builds the two
//! command-line arguments, runs the oracle once per query, and classifies its
//! text response into a [`ConversionResult`]. Failing to run the oracle at all
//! is an [`OracleError`], which is kept separate from output the parser does
//! not recognize ([`ConversionResult::Unparseable`]).

pub mod oracle;
pub mod parse;
pub mod result;

pub use oracle::{GnuUnits, Oracle, OracleError};
pub use parse::parse_response;
pub use result::ConversionResult;

/// Runs conversion queries against an [`Oracle`].
#[derive(Debug, Clone, Default)]
pub struct Converter<O = GnuUnits> {
    oracle: O,
}

impl<O: Oracle> Converter<O> {
    /// Converter that sends every query to `oracle`.
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// The oracle queries go to.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Convert `value` in `from_unit` into `to_unit`.
    ///
    /// The source quantity is `value` and `from_unit` concatenated with no
    /// separator (`1meter`); unit syntax is left entirely to the oracle.
    pub fn convert(
        &self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<ConversionResult, OracleError> {
        let quantity = format!("{value}{from_unit}");
        let raw = self.oracle.query(&quantity, to_unit)?;
        let result = parse_response(&raw);
        tracing::debug!("{} -> {}: {}", quantity, to_unit, result.kind());
        Ok(result)
    }

    /// Convert and keep only the forward factor.
    ///
    /// Unless `silent`, the full result is printed to stdout first. Returns
    /// `None` when the oracle reported a conformability error or produced
    /// output that could not be parsed.
    pub fn convert_or_none(
        &self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        silent: bool,
    ) -> Result<Option<f64>, OracleError> {
        let result = self.convert(value, from_unit, to_unit)?;
        if !silent {
            println!("{result}");
        }
        Ok(result.factor())
    }
}

/// [`Converter::convert`] against the default GNU units oracle.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<ConversionResult, OracleError> {
    Converter::<GnuUnits>::default().convert(value, from_unit, to_unit)
}

/// [`Converter::convert_or_none`] against the default GNU units oracle.
pub fn convert_or_none(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    silent: bool,
) -> Result<Option<f64>, OracleError> {
    Converter::<GnuUnits>::default().convert_or_none(value, from_unit, to_unit, silent)
}
