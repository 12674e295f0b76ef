//! Public conversion API.

use crate::engine;
use crate::error::ConvertError;
use crate::Dimension;

/// One line of conversion output: a target unit symbol and the magnitude of
/// the input quantity expressed in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub symbol: &'static str,
    pub value: f64,
}

/// Result of a successful conversion request.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// The token as supplied by the caller (surrounding whitespace trimmed).
    pub input: String,
    /// Dimension of the input quantity.
    pub dimension: Dimension,
    /// Input value normalized to the dimension's SI base unit.
    pub value_si: f64,
    /// Equivalent magnitudes, in target-table order.
    pub conversions: Vec<Conversion>,
}

impl ConversionReport {
    /// Render the plain-text report: a header line naming the input and its
    /// dimension, then one `symbol: value` line per target unit.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.conversions.len() + 1);
        lines.push(format!("Input: {}  ->  Dimension: {}", self.input, self.dimension));
        for conversion in &self.conversions {
            lines.push(format!("{}: {}", conversion.symbol, engine::format_sig4(conversion.value)));
        }
        lines.join("\n")
    }
}

/// Convert a quantity token like `"312N"`, `"1km"` or `"1000ms"` into every
/// other unit registered for its dimension.
///
/// # Example
/// ```
/// let report = astrocalc::convert("1km").unwrap();
///
/// assert_eq!(report.dimension.name(), "length");
/// let meters = report.conversions.iter().find(|c| c.symbol == "m").unwrap();
/// assert_eq!(astrocalc::format_sig4(meters.value), "1.000e+03");
/// ```
pub fn convert(token: &str) -> Result<ConversionReport, ConvertError> {
    let parsed = engine::parse_quantity(token)?;
    let converted = engine::convert_quantity(&parsed)?;

    Ok(ConversionReport {
        input: token.trim().to_string(),
        dimension: converted.dimension,
        value_si: converted.value_si,
        conversions: converted
            .outputs
            .into_iter()
            .map(|(symbol, value)| Conversion { symbol, value })
            .collect(),
    })
}
