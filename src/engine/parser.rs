//! Quantity tokenizer.
//!
//! Splits a single token like `312N`, `2.5km` or `-1.6e-19 J` into its
//! numeric value and trailing unit symbol. This is the only place raw user
//! input is touched; everything downstream works on the captured pieces.

use crate::ParsedQuantity;
use crate::error::ConvertError;

/// Parse a `<number><unit-letters>` token into a [`ParsedQuantity`].
///
/// The mantissa allows an optional sign, decimal part and `e`/`E` exponent;
/// the unit is one or more ASCII letters. Whitespace around the token and
/// between number and unit is tolerated. Unicode micro-sign variants (`µ`,
/// `μ`) are folded to ASCII `u` first so that `1µs` and `1us` parse the same.
///
/// Fails with [`ConvertError::Parse`] carrying the token verbatim when the
/// grammar does not match (no number, no unit letters, malformed exponent,
/// whitespace inside the unit).
pub(crate) fn parse_quantity(token: &str) -> Result<ParsedQuantity, ConvertError> {
    let normalized = token.trim().replace(['µ', 'μ'], "u");

    let re = regex!(r"^\s*([+-]?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)\s*([A-Za-z]+)\s*$");
    let caps = re.captures(&normalized).ok_or_else(|| ConvertError::Parse { token: token.to_string() })?;

    let value =
        caps[1].parse::<f64>().map_err(|_| ConvertError::Parse { token: token.to_string() })?;

    Ok(ParsedQuantity { value, raw_unit: caps[2].to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_value_and_unit() {
        let cases: Vec<(&str, f64, &str)> = vec![
            ("312N", 312.0, "N"),
            ("123kg", 123.0, "kg"),
            ("2.5km", 2.5, "km"),
            ("100 ms", 100.0, "ms"),
            ("  1AU  ", 1.0, "AU"),
            ("+42deg", 42.0, "deg"),
            ("-17.5m", -17.5, "m"),
            ("1e3m", 1000.0, "m"),
            ("2.5e-3s", 0.0025, "s"),
            ("1.602E-19J", 1.602e-19, "J"),
        ];

        for (input, value, unit) in cases {
            let parsed = parse_quantity(input).unwrap();
            assert_eq!(parsed.value, value, "value of {input:?}");
            assert_eq!(parsed.raw_unit, unit, "unit of {input:?}");
        }
    }

    #[test]
    fn folds_micro_sign_variants() {
        // U+00B5 MICRO SIGN and U+03BC GREEK SMALL LETTER MU
        assert_eq!(parse_quantity("5µs").unwrap().raw_unit, "us");
        assert_eq!(parse_quantity("5μs").unwrap().raw_unit, "us");
    }

    #[test]
    fn rejects_malformed_tokens() {
        let bad = ["", "abc", "42", "km", "5 k m", "1.2.3m", "1e+m", "3,5kg", "12 "];

        for input in bad {
            match parse_quantity(input) {
                Err(ConvertError::Parse { token }) => assert_eq!(token, input),
                other => panic!("{input:?} should fail to parse, got {other:?}"),
            }
        }
    }
}
