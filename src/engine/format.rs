//! Report value formatting.

/// Format `x` to four significant figures of scientific notation:
/// one leading digit, three fractional digits, and a signed exponent of at
/// least two digits (`1.000e+03`, `-1.667e-02`).
///
/// Specials: zero (either sign) renders as `0.000e+00`, NaN as `nan`, and the
/// infinities as `inf` / `-inf`. Everything else gets standard
/// round-half-to-even at the fourth significant digit.
pub fn format_sig4(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if x == 0.0 {
        return "0.000e+00".to_string();
    }

    // `{:.3e}` produces the right mantissa but a bare exponent ("1.000e3");
    // re-render the exponent with a sign and two-digit padding.
    let raw = format!("{x:.3e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_four_significant_figures() {
        let cases: Vec<(f64, &str)> = vec![
            (1.0, "1.000e+00"),
            (1000.0, "1.000e+03"),
            (0.016666666666666666, "1.667e-02"),
            (2.7777777777777776e-4, "2.778e-04"),
            (1.1574074074074073e-5, "1.157e-05"),
            (3.168808781402895e-8, "3.169e-08"),
            (-1234.0, "-1.234e+03"),
            (1.98847e30, "1.988e+30"),
            (1.602176634e-19, "1.602e-19"),
        ];

        for (value, expected) in cases {
            assert_eq!(format_sig4(value), expected, "formatting {value}");
        }
    }

    #[test]
    fn carries_rounding_across_the_exponent() {
        assert_eq!(format_sig4(999_990.0), "1.000e+06");
        assert_eq!(format_sig4(9.9999e-5), "1.000e-04");
    }

    #[test]
    fn specials() {
        assert_eq!(format_sig4(0.0), "0.000e+00");
        assert_eq!(format_sig4(-0.0), "0.000e+00");
        assert_eq!(format_sig4(f64::NAN), "nan");
        assert_eq!(format_sig4(f64::INFINITY), "inf");
        assert_eq!(format_sig4(f64::NEG_INFINITY), "-inf");
    }
}
