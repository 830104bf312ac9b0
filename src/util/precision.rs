//! Significant-digit number formatting for placemark labels.

/// Exponent below which fixed notation switches to exponential.
const MIN_FIXED_EXPONENT: i32 = -6;

/// Largest supported digit count; the rounded mantissa must fit a `u64`.
const MAX_DIGITS: usize = 17;

/// Format `value` with `digits` significant digits, matching JavaScript's
/// `Number.prototype.toPrecision`.
///
/// Fixed notation is used unless the decimal exponent is `>= digits` or
/// below `-6`, in which case the result is exponential (`1.23e+4`). Ties
/// round away from zero. `digits` is clamped to `1..=17`.
#[must_use]
pub fn to_precision(value: f64, digits: usize) -> String {
    let digits = digits.clamp(1, MAX_DIGITS);
    if !value.is_finite() {
        return non_finite(value);
    }
    if value == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    let (mantissa, exponent) = round_significant(value.abs(), digits);
    let sign = if value < 0.0 { "-" } else { "" };
    let body = if exponent < MIN_FIXED_EXPONENT || exponent >= digits as i32
    {
        exponential(&mantissa, exponent)
    } else {
        fixed(&mantissa, exponent)
    };
    format!("{sign}{body}")
}

/// Round `abs` to `digits` significant digits. Returns the digit string
/// (exactly `digits` long) and the decimal exponent of its first digit.
fn round_significant(abs: f64, digits: usize) -> (String, i32) {
    let lower = 10u64.pow(digits as u32 - 1);
    let upper = lower * 10;

    let mut exponent = abs.log10().floor() as i32;
    let mut scaled = round_at(abs, digits, exponent);
    // log10 can land one off near powers of ten.
    if scaled < lower {
        exponent -= 1;
        scaled = round_at(abs, digits, exponent);
    }
    // Rounding may carry into a new leading digit (99.96 -> 100.0).
    if scaled >= upper {
        exponent += 1;
        scaled = lower;
    }
    (scaled.to_string(), exponent)
}

/// `abs` scaled so that `digits` digits sit before the point, rounded half
/// away from zero.
fn round_at(abs: f64, digits: usize, exponent: i32) -> u64 {
    let shift = digits as i32 - 1 - exponent;
    let scaled = if shift >= 0 {
        abs * 10f64.powi(shift)
    } else {
        abs / 10f64.powi(-shift)
    };
    scaled.round() as u64
}

fn fixed(mantissa: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{zeros}{mantissa}");
    }
    let (int, frac) = mantissa.split_at(exponent as usize + 1);
    if frac.is_empty() {
        int.to_owned()
    } else {
        format!("{int}.{frac}")
    }
}

/// Exponential notation with an explicit exponent sign, as JavaScript
/// prints it.
fn exponential(mantissa: &str, exponent: i32) -> String {
    let (lead, rest) = mantissa.split_at(1);
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    let exp = exponent.unsigned_abs();
    if rest.is_empty() {
        format!("{lead}e{exp_sign}{exp}")
    } else {
        format!("{lead}.{rest}e{exp_sign}{exp}")
    }
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value > 0.0 {
        "Infinity".to_owned()
    } else {
        "-Infinity".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_coordinates() {
        assert_eq!(to_precision(47.684444, 4), "47.68");
        assert_eq!(to_precision(-121.129722, 5), "-121.13");
        assert_eq!(to_precision(-101.129722, 5), "-101.13");
        assert_eq!(to_precision(-99.129722, 5), "-99.130");
    }

    #[test]
    fn rounding_carry_drops_a_decimal() {
        assert_eq!(to_precision(99.996, 4), "100.0");
        assert_eq!(to_precision(9.99, 2), "10");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(to_precision(2.5, 1), "3");
        assert_eq!(to_precision(0.125, 2), "0.13");
        assert_eq!(to_precision(-121.25, 4), "-121.3");
        assert_eq!(to_precision(-0.5, 1), "-0.5");
        assert_eq!(to_precision(1250.0, 2), "1.3e+3");
    }

    #[test]
    fn powers_of_ten() {
        assert_eq!(to_precision(1000.0, 4), "1000");
        assert_eq!(to_precision(0.001, 2), "0.0010");
        assert_eq!(to_precision(1e21, 3), "1.00e+21");
    }

    #[test]
    fn zero_keeps_trailing_zeros() {
        assert_eq!(to_precision(0.0, 3), "0.00");
        assert_eq!(to_precision(0.0, 1), "0");
    }

    #[test]
    fn large_and_tiny_values_use_exponential() {
        assert_eq!(to_precision(12345.6, 3), "1.23e+4");
        assert_eq!(to_precision(0.000_000_123, 2), "1.2e-7");
        assert_eq!(to_precision(0.000_123, 2), "0.00012");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(to_precision(f64::NAN, 3), "NaN");
        assert_eq!(to_precision(f64::INFINITY, 3), "Infinity");
        assert_eq!(to_precision(f64::NEG_INFINITY, 3), "-Infinity");
    }
}
