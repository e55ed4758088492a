//! Conversions between the display text and `f64`
//!
//! The display is always text so that intermediate entries such as `3.` or
//! `-0` survive unchanged. Numbers only exist while a result is computed.

/// Largest decimal exponent (exclusive) rendered without exponent notation.
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Smallest decimal exponent (exclusive) rendered without exponent notation.
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Parses the display text as a number.
///
/// Accepts trailing points (`3.`), a leading sign and the non-finite forms
/// produced by [`format_number`]. Anything unparseable yields `NaN`.
#[must_use]
pub fn parse_display(display: &str) -> f64 {
    display.parse::<f64>().unwrap_or(f64::NAN)
}

/// Renders a number as the shortest decimal text that round-trips.
///
/// Plain digits are used for ordinary magnitudes; values at or above `1e21`
/// or below `1e-6` switch to exponent notation (`1e+21`, `2.5e-7`).
/// Non-finite values render as `Infinity`, `-Infinity` and `NaN`, and
/// negative zero renders as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = layout_digits(&digits, exponent + 1);
    if value.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}

/// Places the decimal point for `digits` scaled so that the value is
/// `0.digits × 10^point`.
fn layout_digits(digits: &str, point: i32) -> String {
    let len = digits.len() as i32;

    if len <= point && point <= MAX_PLAIN_EXPONENT {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= MAX_PLAIN_EXPONENT {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if MIN_PLAIN_EXPONENT < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let exp = point - 1;
        let sign = if exp < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", exp.abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", exp.abs())
        }
    }
}

/// Returns true if the display text denotes a finite number
#[must_use]
pub fn is_finite_display(display: &str) -> bool {
    parse_display(display).is_finite()
}
