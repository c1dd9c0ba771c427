//! Reading operands from text and printing results back.

use std::borrow::Cow;

use crate::error::{CalcError, Result};

/// Parses a user-typed number.
///
/// Surrounding whitespace is ignored. Besides the usual decimal and exponent
/// forms this accepts `inf`, `infinity` and `nan` in any case, and single
/// underscores between digits as separators (`1_000_000`).
pub fn parse_number(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let invalid = || CalcError::InvalidNumber(trimmed.to_string());

    let literal = strip_digit_separators(trimmed).ok_or_else(invalid)?;
    literal.parse::<f64>().map_err(|_| invalid())
}

fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        if *byte != b'_' {
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        let between_digits = matches!(before, Some(b) if b.is_ascii_digit())
            && matches!(after, Some(b) if b.is_ascii_digit());
        if !between_digits {
            return None;
        }
    }

    Some(Cow::Owned(text.replace('_', "")))
}

/// Formats a result the way the calculator prints it.
///
/// Integral values keep a trailing `.0`, very large or very small magnitudes
/// switch to exponent notation with a signed two-digit exponent (`1e+16`,
/// `1.5e-07`), and everything else uses the shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(value);
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
