//! The six binary operations offered by the calculator.
//!
//! Everything here is plain IEEE-754 `f64` math. Overflow saturates to
//! infinity and undefined powers yield `NaN`; only [`divide`] reports an error.

use crate::error::{CalcError, Result};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns `a / b`, refusing a zero divisor of either sign.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raises `a` to the power `b`.
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

pub fn average(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}
