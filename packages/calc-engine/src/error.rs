use thiserror::Error;

/// Failures surfaced by the calculator engine.
///
/// `DivisionByZero` is the only arithmetic failure and `InvalidNumber` the only
/// parse failure; both are reported inside the interaction loop. `InputClosed`
/// and `Io` mean the terminal is gone and end the session.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    #[error("input stream closed")]
    InputClosed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
