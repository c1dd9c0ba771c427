use tracing::debug;

use crate::error::Result;
use crate::interaction::UserInteraction;
use crate::number::parse_number;

pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number (example: 3, 3.14, -2).";

/// Asks for a number until the reply parses.
///
/// Malformed replies are answered with [`INVALID_NUMBER_MESSAGE`] and the
/// prompt is repeated with no retry limit. The only error returned is a lost
/// input stream.
pub fn prompt_float<U>(ui: &U, prompt: &str) -> Result<f64>
where
    U: UserInteraction + ?Sized,
{
    loop {
        let raw = ui.ask_user(prompt)?;
        match parse_number(&raw) {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!("Rejected operand: {}", err);
                ui.log_error(INVALID_NUMBER_MESSAGE);
            }
        }
    }
}
