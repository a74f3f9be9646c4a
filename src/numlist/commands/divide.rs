use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NumlistError, Operand, Result};

pub use super::helpers::parse_operand;

/// Divides an already-parsed dividend by the divisor the user typed.
///
/// The dividend is parsed first, by the caller, so that a bad dividend is
/// reported before the user is ever asked for a divisor.
pub fn run(dividend: f64, divisor_input: &str) -> Result<CmdResult> {
    let divisor = parse_operand(divisor_input, Operand::Divisor)?;
    if divisor == 0.0 {
        return Err(NumlistError::DivisionByZero);
    }

    let quotient = dividend / divisor;
    Ok(CmdResult::default()
        .with_quotient(quotient)
        .with_message(CmdMessage::info(format!("Resultado: {:.2}", quotient))))
}
