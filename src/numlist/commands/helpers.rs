use crate::error::{NumlistError, Operand, Result};

/// Parses one line of user text as a base-10 integer. Surrounding whitespace is ignored.
pub fn parse_integer(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| NumlistError::InvalidInteger(trimmed.to_string()))
}

/// Parses one line of user text as a float, naming the operand on failure.
pub fn parse_operand(input: &str, operand: Operand) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| NumlistError::InvalidOperand(operand))
}
