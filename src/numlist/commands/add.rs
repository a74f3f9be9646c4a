use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NumlistError, Result};
use crate::model::{format_numbers, NumberList};

use super::helpers::parse_integer;

pub fn run(list: &mut NumberList, input: &str) -> Result<CmdResult> {
    let value = parse_integer(input)?;
    if value < 0 {
        return Err(NumlistError::NegativeValue(value));
    }

    list.push(value);
    tracing::debug!(value, len = list.len(), "number added");

    Ok(CmdResult::default()
        .with_numbers(list.to_vec())
        .with_message(CmdMessage::success(format!(
            "Adicionado: {}",
            format_numbers(list.as_slice())
        ))))
}
