use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ListAction, NumlistError, Result};
use crate::model::{format_numbers, NumberList};

pub fn run(list: &NumberList) -> Result<CmdResult> {
    if list.is_empty() {
        return Err(NumlistError::EmptyList(ListAction::EvenFilter));
    }

    let evens: Vec<i64> = list
        .as_slice()
        .iter()
        .copied()
        .filter(|n| n % 2 == 0)
        .collect();
    if evens.is_empty() {
        return Err(NumlistError::NoEvenNumbers);
    }

    let message = CmdMessage::info(format!("Números pares: {}", format_numbers(&evens)));
    Ok(CmdResult::default().with_numbers(evens).with_message(message))
}
