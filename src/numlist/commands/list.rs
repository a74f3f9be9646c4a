use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{format_numbers, NumberList};

pub fn run(list: &NumberList) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_numbers(list.to_vec())
        .with_message(CmdMessage::info(format!(
            "Lista: {}",
            format_numbers(list.as_slice())
        ))))
}
