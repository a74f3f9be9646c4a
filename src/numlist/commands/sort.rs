use crate::commands::{CmdMessage, CmdResult, SortedViews};
use crate::error::{ListAction, NumlistError, Result};
use crate::model::{format_numbers, NumberList};

/// Shows the list sorted both ways. The stored order is left as entered.
pub fn run(list: &NumberList) -> Result<CmdResult> {
    if list.is_empty() {
        return Err(NumlistError::EmptyList(ListAction::Sort));
    }

    let mut ascending = list.to_vec();
    ascending.sort_unstable();
    let descending: Vec<i64> = ascending.iter().rev().copied().collect();

    let mut result = CmdResult::default().with_numbers(list.to_vec());
    result.add_message(CmdMessage::info(format!(
        "Ordem crescente: {}",
        format_numbers(&ascending)
    )));
    result.add_message(CmdMessage::info(format!(
        "Ordem decrescente: {}",
        format_numbers(&descending)
    )));

    Ok(result.with_sorted(SortedViews {
        ascending,
        descending,
    }))
}
