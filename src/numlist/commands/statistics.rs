use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ListAction, NumlistError, Result};
use crate::model::NumberList;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub min: i64,
    pub max: i64,
}

pub fn run(list: &NumberList) -> Result<CmdResult> {
    let stats = compute(list.as_slice())?;

    Ok(CmdResult::default()
        .with_statistics(stats)
        .with_message(CmdMessage::info(format!(
            "Estatísticas: Média: {:.2}, Mínimo: {}, Máximo: {}",
            stats.mean, stats.min, stats.max
        ))))
}

/// Mean, minimum and maximum in a single pass.
pub fn compute(numbers: &[i64]) -> Result<Statistics> {
    let (first, rest) = numbers
        .split_first()
        .ok_or(NumlistError::EmptyList(ListAction::Statistics))?;

    let mut sum = i128::from(*first);
    let mut min = *first;
    let mut max = *first;
    for &n in rest {
        sum += i128::from(n);
        min = min.min(n);
        max = max.max(n);
    }

    Ok(Statistics {
        mean: sum as f64 / numbers.len() as f64,
        min,
        max,
    })
}
