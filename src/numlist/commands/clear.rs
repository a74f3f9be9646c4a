use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NumberList;

pub fn run(list: &mut NumberList) -> Result<CmdResult> {
    let dropped = list.len();
    list.clear();
    tracing::debug!(dropped, "list cleared");

    Ok(CmdResult::default().with_message(CmdMessage::success("Lista limpa.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::ListFixture;

    #[test]
    fn empties_the_list() {
        let mut list = ListFixture::seeded().build();
        let result = run(&mut list).unwrap();
        assert!(list.is_empty());
        assert_eq!(result.messages[0].content, "Lista limpa.");
    }

    #[test]
    fn clearing_empty_list_succeeds() {
        let mut list = NumberList::new();
        assert!(run(&mut list).is_ok());
        assert!(list.is_empty());
    }
}
