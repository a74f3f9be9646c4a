use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NumlistError, Result};
use crate::model::{format_numbers, NumberList};

use super::helpers::parse_integer;

pub fn run(list: &mut NumberList, input: &str) -> Result<CmdResult> {
    let index = parse_integer(input)?;
    let len = list.len();

    let removed = usize::try_from(index)
        .ok()
        .and_then(|i| list.remove(i))
        .ok_or(NumlistError::IndexOutOfRange { index, len })?;
    tracing::debug!(index, removed, "number removed");

    Ok(CmdResult::default()
        .with_numbers(list.to_vec())
        .with_message(CmdMessage::success(format!(
            "Removido: {}",
            format_numbers(list.as_slice())
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::ListFixture;

    #[test]
    fn removes_first_element() {
        let mut list = ListFixture::new()
            .with_numbers(&[15, 80, 46, 35, 71, 13, 22, 98, 3])
            .build();
        let result = run(&mut list, "0").unwrap();

        assert_eq!(list.as_slice(), &[80, 46, 35, 71, 13, 22, 98, 3]);
        assert_eq!(result.messages[0].content, "Removido: [80 46 35 71 13 22 98 3]");
    }

    #[test]
    fn removes_last_element() {
        let mut list = ListFixture::new().with_numbers(&[1, 2, 3]).build();
        run(&mut list, " 2 ").unwrap();
        assert_eq!(list.as_slice(), &[1, 2]);
    }

    #[test]
    fn index_equal_to_len_is_out_of_range() {
        let mut list = ListFixture::new().with_numbers(&[1, 2, 3]).build();
        let err = run(&mut list, "3").unwrap_err();
        assert!(matches!(
            err,
            NumlistError::IndexOutOfRange { index: 3, len: 3 }
        ));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn negative_index_is_out_of_range() {
        let mut list = ListFixture::new().with_numbers(&[1, 2, 3]).build();
        assert!(matches!(
            run(&mut list, "-1"),
            Err(NumlistError::IndexOutOfRange { index: -1, .. })
        ));
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn empty_list_has_no_valid_index() {
        let mut list = NumberList::new();
        assert!(matches!(
            run(&mut list, "0"),
            Err(NumlistError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn non_integer_index_is_a_parse_error() {
        let mut list = ListFixture::seeded().build();
        assert!(matches!(
            run(&mut list, "first"),
            Err(NumlistError::InvalidInteger(_))
        ));
        assert_eq!(list.len(), 8);
    }
}
