//! # API Facade
//!
//! [`NumlistApi`] owns the session's [`NumberList`] and is the only thing
//! allowed to mutate it. Each method hands the list to the matching command
//! module and returns its [`CmdResult`] untouched. There is no global state:
//! the CLI creates one `NumlistApi` and passes it by `&mut` to the loop.
//!
//! Like the command layer, the API never prints. Parsing of raw user text
//! happens in the commands, so the CLI passes lines through as read.

use crate::commands::{self, CmdResult};
use crate::config::NumlistConfig;
use crate::error::Result;
use crate::model::NumberList;
use std::path::{Path, PathBuf};

pub struct NumlistApi {
    list: NumberList,
    export_path: PathBuf,
}

impl NumlistApi {
    pub fn new(list: NumberList, export_path: PathBuf) -> Self {
        Self { list, export_path }
    }

    pub fn from_config(config: &NumlistConfig) -> Self {
        Self::new(
            NumberList::from(config.seed.clone()),
            PathBuf::from(&config.export_file),
        )
    }

    pub fn add(&mut self, input: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.list, input)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.list)
    }

    pub fn remove(&mut self, input: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.list, input)
    }

    pub fn statistics(&self) -> Result<CmdResult> {
        commands::statistics::run(&self.list)
    }

    pub fn divide(&self, dividend: f64, divisor_input: &str) -> Result<CmdResult> {
        commands::divide::run(dividend, divisor_input)
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.list)
    }

    pub fn sort(&self) -> Result<CmdResult> {
        commands::sort::run(&self.list)
    }

    pub fn evens(&self) -> Result<CmdResult> {
        commands::evens::run(&self.list)
    }

    pub fn export(&self) -> Result<CmdResult> {
        commands::export::run(&self.list, &self.export_path)
    }

    pub fn numbers(&self) -> &[i64] {
        self.list.as_slice()
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }
}

pub use crate::commands::statistics::Statistics;
pub use crate::commands::{CmdMessage, MessageLevel, SortedViews};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::ListFixture;

    fn api_with(numbers: &[i64]) -> NumlistApi {
        NumlistApi::new(
            ListFixture::new().with_numbers(numbers).build(),
            PathBuf::from("numbers.txt"),
        )
    }

    #[test]
    fn from_default_config_is_seeded() {
        let api = NumlistApi::from_config(&NumlistConfig::default());
        assert_eq!(api.numbers(), &[15, 80, 46, 35, 71, 13, 22, 98]);
        assert_eq!(api.export_path(), Path::new("numbers.txt"));
    }

    #[test]
    fn mutations_reach_the_owned_list() {
        let mut api = api_with(&[1, 2]);
        api.add("3").unwrap();
        api.remove("0").unwrap();
        assert_eq!(api.numbers(), &[2, 3]);

        api.clear().unwrap();
        assert!(api.numbers().is_empty());
    }

    #[test]
    fn queries_leave_the_list_alone() {
        let api = api_with(&[5, 2, 8]);
        api.list().unwrap();
        api.statistics().unwrap();
        api.sort().unwrap();
        api.evens().unwrap();
        assert_eq!(api.numbers(), &[5, 2, 8]);
    }

    #[test]
    fn failed_mutation_keeps_state() {
        let mut api = api_with(&[5]);
        assert!(api.add("-1").is_err());
        assert!(api.remove("7").is_err());
        assert_eq!(api.numbers(), &[5]);
    }

    #[test]
    fn export_uses_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.txt");
        let api = NumlistApi::new(ListFixture::new().with_numbers(&[4]).build(), path.clone());

        let result = api.export().unwrap();
        assert_eq!(result.export_path, Some(path.clone()));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "4\n");
    }

    #[test]
    fn divide_passes_through() {
        let api = api_with(&[]);
        assert_eq!(api.divide(9.0, "3").unwrap().quotient, Some(3.0));
    }
}
