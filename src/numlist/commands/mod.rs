//! # Command Layer
//!
//! One module per menu operation. Each `run` takes the list (and any raw user
//! text the operation has to parse) and returns a [`CmdResult`] or a
//! [`NumlistError`](crate::error::NumlistError). Nothing here writes to a
//! terminal: messages are collected on the result and the caller decides how
//! to show them.

use crate::commands::statistics::Statistics;
use std::path::PathBuf;

pub mod add;
pub mod clear;
pub mod divide;
pub mod evens;
pub mod export;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod sort;
pub mod statistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Ascending and descending copies of the list; the list itself is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedViews {
    pub ascending: Vec<i64>,
    pub descending: Vec<i64>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub numbers: Vec<i64>,
    pub statistics: Option<Statistics>,
    pub quotient: Option<f64>,
    pub sorted: Option<SortedViews>,
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_numbers(mut self, numbers: Vec<i64>) -> Self {
        self.numbers = numbers;
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn with_quotient(mut self, quotient: f64) -> Self {
        self.quotient = Some(quotient);
        self
    }

    pub fn with_sorted(mut self, sorted: SortedViews) -> Self {
        self.sorted = Some(sorted);
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }
}
