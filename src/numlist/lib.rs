//! # Numlist Architecture
//!
//! Numlist is an interactive menu over a single in-memory list of integers:
//! add, remove by index, list, statistics, safe division, clear, sort, even
//! filter and export to a text file. The menu is the only UI, but the list
//! logic does not know that.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, config resolution, the read/eval/print session    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the NumberList, exclusive mutation                  │
//! │  - One method per menu operation                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Parsing, validation and the operation itself             │
//! │  - Returns `Result<CmdResult>`, never prints                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`error::NumlistError`]. Operation failures (bad input,
//! empty list, division by zero, export I/O) are recoverable: the session shows
//! them as `Erro: ...` and keeps going. Failing to read stdin or to load the
//! config ends the process with a non-zero status.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade that owns the list
//! - [`commands`]: One module per menu operation
//! - [`menu`]: Selection text to [`menu::MenuCommand`]
//! - [`model`]: [`model::NumberList`] and list formatting
//! - [`config`]: Seed and export path configuration
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod model;
