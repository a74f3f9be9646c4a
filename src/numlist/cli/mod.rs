//! # CLI Layer
//!
//! The only place that knows about the terminal. It parses flags, resolves
//! configuration, owns stdin/stdout for the interactive session and turns
//! [`CmdResult`](numlist::commands::CmdResult) messages into colored lines.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: `run()` plus context wiring (config, logging, API)
//! - `session.rs`: the menu loop, generic over any `BufRead`/`Write` pair
//! - `render.rs`: output formatting

mod commands;
mod render;
mod session;
mod setup;

pub use commands::run;
