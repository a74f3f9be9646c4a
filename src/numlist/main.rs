//! # Numlist CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/` and this file only
//! invokes `cli::run()` and turns a fatal error into exit status 1. Errors a
//! user can recover from never get here; the session reports them and loops.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
