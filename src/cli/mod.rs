// src/cli/mod.rs
//! CLI argument model and command handlers.

pub mod args;
pub mod handlers;

pub use args::Cli;
pub use handlers::{build_report, handle_rank};
