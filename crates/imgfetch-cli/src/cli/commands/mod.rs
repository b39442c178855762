//! CLI command handlers, one file per command.

mod fetch;

pub use fetch::run_fetch;
