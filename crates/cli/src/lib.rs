//! Command-line shell for `stockroom`: configuration, menu loop and one-shot queries.

pub mod args;
pub mod commands;
pub mod config;
pub mod shell;

pub use args::{Cli, Commands};
pub use commands::{OutputFormat, run_query};
pub use config::{ConfigError, ShellConfig};
pub use shell::{MenuChoice, Shell};
