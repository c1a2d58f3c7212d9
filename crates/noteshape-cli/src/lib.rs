//! Noteshape CLI library.
//!
//! Configuration, the batch driver and output formatting behind the
//! `noteshape` binary.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use batch::{run_batch, BatchOptions, BatchReport, FileOutcome};
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
