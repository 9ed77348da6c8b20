//! # cmdstack CLI
//!
//! Command line front end for the cmdstack template engine: parse and index
//! templates, generate filled-in commands and manage stored defaults.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{BoundsArgs, Cli, Commands, ConfigCommand};
pub use error::CliError;
