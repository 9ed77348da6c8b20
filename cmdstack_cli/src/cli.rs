use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cmdstack")]
#[command(about = "Parse, index and fill command templates with typed placeholders")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to <config dir>/cmdstack/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the parameters of a template
    Parse {
        /// Command template, e.g. 'curl @{bool} @{int[1,5]} @{}'
        #[arg(allow_hyphen_values = true)]
        template: String,

        /// Print the parameters as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a template with its blanks numbered @{1}, @{2}, ...
    Index {
        #[arg(allow_hyphen_values = true)]
        template: String,
    },

    /// Generate values and print the filled-in command
    Generate {
        #[arg(allow_hyphen_values = true)]
        template: String,

        /// Value for the next blank, in order; repeatable
        #[arg(short = 'b', long = "blank", value_name = "VALUE")]
        blanks: Vec<String>,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Number of commands to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Print full results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change stored preferences
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Default length range for @{string}
    ParamStringLength(BoundsArgs),

    /// Default value range for @{int}
    ParamIntRange(BoundsArgs),
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
#[group(required = true, multiple = true)]
pub struct BoundsArgs {
    #[arg(long)]
    pub min: Option<u64>,

    #[arg(long)]
    pub max: Option<u64>,
}
