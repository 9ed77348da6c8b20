//! Subcommand implementations
//!
//! Each command returns the text to print on success, so `main` owns all
//! terminal output.

mod config;
mod template;

use crate::cli::{Commands, ConfigCommand};
use crate::CliError;
use cmdstack_engine::{BoundedKind, RuntimeConfig};
use std::path::{Path, PathBuf};

/// `--config` if given, else the platform default location
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, CliError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(RuntimeConfig::default_path()?),
    }
}

pub fn run(command: &Commands, config: &RuntimeConfig, config_path: &Path) -> Result<String, CliError> {
    match command {
        Commands::Parse { template, json } => template::parse(template, config, *json),
        Commands::Index { template } => template::index(template, config),
        Commands::Generate {
            template,
            blanks,
            seed,
            count,
            json,
        } => template::generate(template, config, blanks, *seed, *count, *json),
        Commands::Config { action } => match action {
            ConfigCommand::Show => config::show(config, config_path),
            ConfigCommand::ParamStringLength(bounds) => {
                config::set_bounds(config, config_path, BoundedKind::StringLength, *bounds)
            }
            ConfigCommand::ParamIntRange(bounds) => {
                config::set_bounds(config, config_path, BoundedKind::IntRange, *bounds)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_explicit_config_path_wins() {
        let path = resolve_config_path(Some(Path::new("/tmp/x.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/x.toml"));
    }

    #[test]
    fn test_run_dispatches_config_commands() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = RuntimeConfig::default();

        let cli = Cli::try_parse_from(["cmdstack", "config", "param-int-range", "--min", "0", "--max", "3"]).unwrap();
        let output = run(&cli.command, &config, &path).unwrap();
        assert_eq!(output, "param-int-range set to [0,3]");

        let saved = RuntimeConfig::load(&path).unwrap();
        let cli = Cli::try_parse_from(["cmdstack", "generate", "@{int}", "--seed", "1"]).unwrap();
        let value: u64 = run(&cli.command, &saved, &path).unwrap().parse().unwrap();
        assert!(value <= 3);
    }
}
