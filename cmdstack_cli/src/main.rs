//! # cmdstack
//!

use clap::Parser;
use cmdstack_cli::{commands, Cli, CliError};
use cmdstack_engine::{log_error, logging, RuntimeConfig};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        if let Some(code) = e.error_code() {
            log_error!(code, "Command failed", "command" => format!("{:?}", cli.command));
        }
        eprintln!("{}", e.report());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config_path = commands::resolve_config_path(cli.config.as_deref())?;
    let config = RuntimeConfig::load_or_default(&config_path)?;

    if let Err(e) = logging::init_global_logging(config.logging.clone()) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let output = commands::run(&cli.command, &config, &config_path)?;
    println!("{}", output);
    Ok(())
}
