//! Facade CLI - client of the Facade
//! Builds the facade and prints what its subsystems report

mod settings;
mod telemetry;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use facade_core::Facade;

use crate::settings::{OutputFormat, Settings};

#[derive(Parser)]
#[command(name = "facade")]
#[command(about = "Run subsystems through a single facade", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (TOML, YAML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the facade and print the combined output
    Run {
        /// Output format (overrides settings)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// List composed subsystems in invocation order
    Subsystems,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    telemetry::init_logging(settings.log_format).context("Failed to initialize logging")?;

    info!(version = facade_core::VERSION, "Facade client starting");

    let facade = Facade::new();

    match cli.command {
        Commands::Run { output } => match output.unwrap_or(settings.output) {
            OutputFormat::Text => println!("{}", facade.run()),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&facade.report())
                    .context("Failed to serialize report")?;
                println!("{}", json);
            }
        },
        Commands::Subsystems => {
            println!("{}", "Subsystems".cyan().bold());
            for (i, name) in facade.subsystem_names().iter().enumerate() {
                println!("  {} {}", format!("{}.", i + 1).bold(), name);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_run_with_output() {
        let cli = Cli::try_parse_from(["facade", "run", "--output", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Run {
                output: Some(OutputFormat::Json)
            }
        ));
    }

    #[test]
    fn test_cli_global_config_flag() {
        let cli = Cli::try_parse_from(["facade", "subsystems", "--config", "f.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Subsystems));
        assert_eq!(cli.config, Some(PathBuf::from("f.toml")));
    }

    #[test]
    fn test_cli_rejects_unknown_output() {
        assert!(Cli::try_parse_from(["facade", "run", "--output", "xml"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
