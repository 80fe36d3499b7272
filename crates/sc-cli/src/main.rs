use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use sc_core::{Direction, SleepCalculator};
use tracing_subscriber::EnvFilter;

use sc_cli::commands::{calc, chat, info, now, plan, util};
use sc_cli::{Cli, Commands, Config};

/// Load config and build the calculator it describes.
fn load_calculator(config_path: Option<&Path>) -> Result<SleepCalculator> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    config.calculator().context("invalid configuration")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Log to stderr so command output stays clean for piping
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Wake { time, json }) => {
            let calculator = load_calculator(cli.config.as_deref())?;
            plan::run(
                &mut stdout,
                &calculator,
                Direction::BedtimeForWake,
                &time.join(" "),
                *json,
            )?;
        }
        Some(Commands::Bed { time, json }) => {
            let calculator = load_calculator(cli.config.as_deref())?;
            plan::run(
                &mut stdout,
                &calculator,
                Direction::WakeFromBedtime,
                &time.join(" "),
                *json,
            )?;
        }
        Some(Commands::Now { at, json }) => {
            let calculator = load_calculator(cli.config.as_deref())?;
            now::run(&mut stdout, &calculator, at.as_deref(), *json)?;
        }
        Some(Commands::Calc { time, json }) => {
            let calculator = load_calculator(cli.config.as_deref())?;
            calc::run(&mut stdout, &calculator, &time.join(" "), *json)?;
        }
        Some(Commands::Info) => {
            let calculator = load_calculator(cli.config.as_deref())?;
            info::run(&mut stdout, calculator.buffer())?;
        }
        Some(Commands::Chat) => {
            let calculator = load_calculator(cli.config.as_deref())?;
            let stdin = std::io::stdin().lock();
            chat::run(stdin, &mut stdout, calculator, util::local_now)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(stdout)?;
        }
    }

    stdout.flush()?;
    Ok(())
}
