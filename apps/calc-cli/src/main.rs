use anyhow::{Context, Result};
use calc_engine::{Calculator, CalculatorConfig};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

mod terminal;

use terminal::TerminalInteraction;

/// Overrides the configured diagnostics filter when set.
const LOG_ENV_VAR: &str = "CALC_LOG";

#[derive(Parser, Debug)]
#[command(version, about = "Menu-driven two-operand calculator", long_about = None)]
struct Args {
    /// Accepted and ignored; the calculator takes all input interactively.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored: Vec<String>,
}

fn log_filter(config: &CalculatorConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

fn setup_logging(config: &CalculatorConfig) {
    fmt::fmt()
        .with_env_filter(log_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = CalculatorConfig::from_env().context("Failed to load calculator configuration")?;
    setup_logging(&config);
    if !args.ignored.is_empty() {
        debug!("Ignoring command-line arguments: {:?}", args.ignored);
    }

    let ui = TerminalInteraction::stdio();
    let summary = Calculator::new(&ui)
        .with_config(&config)
        .run()
        .context("Calculator session aborted")?;

    info!(
        "Session finished: {} calculations, {} failed, {} invalid choices",
        summary.calculations, summary.failed_calculations, summary.invalid_choices
    );
    Ok(())
}
