//! # prize-cli: Terminal Front-end
//!
//! Collects tournament results from the command line, hands them to
//! `prize-core` and prints the prizes.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   argv ──► args::parse_env ──► Cli                                      │
//! │                                 │                                       │
//! │                CalculatorConfig::load (file + PRIZE_* vars)             │
//! │                                 │                                       │
//! │              ┌──────────────────┼──────────────────┐                    │
//! │              ▼                  ▼                  ▼                    │
//! │          calculate          rebalance             help                  │
//! │      compute_breakdown  rebalance_from_first     HELP                   │
//! │              │                  │                                       │
//! │              └────► render (text or JSON) ◄────────┘                    │
//! │                                 │                                       │
//! │                              stdout                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;

use prize_core::{compute_breakdown, rebalance_from_first_place};
use tracing::{debug, info};

use crate::args::{Cli, Command};
use crate::config::CalculatorConfig;
use crate::error::CliResult;

/// Runs the command line front-end.
pub fn run() -> anyhow::Result<()> {
    logging::init();

    let cli = args::parse_env()?;
    let output = execute(cli)?;
    print!("{output}");

    Ok(())
}

/// Loads configuration and executes the parsed command.
pub fn execute(cli: Cli) -> CliResult<String> {
    if cli.command == Command::Help {
        return Ok(args::HELP.to_string());
    }

    let config = CalculatorConfig::load(cli.config_path.clone())?;
    execute_with(&cli, &config)
}

/// Executes a command against an already loaded configuration.
pub fn execute_with(cli: &Cli, config: &CalculatorConfig) -> CliResult<String> {
    match &cli.command {
        Command::Help => Ok(args::HELP.to_string()),

        Command::Calculate(calc) => {
            let input = calc.to_input(&config.defaults)?;
            debug!(?input, "Calculating prizes");

            let breakdown = compute_breakdown(&input)?;
            info!(
                net_pool = %breakdown.net_pool,
                tiers = breakdown.tiers.len(),
                "Prizes calculated"
            );

            if cli.json {
                return render::json(&breakdown);
            }

            let currency = config.display.currency.as_str();
            let mut out = render::breakdown_text(&breakdown, currency);
            if calc.explain || config.display.explain {
                out.push('\n');
                out.push_str(&render::explanation_text(&input, &breakdown, currency));
            }
            Ok(out)
        }

        Command::Rebalance(rebalance) => {
            let first = args::parse_count(Some(rebalance.first_place.as_str()), "first_place")?;
            let tiers = rebalance_from_first_place(first)?;

            if cli.json {
                render::json(&tiers)
            } else {
                Ok(render::tiers_text(&tiers))
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
