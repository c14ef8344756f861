//! # Command Line Arguments
//!
//! Collects raw flag text and coerces it into calculator input.
//!
//! ## Flow
//! ```text
//! argv ──► parse() ──► Cli { command: Calculate(CalculateArgs) }
//!                                       │
//!                                       ▼  to_input(&config.defaults)
//!                               TournamentInput
//! ```
//! Numbers are kept as text until `to_input` so a typo like `--players 2o`
//! surfaces as a `ValidationError` naming the field.

use std::ffi::OsString;
use std::path::PathBuf;

use pico_args::Arguments;
use prize_core::{
    rebalance_from_first_place, EqualSplitRules, Money, PayoutMode, TierPercentages,
    TournamentInput, ValidationError,
};

use crate::config::DefaultsSection;
use crate::error::{CliError, CliResult};

pub const HELP: &str = "\
Prize calculator for tournament results

USAGE:
  prize [calculate] --players N [OPTIONS]
  prize rebalance --first-place PERCENT

TOURNAMENT RESULTS:
  --players N            Total players, including the tournament organizer
  --prized N             Players in prizes (usually X-1 or better)
  --undefeated           An X-0 player is amongst the winners

FIXED TIERS (instead of --prized):
  --tiers A,B,C,D        Percent for 1st, 2nd, each of 3rd-4th, each of 5th-8th
  --first-place PERCENT  Derive the other tiers from 1st place

ADDITIONAL SETTINGS:
  --entry-fee AMOUNT     Entry fee per player
  --friday / --no-friday                  10% goes towards a bigger tournament
  --organizer-cut / --no-organizer-cut    Remove entry fee + 50 for the organizer

OUTPUT:
  --explain              Show how the prize was calculated
  --json                 Print the breakdown as JSON
  --config PATH          Read settings from a TOML file
  -h, --help             Print this help
";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub config_path: Option<PathBuf>,
    pub json: bool,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Calculate(CalculateArgs),
    Rebalance(RebalanceArgs),
}

/// Raw values for one calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculateArgs {
    pub players: Option<String>,
    pub prized: Option<String>,
    pub undefeated: bool,
    pub tiers: Option<String>,
    pub first_place: Option<String>,
    pub entry_fee: Option<String>,
    pub friday: Option<bool>,
    pub organizer_cut: Option<bool>,
    pub explain: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebalanceArgs {
    pub first_place: String,
}

/// Parses the process arguments.
pub fn parse_env() -> CliResult<Cli> {
    parse(Arguments::from_env())
}

/// Parses an explicit argument list (without the program name).
pub fn parse_from(args: Vec<OsString>) -> CliResult<Cli> {
    parse(Arguments::from_vec(args))
}

fn parse(mut args: Arguments) -> CliResult<Cli> {
    if args.contains(["-h", "--help"]) {
        return Ok(Cli {
            config_path: None,
            json: false,
            command: Command::Help,
        });
    }

    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let json = args.contains("--json");

    let command = match args.subcommand()?.as_deref() {
        None | Some("calculate") => Command::Calculate(parse_calculate(&mut args)?),
        Some("rebalance") => Command::Rebalance(RebalanceArgs {
            first_place: args.value_from_str("--first-place")?,
        }),
        Some(other) => return Err(CliError::UnknownCommand(other.to_string())),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        let rest: Vec<String> = rest
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        return Err(CliError::UnexpectedArgs(rest.join(" ")));
    }

    Ok(Cli {
        config_path,
        json,
        command,
    })
}

fn parse_calculate(args: &mut Arguments) -> CliResult<CalculateArgs> {
    Ok(CalculateArgs {
        players: args.opt_value_from_str("--players")?,
        prized: args.opt_value_from_str("--prized")?,
        undefeated: args.contains("--undefeated"),
        tiers: args.opt_value_from_str("--tiers")?,
        first_place: args.opt_value_from_str("--first-place")?,
        entry_fee: args.opt_value_from_str("--entry-fee")?,
        friday: toggle(args, "--friday", "--no-friday"),
        organizer_cut: toggle(args, "--organizer-cut", "--no-organizer-cut"),
        explain: args.contains("--explain"),
    })
}

/// `Some(false)` if the negative flag is present, `Some(true)` for the
/// positive one, `None` to fall back to configuration.
fn toggle(args: &mut Arguments, on: &'static str, off: &'static str) -> Option<bool> {
    let on = args.contains(on);
    let off = args.contains(off);
    match (on, off) {
        (_, true) => Some(false),
        (true, false) => Some(true),
        (false, false) => None,
    }
}

// =============================================================================
// Coercion
// =============================================================================

impl CalculateArgs {
    /// Builds calculator input, filling gaps from configuration defaults.
    pub fn to_input(&self, defaults: &DefaultsSection) -> Result<TournamentInput, ValidationError> {
        let total_players = parse_count(self.players.as_deref(), "players")?;

        let entry_fee = match &self.entry_fee {
            Some(text) => Money::parse_field(text, "entry_fee")?,
            None => defaults.entry_fee()?,
        };

        let payout_mode = match (&self.tiers, &self.first_place) {
            (Some(_), Some(_)) => {
                return Err(ValidationError::InvalidFormat {
                    field: "tiers".to_string(),
                    reason: "cannot be combined with --first-place".to_string(),
                })
            }
            (Some(tiers), None) => PayoutMode::FixedPercentageTiers(parse_tiers(tiers)?),
            (None, Some(first)) => PayoutMode::FixedPercentageTiers(rebalance_from_first_place(
                parse_count(Some(first.as_str()), "first_place")?,
            )?),
            (None, None) => PayoutMode::EqualSplit(EqualSplitRules {
                prized_player_count: parse_count(self.prized.as_deref(), "prized")?,
                undefeated_bonus: self.undefeated || defaults.undefeated_bonus,
            }),
        };

        Ok(TournamentInput {
            total_players,
            entry_fee,
            is_friday_event: self.friday.unwrap_or(defaults.friday_event),
            organizer_compensation: self.organizer_cut.unwrap_or(defaults.organizer_compensation),
            payout_mode,
        })
    }
}

/// Parses a whole, non-negative number typed by the user.
pub fn parse_count(text: Option<&str>, field: &str) -> Result<u32, ValidationError> {
    let text = text.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "not a whole number".to_string(),
    })
}

/// Parses `first,second,third,fifth`.
fn parse_tiers(text: &str) -> Result<TierPercentages, ValidationError> {
    let parts: Vec<&str> = text.split(',').collect();
    let [first, second, third, fifth] = parts.as_slice() else {
        return Err(ValidationError::InvalidFormat {
            field: "tiers".to_string(),
            reason: "expected four comma-separated percentages".to_string(),
        });
    };

    Ok(TierPercentages {
        first: parse_count(Some(*first), "tiers.first")?,
        second: parse_count(Some(*second), "tiers.second")?,
        third: parse_count(Some(*third), "tiers.third")?,
        fifth: parse_count(Some(*fifth), "tiers.fifth")?,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
