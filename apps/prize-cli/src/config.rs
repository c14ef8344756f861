//! # Calculator Configuration
//!
//! Form defaults and display settings for the terminal front-end.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied in args.rs)          │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     PRIZE_ENTRY_FEE=60                                                 │
//! │     PRIZE_FRIDAY_EVENT=false                                           │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or ~/.config/prize-calculator/prize.toml (Linux)    │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     entry fee 50, Friday on, organizer cut on, no X-0 player           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # prize.toml
//! [defaults]
//! entry_fee = "50"
//! friday_event = true
//! organizer_compensation = true
//! undefeated_bonus = false
//!
//! [display]
//! currency = "kr."
//! explain = false
//! ```

use prize_core::validation::validate_entry_fee;
use prize_core::{Money, ValidationError, DEFAULT_ENTRY_FEE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

// =============================================================================
// Sections
// =============================================================================

/// Values pre-filled into every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSection {
    /// Entry fee as typed, e.g. "50" or "37.50".
    pub entry_fee: String,

    pub friday_event: bool,

    pub organizer_compensation: bool,

    pub undefeated_bonus: bool,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        DefaultsSection {
            entry_fee: DEFAULT_ENTRY_FEE.whole_units().to_string(),
            friday_event: true,
            organizer_compensation: true,
            undefeated_bonus: false,
        }
    }
}

impl DefaultsSection {
    /// The default entry fee as money.
    pub fn entry_fee(&self) -> Result<Money, ValidationError> {
        Money::parse_field(&self.entry_fee, "defaults.entry_fee")
    }
}

/// How results are printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Suffix printed after every amount.
    pub currency: String,

    /// Always print the calculation steps.
    pub explain: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        DisplaySection {
            currency: "kr.".to_string(),
            explain: false,
        }
    }
}

// =============================================================================
// Calculator Config
// =============================================================================

/// Complete front-end configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub defaults: DefaultsSection,
    pub display: DisplaySection,
}

impl CalculatorConfig {
    /// Loads configuration with the following priority:
    /// 1. Defaults
    /// 2. Config file (prize.toml)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` must exist; the platform default path is
    /// optional.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path)),
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading calculator config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses TOML text; missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_entry_fee(self.defaults.entry_fee()?)?;

        if self.display.currency.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "display.currency".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Applies `PRIZE_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup.
    ///
    /// Unparseable booleans are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(fee) = lookup("PRIZE_ENTRY_FEE") {
            debug!(entry_fee = %fee, "Overriding entry fee from environment");
            self.defaults.entry_fee = fee;
        }

        let flags = [
            ("PRIZE_FRIDAY_EVENT", &mut self.defaults.friday_event),
            (
                "PRIZE_ORGANIZER_COMPENSATION",
                &mut self.defaults.organizer_compensation,
            ),
            ("PRIZE_UNDEFEATED_BONUS", &mut self.defaults.undefeated_bonus),
            ("PRIZE_EXPLAIN", &mut self.display.explain),
        ];
        for (key, slot) in flags {
            if let Some(value) = lookup(key) {
                match parse_flag(&value) {
                    Some(flag) => *slot = flag,
                    None => warn!(key, value = %value, "Unknown boolean in environment"),
                }
            }
        }

        if let Some(currency) = lookup("PRIZE_CURRENCY") {
            self.display.currency = currency;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "prize", "prize-calculator")
            .map(|dirs| dirs.config_dir().join("prize.toml"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
