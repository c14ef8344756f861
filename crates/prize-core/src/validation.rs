//! # Validation Module
//!
//! Input validation for the prize calculator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end (form / CLI)                                       │
//! │  ├── Text → number coercion (Money::parse_field)                       │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Counts and fees are in range                                      │
//! │  └── Fixed tiers weight to exactly 100%                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Distribution re-asserts tier weighting                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{PayoutMode, TierPercentages, TournamentInput};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Smallest entry fee accepted, in whole units.
pub const MIN_ENTRY_FEE_UNITS: i64 = 1;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the number of paying players.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_total_players(total_players: u32) -> ValidationResult<()> {
    if total_players == 0 {
        return Err(ValidationError::MustBePositive {
            field: "total_players".to_string(),
        });
    }

    Ok(())
}

/// Validates the entry fee.
///
/// ## Rules
/// - Must be at least one whole currency unit
///
/// ## Example
/// ```rust
/// use prize_core::money::Money;
/// use prize_core::validation::validate_entry_fee;
///
/// assert!(validate_entry_fee(Money::from_whole_units(50)).is_ok());
/// assert!(validate_entry_fee(Money::from_minor_units(99)).is_err());
/// ```
pub fn validate_entry_fee(entry_fee: Money) -> ValidationResult<()> {
    if entry_fee < Money::from_whole_units(MIN_ENTRY_FEE_UNITS) {
        return Err(ValidationError::TooSmall {
            field: "entry_fee".to_string(),
            min: MIN_ENTRY_FEE_UNITS,
        });
    }

    Ok(())
}

/// Validates how many players finished in the prizes.
///
/// ## Rules
/// - At least one player
/// - No more than the number of players in the tournament
pub fn validate_prized_player_count(prized: u32, total_players: u32) -> ValidationResult<()> {
    if prized == 0 || prized > total_players {
        return Err(ValidationError::OutOfRange {
            field: "prized_player_count".to_string(),
            min: 1,
            max: i64::from(total_players),
        });
    }

    Ok(())
}

/// Validates that fixed tiers pay out exactly the whole pool.
///
/// ## Example
/// ```rust
/// use prize_core::types::TierPercentages;
/// use prize_core::validation::validate_tier_percentages;
///
/// let ok = TierPercentages { first: 32, second: 20, third: 12, fifth: 6 };
/// assert!(validate_tier_percentages(&ok).is_ok());
///
/// // 25 + 25 + 2×20 + 4×5 = 110
/// let skewed = TierPercentages { first: 25, second: 25, third: 20, fifth: 5 };
/// assert!(validate_tier_percentages(&skewed).is_err());
/// ```
pub fn validate_tier_percentages(tiers: &TierPercentages) -> ValidationResult<()> {
    let weighted_total = tiers.weighted_total();
    if weighted_total != 100 {
        return Err(ValidationError::TierWeighting { weighted_total });
    }

    Ok(())
}

/// Validates a first-place percentage used to derive the other tiers.
pub fn validate_first_place_percent(first: u32) -> ValidationResult<()> {
    if first > 100 {
        return Err(ValidationError::OutOfRange {
            field: "first".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validator
// =============================================================================

/// Validates a whole tournament input before calculation.
pub fn validate_input(input: &TournamentInput) -> ValidationResult<()> {
    validate_total_players(input.total_players)?;
    validate_entry_fee(input.entry_fee)?;

    match &input.payout_mode {
        PayoutMode::EqualSplit(rules) => {
            validate_prized_player_count(rules.prized_player_count, input.total_players)
        }
        PayoutMode::FixedPercentageTiers(tiers) => validate_tier_percentages(tiers),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
