//! # Prize Calculator
//!
//! The single entry point: validate, derive the pool, distribute, assemble.
//!
//! ```text
//! TournamentInput
//!      │
//!      ▼
//! validate_input ──► derive_net_pool ──► match PayoutMode ──► assemble
//!                                          ├ EqualSplit
//!                                          └ FixedPercentageTiers
//!      │
//!      ▼
//! PrizeBreakdown
//! ```

use tracing::debug;

use crate::distribution::{distribute_equal_split, distribute_fixed_tiers, Distribution};
use crate::error::CoreResult;
use crate::money::Money;
use crate::pool::{derive_net_pool, PoolDerivation};
use crate::types::{DegenerateInputWarning, PayoutMode, PrizeBreakdown, TournamentInput};
use crate::validation::validate_input;

/// Computes the prize breakdown for a finished tournament.
///
/// Deterministic and side-effect free: the same input always yields the
/// same breakdown.
///
/// ## Example
/// ```rust
/// use prize_core::{compute_breakdown, EqualSplitRules, Money, PayoutMode, TournamentInput};
///
/// let input = TournamentInput {
///     total_players: 20,
///     entry_fee: Money::from_whole_units(50),
///     is_friday_event: false,
///     organizer_compensation: false,
///     payout_mode: PayoutMode::EqualSplit(EqualSplitRules {
///         prized_player_count: 5,
///         undefeated_bonus: false,
///     }),
/// };
///
/// let breakdown = compute_breakdown(&input).unwrap();
/// assert_eq!(breakdown.tiers[0].amount_per_player, Money::from_whole_units(200));
/// assert_eq!(breakdown.tiers[0].player_count, 5);
/// ```
pub fn compute_breakdown(input: &TournamentInput) -> CoreResult<PrizeBreakdown> {
    validate_input(input)?;

    let pool = derive_net_pool(
        input.total_players,
        input.entry_fee,
        input.organizer_compensation,
        input.is_friday_event,
    )?;

    let distribution = match &input.payout_mode {
        PayoutMode::EqualSplit(rules) => distribute_equal_split(pool.net_pool, rules),
        PayoutMode::FixedPercentageTiers(tiers) => distribute_fixed_tiers(pool.net_pool, tiers)?,
    };

    let breakdown = assemble(pool, distribution);
    debug!(
        gross = %breakdown.gross_pool,
        net = %breakdown.net_pool,
        tiers = breakdown.tiers.len(),
        "prize breakdown computed"
    );
    Ok(breakdown)
}

/// Merges pool deductions with a distribution. Zero-valued optional lines
/// are dropped.
fn assemble(pool: PoolDerivation, distribution: Distribution) -> PrizeBreakdown {
    let Distribution {
        tiers,
        remainder,
        mut warnings,
    } = distribution;

    if pool.net_pool.is_zero() {
        warnings.push(DegenerateInputWarning::EmptyPool);
    }

    PrizeBreakdown {
        gross_pool: pool.gross_pool,
        net_pool: pool.net_pool,
        tiers,
        organizer_cut: non_zero(pool.organizer_cut),
        organizer_deduction: non_zero(pool.organizer_deduction),
        friday_contribution: non_zero(pool.friday_contribution),
        rounding_remainder: remainder,
        warnings,
    }
}

fn non_zero(amount: Option<Money>) -> Option<Money> {
    amount.filter(|m| !m.is_zero())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use crate::types::{EqualSplitRules, TierKind, TierPercentages};

    fn equal_split(prized: u32, bonus: bool) -> PayoutMode {
        PayoutMode::EqualSplit(EqualSplitRules {
            prized_player_count: prized,
            undefeated_bonus: bonus,
        })
    }

    fn input(players: u32, organizer: bool, friday: bool, mode: PayoutMode) -> TournamentInput {
        TournamentInput {
            total_players: players,
            entry_fee: Money::from_whole_units(50),
            is_friday_event: friday,
            organizer_compensation: organizer,
            payout_mode: mode,
        }
    }

    #[test]
    fn test_all_deductions_reported() {
        let breakdown = compute_breakdown(&input(20, true, true, equal_split(5, false))).unwrap();
        assert_eq!(breakdown.net_pool, Money::from_whole_units(810));
        assert_eq!(breakdown.organizer_cut, Some(Money::from_whole_units(50)));
        assert_eq!(breakdown.organizer_deduction, Some(Money::from_whole_units(100)));
        assert_eq!(breakdown.friday_contribution, Some(Money::from_whole_units(90)));
        assert_eq!(
            breakdown.tier(TierKind::Default).map(|t| t.amount_per_player),
            Some(Money::from_whole_units(162))
        );
        assert_eq!(breakdown.accounted_total(), breakdown.gross_pool);
    }

    #[test]
    fn test_empty_pool_is_reported() {
        let breakdown = compute_breakdown(&input(2, true, true, equal_split(1, false))).unwrap();
        assert!(breakdown.net_pool.is_zero());
        assert_eq!(breakdown.friday_contribution, None);
        assert_eq!(breakdown.warnings, vec![DegenerateInputWarning::EmptyPool]);
    }

    #[test]
    fn test_negative_pool_is_an_error() {
        let err = compute_breakdown(&input(1, true, false, equal_split(1, false))).unwrap_err();
        assert!(matches!(err, CoreError::DeductionsExceedPool { .. }));
    }

    #[test]
    fn test_invalid_tiers_are_rejected() {
        let mode = PayoutMode::FixedPercentageTiers(TierPercentages {
            first: 25,
            second: 25,
            third: 20,
            fifth: 5,
        });
        let err = compute_breakdown(&input(20, false, false, mode)).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::TierWeighting {
                weighted_total: 110
            })
        );
    }

    #[test]
    fn test_prized_count_above_players_is_rejected() {
        let err = compute_breakdown(&input(4, false, false, equal_split(5, false))).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_oversized_entry_fee_is_an_error() {
        let mut oversized = input(20, false, false, equal_split(5, false));
        oversized.entry_fee = "10000000000000000".parse().unwrap();

        assert!(matches!(
            compute_breakdown(&oversized),
            Err(CoreError::PoolOverflow { total_players: 20, .. })
        ));
    }
}
