//! # Pool Derivation
//!
//! Turns entry fees into the net pool available for prizes.
//!
//! ## Order of Deductions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total_players × entry_fee ─────────────────────────► gross pool       │
//! │        │                                                                │
//! │        ▼  organizer compensation?                                       │
//! │  pool −= entry_fee + 50          (reported organizer cut: 50)          │
//! │        │                                                                │
//! │        ▼  Friday event?                                                 │
//! │  contribution = 10% of THAT pool, pool −= contribution                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  net pool                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Each deduction applies to the pool left by the previous step.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::{FRIDAY_CONTRIBUTION_SHARE, ORGANIZER_FLAT_FEE};

/// Intermediate values of the pool pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolDerivation {
    /// `total_players × entry_fee`.
    pub gross_pool: Money,
    /// Pool after the organizer deduction, before the Friday reservation.
    pub pool_after_organizer: Money,
    /// Flat fee reported as the organizer's cut.
    pub organizer_cut: Option<Money>,
    /// Everything removed for the organizer (entry fee + flat fee).
    pub organizer_deduction: Option<Money>,
    /// Amount reserved for the bigger tournament.
    pub friday_contribution: Option<Money>,
    /// What is left to distribute.
    pub net_pool: Money,
}

/// Derives the net prize pool.
///
/// ## Errors
/// [`CoreError::DeductionsExceedPool`] when the organizer deduction is
/// larger than the gross pool (e.g. a one-player tournament with
/// compensation on).
///
/// [`CoreError::PoolOverflow`] when the gross pool or the organizer
/// deduction is too large to represent.
///
/// ## Example
/// ```rust
/// use prize_core::money::Money;
/// use prize_core::pool::derive_net_pool;
///
/// let pool = derive_net_pool(20, Money::from_whole_units(50), true, true).unwrap();
/// assert_eq!(pool.net_pool, Money::from_whole_units(810));
/// assert_eq!(pool.friday_contribution, Some(Money::from_whole_units(90)));
/// assert_eq!(pool.organizer_cut, Some(Money::from_whole_units(50)));
/// ```
pub fn derive_net_pool(
    total_players: u32,
    entry_fee: Money,
    organizer_compensation: bool,
    is_friday_event: bool,
) -> CoreResult<PoolDerivation> {
    let overflow = || CoreError::PoolOverflow {
        entry_fee,
        total_players,
    };

    let gross_pool = entry_fee
        .checked_multiply_count(total_players)
        .ok_or_else(overflow)?;
    let mut pool = gross_pool;

    let (organizer_cut, organizer_deduction) = if organizer_compensation {
        let deduction = entry_fee
            .checked_add(ORGANIZER_FLAT_FEE)
            .ok_or_else(overflow)?;
        if deduction > pool {
            return Err(CoreError::DeductionsExceedPool {
                gross: gross_pool,
                deductions: deduction,
            });
        }
        pool -= deduction;
        debug!(%deduction, remaining = %pool, "organizer compensation deducted");
        (Some(ORGANIZER_FLAT_FEE), Some(deduction))
    } else {
        (None, None)
    };
    let pool_after_organizer = pool;

    let friday_contribution = if is_friday_event {
        let contribution = pool.apply_share(FRIDAY_CONTRIBUTION_SHARE);
        pool -= contribution;
        debug!(%contribution, remaining = %pool, "friday contribution reserved");
        Some(contribution)
    } else {
        None
    };

    Ok(PoolDerivation {
        gross_pool,
        pool_after_organizer,
        organizer_cut,
        organizer_deduction,
        friday_contribution,
        net_pool: pool,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fee(units: i64) -> Money {
        Money::from_whole_units(units)
    }

    #[test]
    fn test_no_deductions() {
        let pool = derive_net_pool(20, fee(50), false, false).unwrap();
        assert_eq!(pool.gross_pool, fee(1000));
        assert_eq!(pool.net_pool, fee(1000));
        assert_eq!(pool.organizer_cut, None);
        assert_eq!(pool.friday_contribution, None);
    }

    #[test]
    fn test_organizer_deduction_includes_entry_fee() {
        let pool = derive_net_pool(20, fee(50), true, false).unwrap();
        assert_eq!(pool.net_pool, fee(900));
        assert_eq!(pool.organizer_cut, Some(fee(50)));
        assert_eq!(pool.organizer_deduction, Some(fee(100)));
    }

    #[test]
    fn test_friday_applies_after_organizer() {
        let pool = derive_net_pool(20, fee(50), true, true).unwrap();
        assert_eq!(pool.pool_after_organizer, fee(900));
        // 10% of 900, not of the 1000 gross
        assert_eq!(pool.friday_contribution, Some(fee(90)));
        assert_eq!(pool.net_pool, fee(810));
    }

    #[test]
    fn test_friday_only() {
        let pool = derive_net_pool(7, fee(35), false, true).unwrap();
        // 245 gross → 24.50 reserved
        assert_eq!(pool.friday_contribution, Some(Money::from_major_minor(24, 50)));
        assert_eq!(pool.net_pool, Money::from_major_minor(220, 50));
    }

    #[test]
    fn test_deductions_exceeding_pool_fail() {
        let err = derive_net_pool(1, fee(50), true, false).unwrap_err();
        assert_eq!(
            err,
            CoreError::DeductionsExceedPool {
                gross: fee(50),
                deductions: fee(100),
            }
        );
    }

    #[test]
    fn test_deductions_consuming_pool_exactly() {
        // 2 × 50 = 100, deduction 100
        let pool = derive_net_pool(2, fee(50), true, true).unwrap();
        assert!(pool.net_pool.is_zero());
        assert_eq!(pool.friday_contribution, Some(Money::zero()));
    }

    #[test]
    fn test_oversized_pool_is_an_error() {
        let fee: Money = "10000000000000000".parse().unwrap();
        let err = derive_net_pool(20, fee, false, false).unwrap_err();
        assert_eq!(
            err,
            CoreError::PoolOverflow {
                entry_fee: fee,
                total_players: 20,
            }
        );

        let max = Money::from_minor_units(i64::MAX);
        assert!(matches!(
            derive_net_pool(1, max, true, false),
            Err(CoreError::PoolOverflow { .. })
        ));
    }
}
