//! # Distribution Strategies
//!
//! Divides the net pool between prize tiers.
//!
//! ## Strategies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EqualSplit                                                             │
//! │  ──────────                                                             │
//! │  no bonus:  net / prized                      × prized                 │
//! │  bonus:     net × ratio(prized)               × 1     (X-0 prize)      │
//! │             (net − bonus) / (prized − 1)      × prized − 1             │
//! │                                                                         │
//! │  FixedPercentageTiers                                                   │
//! │  ────────────────────                                                   │
//! │  1st  net × first%   × 1                                               │
//! │  2nd  net × second%  × 1                                               │
//! │  3-4  net × third%   × 2                                               │
//! │  5-8  net × fifth%   × 4                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Per-player amounts are floored to minor units. Whatever flooring leaves
//! behind is returned as the distribution's remainder.

use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{
    DegenerateInputWarning, EqualSplitRules, PrizeTier, Share, TierKind, TierPercentages,
};
use crate::validation::{validate_first_place_percent, validate_tier_percentages, ValidationResult};

/// Share of the remaining percentage given to each of 3rd and 4th place,
/// in thousandths (0.176).
pub const THIRD_RATIO_PER_MILLE: u32 = 176;

/// Share of the remaining percentage given to each of 5th through 8th
/// place, in thousandths (0.088).
pub const FIFTH_RATIO_PER_MILLE: u32 = 88;

/// Tiers produced by a strategy, plus what flooring left over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub tiers: Vec<PrizeTier>,
    pub remainder: Money,
    pub warnings: Vec<DegenerateInputWarning>,
}

// =============================================================================
// Equal Split
// =============================================================================

/// Bonus share for the undefeated player, keyed by the prized player count
/// before the undefeated player is removed.
///
/// | prized | share |
/// |--------|-------|
/// | 1      | 100%  |
/// | 2      | 60%   |
/// | 3      | 40%   |
/// | 4+     | 35%   |
pub const fn undefeated_bonus_share(prized_player_count: u32) -> Share {
    match prized_player_count {
        0 | 1 => Share::WHOLE_POOL,
        2 => Share::from_percent(60),
        3 => Share::from_percent(40),
        _ => Share::from_percent(35),
    }
}

/// Splits the pool equally, after the undefeated bonus when one applies.
///
/// A single undefeated prized player takes the whole pool and no default
/// tier is produced; this is reported as
/// [`DegenerateInputWarning::SingleUndefeatedWinner`].
///
/// ## Example
/// ```rust
/// use prize_core::distribution::distribute_equal_split;
/// use prize_core::money::Money;
/// use prize_core::types::EqualSplitRules;
///
/// let rules = EqualSplitRules { prized_player_count: 5, undefeated_bonus: true };
/// let dist = distribute_equal_split(Money::from_whole_units(1000), &rules);
/// assert_eq!(dist.tiers[0].amount_per_player, Money::from_whole_units(350));
/// assert_eq!(dist.tiers[1].amount_per_player, Money::from_major_minor(162, 50));
/// ```
pub fn distribute_equal_split(net_pool: Money, rules: &EqualSplitRules) -> Distribution {
    let prized = rules.prized_player_count;
    let mut tiers = Vec::with_capacity(2);
    let mut warnings = Vec::new();

    let (shared_pool, sharing_players) = if rules.undefeated_bonus {
        let share = undefeated_bonus_share(prized);
        let bonus = net_pool.apply_share(share);
        debug!(prized, bonus_bps = share.bps(), %bonus, "undefeated bonus carved out");
        tiers.push(PrizeTier::new(TierKind::Undefeated, bonus, 1));
        (net_pool - bonus, prized.saturating_sub(1))
    } else {
        (net_pool, prized)
    };

    if sharing_players == 0 {
        if rules.undefeated_bonus {
            warn!("single prized player is undefeated, no default tier");
            warnings.push(DegenerateInputWarning::SingleUndefeatedWinner);
        }
        return Distribution {
            tiers,
            remainder: shared_pool,
            warnings,
        };
    }

    let (each, remainder) = shared_pool.split_evenly(sharing_players);
    tiers.push(PrizeTier::new(TierKind::Default, each, sharing_players));

    Distribution {
        tiers,
        remainder,
        warnings,
    }
}

// =============================================================================
// Fixed Percentage Tiers
// =============================================================================

/// Pays ranks 1, 2, 3-4 and 5-8 fixed percentages of the net pool.
///
/// ## Errors
/// [`ValidationError::TierWeighting`] when the percentages do not weight to
/// exactly 100; no skewed distribution is ever produced.
pub fn distribute_fixed_tiers(
    net_pool: Money,
    tiers: &TierPercentages,
) -> ValidationResult<Distribution> {
    validate_tier_percentages(tiers)?;

    let layout = [
        (TierKind::First, tiers.first, 1),
        (TierKind::Second, tiers.second, 1),
        (TierKind::ThirdFourth, tiers.third, 2),
        (TierKind::FifthEighth, tiers.fifth, 4),
    ];

    let prize_tiers: Vec<PrizeTier> = layout
        .into_iter()
        .map(|(kind, percent, players)| {
            let each = net_pool.apply_share(Share::from_percent(percent));
            PrizeTier::new(kind, each, players)
        })
        .collect();

    let paid: Money = prize_tiers.iter().map(PrizeTier::total).sum();

    Ok(Distribution {
        tiers: prize_tiers,
        remainder: net_pool - paid,
        warnings: Vec::new(),
    })
}

/// Derives 2nd, 3rd and 5th place percentages from a first-place percentage.
///
/// With `r = 100 − first`, 3rd and 5th get `r × 0.176` and `r × 0.088`
/// rounded to the nearest integer (halves up). 2nd takes whatever is left
/// so the tiers still weight to 100.
///
/// ## Example
/// ```rust
/// use prize_core::distribution::rebalance_from_first_place;
///
/// let tiers = rebalance_from_first_place(32).unwrap();
/// assert_eq!((tiers.second, tiers.third, tiers.fifth), (20, 12, 6));
/// ```
pub fn rebalance_from_first_place(first: u32) -> ValidationResult<TierPercentages> {
    validate_first_place_percent(first)?;

    let rest = 100 - first;
    let third = round_per_mille(rest, THIRD_RATIO_PER_MILLE);
    let fifth = round_per_mille(rest, FIFTH_RATIO_PER_MILLE);

    let second = i64::from(rest) - 2 * i64::from(third) - 4 * i64::from(fifth);
    let second = u32::try_from(second).map_err(|_| ValidationError::OutOfRange {
        field: "first".to_string(),
        min: 0,
        max: 100,
    })?;

    Ok(TierPercentages {
        first,
        second,
        third,
        fifth,
    })
}

/// `value × per_mille / 1000`, rounded half up.
const fn round_per_mille(value: u32, per_mille: u32) -> u32 {
    (value * per_mille + 500) / 1000
}

// =============================================================================
// Unit Tests
// =============================================================================
