//! # Domain Types
//!
//! Core domain types used throughout the prize calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌───────────────────────┐                       │
//! │  │ TournamentInput │   │      PayoutMode       │                       │
//! │  │  ─────────────  │   │  ───────────────────  │                       │
//! │  │  total_players  │──►│  EqualSplit           │                       │
//! │  │  entry_fee      │   │   └ EqualSplitRules   │                       │
//! │  │  is_friday_event│   │  FixedPercentageTiers │                       │
//! │  │  organizer_comp │   │   └ TierPercentages   │                       │
//! │  └─────────────────┘   └───────────────────────┘                       │
//! │           │                                                             │
//! │           ▼ compute_breakdown                                           │
//! │  ┌──────────────────────────────────────────────────────────────┐      │
//! │  │ PrizeBreakdown                                               │      │
//! │  │  tiers: [PrizeTier { kind, label, amount_per_player, count }]│      │
//! │  │  organizer_cut? friday_contribution? warnings               │      │
//! │  └──────────────────────────────────────────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types serialize in camelCase so the web form can consume the
//! generated TypeScript bindings without renaming anything.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Share
// =============================================================================

/// A fraction of a pool in basis points.
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so the bonus ratios (35%, 40%, 60%)
/// and the Friday reservation (10%) are exact integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Share(u32);

impl Share {
    /// Basis points in a whole pool.
    pub const WHOLE: u32 = 10_000;

    /// The entire pool.
    pub const WHOLE_POOL: Share = Share(Self::WHOLE);

    /// Creates a share from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Share(bps)
    }

    /// Creates a share from whole percentage points.
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        Share(percent * 100)
    }

    /// Returns the share in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the share as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Tournament Input
// =============================================================================

/// Everything the calculator needs to know about one finished tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TournamentInput {
    /// Players who paid the entry fee, including the organizer.
    pub total_players: u32,

    /// Entry fee per player.
    pub entry_fee: Money,

    /// A Friday tournament reserves part of its pool for a bigger event.
    pub is_friday_event: bool,

    /// Deduct the organizer's compensation from the pool.
    pub organizer_compensation: bool,

    /// How the net pool is divided.
    pub payout_mode: PayoutMode,
}

/// How the net pool is divided between prized players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum PayoutMode {
    /// Everyone in the prizes gets the same amount, optionally after an
    /// undefeated (X-0) player's bonus is carved out.
    EqualSplit(EqualSplitRules),

    /// Ranks 1, 2, 3-4 and 5-8 are paid fixed percentages.
    FixedPercentageTiers(TierPercentages),
}

/// Parameters of [`PayoutMode::EqualSplit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EqualSplitRules {
    /// Players in the prizes, usually those who went X-1 or better.
    pub prized_player_count: u32,

    /// One of the prized players went undefeated.
    #[serde(default)]
    pub undefeated_bonus: bool,
}

/// Percentage points per player for each fixed tier.
///
/// `first + second + 2 × third + 4 × fifth` must equal 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TierPercentages {
    /// 1st place.
    pub first: u32,
    /// 2nd place.
    pub second: u32,
    /// Each of 3rd and 4th place.
    pub third: u32,
    /// Each of 5th through 8th place.
    pub fifth: u32,
}

impl TierPercentages {
    /// Percentage points accounted for once every tier's players are paid.
    pub fn weighted_total(&self) -> u64 {
        let [first, second, third, fifth] =
            [self.first, self.second, self.third, self.fifth].map(u64::from);
        first + second + 2 * third + 4 * fifth
    }
}

// =============================================================================
// Prize Tiers
// =============================================================================

/// Which group of finishers a tier pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum TierKind {
    /// The undefeated player's bonus.
    Undefeated,
    /// The equal share paid to every other prized player.
    Default,
    /// 1st place.
    First,
    /// 2nd place.
    Second,
    /// 3rd and 4th place.
    ThirdFourth,
    /// 5th through 8th place.
    FifthEighth,
}

impl TierKind {
    /// Human-readable tier name.
    pub const fn label(&self) -> &'static str {
        match self {
            TierKind::Undefeated => "X-0 prize",
            TierKind::Default => "Default prize",
            TierKind::First => "1st place",
            TierKind::Second => "2nd place",
            TierKind::ThirdFourth => "3rd-4th place",
            TierKind::FifthEighth => "5th-8th place",
        }
    }
}

/// A group of equally-paid finishers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PrizeTier {
    pub kind: TierKind,
    pub label: String,
    /// Exact amount each player in this tier receives.
    pub amount_per_player: Money,
    pub player_count: u32,
}

impl PrizeTier {
    /// Creates a tier labelled after its kind.
    pub fn new(kind: TierKind, amount_per_player: Money, player_count: u32) -> Self {
        PrizeTier {
            kind,
            label: kind.label().to_string(),
            amount_per_player,
            player_count,
        }
    }

    /// Amount paid out to the whole tier.
    #[inline]
    pub fn total(&self) -> Money {
        self.amount_per_player.multiply_count(self.player_count)
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// An input the calculator handled, but whose result deserves a second look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum DegenerateInputWarning {
    /// The only prized player is undefeated, so they take the whole pool
    /// and there is no default tier.
    SingleUndefeatedWinner,
    /// Deductions consumed the whole pool; every prize is zero.
    EmptyPool,
}

impl DegenerateInputWarning {
    /// Explanation suitable for showing next to the result.
    pub const fn message(&self) -> &'static str {
        match self {
            DegenerateInputWarning::SingleUndefeatedWinner => {
                "the only prized player is undefeated and receives the entire pool"
            }
            DegenerateInputWarning::EmptyPool => {
                "deductions consumed the entire prize pool"
            }
        }
    }
}

/// The result of one calculation.
///
/// ## Accounting
/// ```text
/// gross_pool == Σ tier.total()
///             + organizer_deduction
///             + friday_contribution
///             + rounding_remainder
/// ```
/// `organizer_cut` is the flat fee shown to users. The full amount removed
/// from the pool (entry fee + flat fee) is `organizer_deduction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PrizeBreakdown {
    pub gross_pool: Money,
    pub net_pool: Money,
    pub tiers: Vec<PrizeTier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub organizer_cut: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub organizer_deduction: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub friday_contribution: Option<Money>,

    /// Minor units left over after flooring per-player amounts.
    pub rounding_remainder: Money,

    #[serde(default)]
    pub warnings: Vec<DegenerateInputWarning>,
}

impl PrizeBreakdown {
    /// Sum paid out across every tier.
    pub fn tier_payout_total(&self) -> Money {
        self.tiers.iter().map(PrizeTier::total).sum()
    }

    /// Everything the breakdown accounts for; equals `gross_pool`.
    pub fn accounted_total(&self) -> Money {
        self.tier_payout_total()
            + self.organizer_deduction.unwrap_or_default()
            + self.friday_contribution.unwrap_or_default()
            + self.rounding_remainder
    }

    /// Looks up the first tier of the given kind.
    pub fn tier(&self, kind: TierKind) -> Option<&PrizeTier> {
        self.tiers.iter().find(|t| t.kind == kind)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_conversions() {
        assert_eq!(Share::from_percent(35).bps(), 3500);
        assert!((Share::from_bps(825).percentage() - 8.25).abs() < 0.001);
    }

    #[test]
    fn test_weighted_total() {
        let tiers = TierPercentages {
            first: 32,
            second: 20,
            third: 12,
            fifth: 6,
        };
        assert_eq!(tiers.weighted_total(), 100);

        let huge = TierPercentages {
            first: u32::MAX,
            second: u32::MAX,
            third: u32::MAX,
            fifth: u32::MAX,
        };
        assert_eq!(huge.weighted_total(), 8 * u64::from(u32::MAX));
    }

    #[test]
    fn test_tier_labels() {
        let tier = PrizeTier::new(TierKind::ThirdFourth, Money::from_whole_units(120), 2);
        assert_eq!(tier.label, "3rd-4th place");
        assert_eq!(tier.total(), Money::from_whole_units(240));
    }

    #[test]
    fn test_payout_mode_json_shape() {
        let mode = PayoutMode::EqualSplit(EqualSplitRules {
            prized_player_count: 5,
            undefeated_bonus: true,
        });
        let json = serde_json::to_value(mode).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "mode": "equalSplit",
                "prizedPlayerCount": 5,
                "undefeatedBonus": true
            })
        );

        let parsed: PayoutMode = serde_json::from_str(
            r#"{"mode":"fixedPercentageTiers","first":32,"second":20,"third":12,"fifth":6}"#,
        )
        .unwrap();
        assert!(matches!(parsed, PayoutMode::FixedPercentageTiers(t) if t.first == 32));
    }

    #[test]
    fn test_breakdown_omits_absent_lines() {
        let breakdown = PrizeBreakdown {
            gross_pool: Money::from_whole_units(1000),
            net_pool: Money::from_whole_units(1000),
            tiers: vec![PrizeTier::new(TierKind::Default, Money::from_whole_units(200), 5)],
            organizer_cut: None,
            organizer_deduction: None,
            friday_contribution: None,
            rounding_remainder: Money::zero(),
            warnings: Vec::new(),
        };
        let json = serde_json::to_value(&breakdown).unwrap();
        assert!(json.get("organizerCut").is_none());
        assert!(json.get("fridayContribution").is_none());
        assert_eq!(breakdown.accounted_total(), breakdown.gross_pool);
    }
}
