//! # Rendering
//!
//! Turns a [`PrizeBreakdown`] into what the user reads.
//!
//! ## Result Lines
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  X-0 prize: 283 kr.                                                     │
//! │  Default prize: 131 kr. to 4 players.                                   │
//! │  Tournament organizer compensation: 50 kr.                              │
//! │  Prize money towards bigger tournament: 90 kr.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Amounts are floored to whole units here and only here. Lines with a
//! zero amount are left out.

use prize_core::distribution::undefeated_bonus_share;
use prize_core::{
    Money, PayoutMode, PrizeBreakdown, PrizeTier, TierKind, TierPercentages, TournamentInput,
    FRIDAY_CONTRIBUTION_SHARE, ORGANIZER_FLAT_FEE,
};

use crate::error::CliResult;

/// Formats an amount floored to whole units with the currency suffix.
fn whole(amount: Money, currency: &str) -> String {
    format!("{} {}", amount.whole_units(), currency)
}

/// Formats an exact amount with the currency suffix.
fn exact(amount: Money, currency: &str) -> String {
    format!("{} {}", amount, currency)
}

fn tier_line(tier: &PrizeTier, currency: &str) -> String {
    let amount = whole(tier.amount_per_player, currency);
    match tier.kind {
        TierKind::Default => format!(
            "{}: {} to {} {}.",
            tier.label,
            amount,
            tier.player_count,
            if tier.player_count == 1 { "player" } else { "players" }
        ),
        _ if tier.player_count > 1 => format!(
            "{}: {} each ({} players)",
            tier.label, amount, tier.player_count
        ),
        _ => format!("{}: {}", tier.label, amount),
    }
}

/// Result lines as shown after submitting the form.
pub fn breakdown_text(breakdown: &PrizeBreakdown, currency: &str) -> String {
    let mut lines: Vec<String> = breakdown
        .tiers
        .iter()
        .filter(|tier| !tier.amount_per_player.is_zero())
        .map(|tier| tier_line(tier, currency))
        .collect();

    if let Some(cut) = breakdown.organizer_cut {
        lines.push(format!(
            "Tournament organizer compensation: {}",
            whole(cut, currency)
        ));
    }
    if let Some(contribution) = breakdown.friday_contribution {
        lines.push(format!(
            "Prize money towards bigger tournament: {}",
            whole(contribution, currency)
        ));
    }
    for warning in &breakdown.warnings {
        lines.push(format!("Note: {}.", warning.message()));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// The ordered calculation steps with the values of this tournament.
pub fn explanation_text(
    input: &TournamentInput,
    breakdown: &PrizeBreakdown,
    currency: &str,
) -> String {
    let mut pool = breakdown.gross_pool;
    let mut lines = vec![
        "How the prize was calculated:".to_string(),
        format!(
            "1. Initial prize pool: {} players × {} = {}",
            input.total_players,
            exact(input.entry_fee, currency),
            exact(pool, currency)
        ),
    ];

    lines.push(match breakdown.organizer_deduction {
        Some(deduction) => {
            pool -= deduction;
            format!(
                "2. Organizer compensation: entry fee + {} = {} subtracted, leaving {}",
                exact(ORGANIZER_FLAT_FEE, currency),
                exact(deduction, currency),
                exact(pool, currency)
            )
        }
        None => "2. No organizer compensation.".to_string(),
    });

    lines.push(if input.is_friday_event {
        format!(
            "3. Friday tournament: {}% ({}) goes towards a bigger tournament, leaving {}",
            FRIDAY_CONTRIBUTION_SHARE.percentage(),
            exact(breakdown.friday_contribution.unwrap_or_default(), currency),
            exact(breakdown.net_pool, currency)
        )
    } else {
        "3. Not a Friday tournament.".to_string()
    });

    lines.push(format!("4. {}", distribution_step(input, breakdown, currency)));

    if !breakdown.rounding_remainder.is_zero() {
        lines.push(format!(
            "   {} is left over after rounding each prize down.",
            exact(breakdown.rounding_remainder, currency)
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn distribution_step(input: &TournamentInput, breakdown: &PrizeBreakdown, currency: &str) -> String {
    match &input.payout_mode {
        PayoutMode::EqualSplit(rules) if rules.undefeated_bonus => {
            let share = undefeated_bonus_share(rules.prized_player_count);
            let bonus = breakdown
                .tier(TierKind::Undefeated)
                .map(|t| t.amount_per_player)
                .unwrap_or_default();
            match breakdown.tier(TierKind::Default) {
                Some(rest) => format!(
                    "{}% ({}) goes to the X-0 player, the remaining {} is divided between {} players.",
                    share.percentage(),
                    exact(bonus, currency),
                    exact(breakdown.net_pool - bonus, currency),
                    rest.player_count
                ),
                None => format!(
                    "The X-0 player is the only player in prizes and receives {}.",
                    exact(bonus, currency)
                ),
            }
        }
        PayoutMode::EqualSplit(rules) => format!(
            "The prize pool is divided equally amongst {} players in prizes.",
            rules.prized_player_count
        ),
        PayoutMode::FixedPercentageTiers(tiers) => format!(
            "Fixed tiers of the prize pool: {}.",
            tiers_summary(tiers)
        ),
    }
}

fn tiers_summary(tiers: &TierPercentages) -> String {
    format!(
        "1st {}%, 2nd {}%, 3rd-4th {}% each, 5th-8th {}% each",
        tiers.first, tiers.second, tiers.third, tiers.fifth
    )
}

/// Output of the `rebalance` command.
pub fn tiers_text(tiers: &TierPercentages) -> String {
    format!("{}\n", tiers_summary(tiers))
}

/// Pretty JSON for scripts and the web front-end.
pub fn json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use prize_core::{compute_breakdown, EqualSplitRules};

    fn input(organizer: bool, friday: bool, payout_mode: PayoutMode) -> TournamentInput {
        TournamentInput {
            total_players: 20,
            entry_fee: Money::from_whole_units(50),
            is_friday_event: friday,
            organizer_compensation: organizer,
            payout_mode,
        }
    }

    fn equal_split(prized: u32, bonus: bool) -> PayoutMode {
        PayoutMode::EqualSplit(EqualSplitRules {
            prized_player_count: prized,
            undefeated_bonus: bonus,
        })
    }

    #[test]
    fn test_breakdown_text_floors_amounts() {
        let input = input(true, true, equal_split(5, true));
        let breakdown = compute_breakdown(&input).unwrap();

        assert_eq!(
            breakdown_text(&breakdown, "kr."),
            "X-0 prize: 283 kr.\n\
             Default prize: 131 kr. to 4 players.\n\
             Tournament organizer compensation: 50 kr.\n\
             Prize money towards bigger tournament: 90 kr.\n"
        );
    }

    #[test]
    fn test_breakdown_text_fixed_tiers() {
        let tiers = TierPercentages {
            first: 32,
            second: 20,
            third: 12,
            fifth: 6,
        };
        let breakdown =
            compute_breakdown(&input(false, false, PayoutMode::FixedPercentageTiers(tiers))).unwrap();

        assert_eq!(
            breakdown_text(&breakdown, "kr."),
            "1st place: 320 kr.\n\
             2nd place: 200 kr.\n\
             3rd-4th place: 120 kr. each (2 players)\n\
             5th-8th place: 60 kr. each (4 players)\n"
        );
    }

    #[test]
    fn test_breakdown_text_reports_warnings() {
        let breakdown = compute_breakdown(&input(false, false, equal_split(1, true))).unwrap();
        let text = breakdown_text(&breakdown, "kr.");

        assert!(text.starts_with("X-0 prize: 1000 kr.\n"));
        assert!(text.contains("Note: the only prized player is undefeated"));
    }

    #[test]
    fn test_explanation_walks_through_each_step() {
        let input = input(true, true, equal_split(5, false));
        let breakdown = compute_breakdown(&input).unwrap();
        let text = explanation_text(&input, &breakdown, "kr.");

        assert!(text.contains("1. Initial prize pool: 20 players × 50.00 kr. = 1000.00 kr."));
        assert!(text.contains("100.00 kr. subtracted, leaving 900.00 kr."));
        assert!(text.contains("3. Friday tournament: 10% (90.00 kr.)"));
        assert!(text.contains("leaving 810.00 kr."));
        assert!(text.contains("divided equally amongst 5 players"));
    }

    #[test]
    fn test_explanation_lists_every_step_in_order() {
        let input = input(true, true, equal_split(5, true));
        let breakdown = compute_breakdown(&input).unwrap();

        assert_eq!(
            explanation_text(&input, &breakdown, "kr."),
            "How the prize was calculated:\n\
             1. Initial prize pool: 20 players × 50.00 kr. = 1000.00 kr.\n\
             2. Organizer compensation: entry fee + 50.00 kr. = 100.00 kr. subtracted, leaving 900.00 kr.\n\
             3. Friday tournament: 10% (90.00 kr.) goes towards a bigger tournament, leaving 810.00 kr.\n\
             4. 35% (283.50 kr.) goes to the X-0 player, the remaining 526.50 kr. is divided between 4 players.\n   \
             0.02 kr. is left over after rounding each prize down.\n"
        );
    }

    #[test]
    fn test_explanation_for_bonus() {
        let input = input(false, false, equal_split(5, true));
        let breakdown = compute_breakdown(&input).unwrap();
        let text = explanation_text(&input, &breakdown, "kr.");

        assert!(text.contains("2. No organizer compensation."));
        assert!(text.contains("3. Not a Friday tournament."));
        assert!(text.contains(
            "35% (350.00 kr.) goes to the X-0 player, the remaining 650.00 kr. is divided between 4 players."
        ));
    }

    #[test]
    fn test_tiers_text() {
        let tiers = prize_core::rebalance_from_first_place(32).unwrap();
        assert_eq!(
            tiers_text(&tiers),
            "1st 32%, 2nd 20%, 3rd-4th 12% each, 5th-8th 6% each\n"
        );
    }
}
