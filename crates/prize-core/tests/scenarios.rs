//! Worked examples of complete calculations.

use prize_core::{
    compute_breakdown, rebalance_from_first_place, CoreError, DegenerateInputWarning,
    EqualSplitRules, Money, PayoutMode, TierKind, TierPercentages, TournamentInput,
    ValidationError,
};

fn units(n: i64) -> Money {
    Money::from_whole_units(n)
}

fn tournament(organizer: bool, friday: bool, payout_mode: PayoutMode) -> TournamentInput {
    TournamentInput {
        total_players: 20,
        entry_fee: units(50),
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
fn equal_split_without_bonus() {
    let breakdown = compute_breakdown(&tournament(false, false, equal_split(5, false))).unwrap();

    assert_eq!(breakdown.gross_pool, units(1000));
    assert_eq!(breakdown.net_pool, units(1000));
    assert_eq!(breakdown.tiers.len(), 1);
    assert_eq!(breakdown.tiers[0].kind, TierKind::Default);
    assert_eq!(breakdown.tiers[0].amount_per_player, units(200));
    assert_eq!(breakdown.tiers[0].player_count, 5);
    assert_eq!(breakdown.organizer_cut, None);
    assert_eq!(breakdown.friday_contribution, None);
}

#[test]
fn equal_split_with_undefeated_bonus() {
    let breakdown = compute_breakdown(&tournament(false, false, equal_split(5, true))).unwrap();

    let bonus = breakdown.tier(TierKind::Undefeated).unwrap();
    assert_eq!(bonus.amount_per_player, units(350));
    assert_eq!(bonus.player_count, 1);

    let rest = breakdown.tier(TierKind::Default).unwrap();
    assert_eq!(rest.amount_per_player, Money::from_major_minor(162, 50));
    assert_eq!(rest.player_count, 4);
    assert!(breakdown.rounding_remainder.is_zero());
}

#[test]
fn organizer_and_friday_deductions() {
    let breakdown = compute_breakdown(&tournament(true, true, equal_split(5, false))).unwrap();

    assert_eq!(breakdown.gross_pool, units(1000));
    assert_eq!(breakdown.net_pool, units(810));
    assert_eq!(breakdown.friday_contribution, Some(units(90)));
    assert_eq!(breakdown.organizer_cut, Some(units(50)));
    assert_eq!(breakdown.organizer_deduction, Some(units(100)));
}

#[test]
fn fixed_percentage_tiers() {
    let mode = PayoutMode::FixedPercentageTiers(TierPercentages {
        first: 32,
        second: 20,
        third: 12,
        fifth: 6,
    });
    let breakdown = compute_breakdown(&tournament(false, false, mode)).unwrap();

    let paid: Vec<(&str, i64, u32)> = breakdown
        .tiers
        .iter()
        .map(|t| (t.label.as_str(), t.amount_per_player.whole_units(), t.player_count))
        .collect();
    assert_eq!(
        paid,
        vec![
            ("1st place", 320, 1),
            ("2nd place", 200, 1),
            ("3rd-4th place", 120, 2),
            ("5th-8th place", 60, 4),
        ]
    );
    assert_eq!(breakdown.tier_payout_total(), units(1000));
}

#[test]
fn skewed_tiers_fail_validation() {
    let mode = PayoutMode::FixedPercentageTiers(TierPercentages {
        first: 25,
        second: 25,
        third: 20,
        fifth: 5,
    });
    let err = compute_breakdown(&tournament(false, false, mode)).unwrap_err();
    assert_eq!(
        err,
        CoreError::Validation(ValidationError::TierWeighting {
            weighted_total: 110
        })
    );
}

#[test]
fn rebalanced_tiers_are_accepted() {
    let tiers = rebalance_from_first_place(40).unwrap();
    let breakdown = compute_breakdown(&tournament(true, true, PayoutMode::FixedPercentageTiers(tiers)))
        .unwrap();
    assert_eq!(breakdown.tiers.len(), 4);
    assert_eq!(breakdown.accounted_total(), breakdown.gross_pool);
}

#[test]
fn lone_undefeated_winner_takes_the_pool() {
    let breakdown = compute_breakdown(&tournament(true, true, equal_split(1, true))).unwrap();

    assert_eq!(breakdown.tiers.len(), 1);
    assert_eq!(breakdown.tiers[0].kind, TierKind::Undefeated);
    assert_eq!(breakdown.tiers[0].amount_per_player, units(810));
    assert_eq!(
        breakdown.warnings,
        vec![DegenerateInputWarning::SingleUndefeatedWinner]
    );
}

#[test]
fn breakdown_serializes_for_the_web_form() {
    let breakdown = compute_breakdown(&tournament(true, false, equal_split(5, false))).unwrap();
    let json = serde_json::to_value(&breakdown).unwrap();

    assert_eq!(json["grossPool"], 100_000);
    assert_eq!(json["netPool"], 90_000);
    assert_eq!(json["organizerCut"], 5_000);
    assert!(json.get("fridayContribution").is_none());
    assert_eq!(json["tiers"][0]["label"], "Default prize");
    assert_eq!(json["tiers"][0]["amountPerPlayer"], 18_000);
}
