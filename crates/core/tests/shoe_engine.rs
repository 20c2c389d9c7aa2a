use d5sim_core::{
    d5_bet, hand_score, Outcome, RngState, ShoeConfig, ShoeEngine, Winner,
};

fn play_out(seed: u64, config: ShoeConfig) -> (ShoeEngine, Vec<d5sim_core::HandResult>) {
    let mut engine = ShoeEngine::new(config, RngState::from_seed(seed));
    let mut history = Vec::new();
    let mut balance = 0;
    while let Some(hand) = engine.deal_next_hand(&history, balance) {
        balance = hand.running_balance;
        history.push(hand);
    }
    (engine, history)
}

macro_rules! shoe_case {
    ($name:ident, $seed:expr, $decks:expr) => {
        #[test]
        fn $name() {
            let config = ShoeConfig {
                deck_count: $decks,
                ..ShoeConfig::default()
            };
            let (engine, history) = play_out($seed, config);
            assert!(!history.is_empty());

            // Cut card: play stopped exactly at the padding.
            assert!(!engine.has_cards());
            assert!(engine.cards_remaining() <= config.cut_card_padding);
            assert!(engine.cards_remaining() + 6 > config.cut_card_padding);

            // Every card is accounted for.
            let burn = engine.last_burn().expect("burn");
            let dealt: usize = history
                .iter()
                .map(|hand| hand.player_cards.len() + hand.banker_cards.len())
                .sum();
            assert_eq!(
                1 + burn.burned + dealt + engine.cards_remaining(),
                config.total_cards()
            );

            let mut previous_balance = 0;
            for (idx, hand) in history.iter().enumerate() {
                assert_eq!(hand.id as usize, idx + 1);
                assert!(hand.player_score <= 9 && hand.banker_score <= 9);
                assert_eq!(hand.player_score, hand_score(&hand.player_cards));
                assert_eq!(hand.banker_score, hand_score(&hand.banker_cards));
                assert_eq!(
                    hand.winner,
                    Winner::from_scores(hand.player_score, hand.banker_score)
                );
                assert_eq!(hand.bet_placed, d5_bet(&history[..idx]));

                assert!((-1..=1).contains(&hand.pnl));
                assert_eq!(hand.outcome == Outcome::NoBet, hand.bet_placed.is_none());
                assert_eq!(
                    hand.outcome == Outcome::Push,
                    hand.winner == Winner::Tie && hand.bet_placed.is_some()
                );
                assert_eq!(hand.running_balance, previous_balance + hand.pnl);
                previous_balance = hand.running_balance;
            }
        }
    };
}

shoe_case!(eight_deck_seed_1, 1, 8);
shoe_case!(eight_deck_seed_2, 2, 8);
shoe_case!(eight_deck_seed_3, 3, 8);
shoe_case!(eight_deck_seed_42, 42, 8);
shoe_case!(eight_deck_seed_c0ffee, 0xC0FFEE, 8);
shoe_case!(six_deck_seed_7, 7, 6);
shoe_case!(six_deck_seed_8, 8, 6);
shoe_case!(single_deck_seed_5, 5, 1);
shoe_case!(single_deck_seed_9, 9, 1);

#[test]
fn same_seed_replays_same_shoe() {
    let (_, first) = play_out(1234, ShoeConfig::default());
    let (_, second) = play_out(1234, ShoeConfig::default());
    let strip = |hands: &[d5sim_core::HandResult]| {
        hands
            .iter()
            .map(|hand| (hand.player_cards.clone(), hand.banker_cards.clone(), hand.outcome))
            .collect::<Vec<_>>()
    };
    assert_eq!(strip(&first), strip(&second));
}

#[test]
fn reset_rebuilds_a_full_shoe() {
    let mut engine = ShoeEngine::new(ShoeConfig::default(), RngState::from_seed(77));
    let first = engine.deal_next_hand(&[], 0).expect("first shoe");
    engine.init_shoe();
    let fresh = engine.cards_remaining();
    assert!(engine.has_cards());
    let burn = engine.last_burn().expect("burn");
    assert_eq!(1 + burn.burned + fresh, 416);
    let second = engine.deal_next_hand(&[], 0).expect("second shoe");
    assert_eq!(second.id, first.id);
}

#[test]
fn strategy_is_repeatable_over_prefixes() {
    let (_, history) = play_out(31, ShoeConfig::default());
    for idx in 0..history.len() {
        let before = d5_bet(&history[..idx]);
        let again = d5_bet(&history[..idx]);
        assert_eq!(before, again);
    }
}
