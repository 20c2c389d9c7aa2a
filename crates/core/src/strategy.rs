use crate::{HandResult, Side};

/// Margin at or above which D5 follows the last winner instead of fading it.
pub const D5_FOLLOW_DELTA: u8 = 5;

/// Most recent hand that was not a tie.
pub fn last_decisive(history: &[HandResult]) -> Option<&HandResult> {
    history.iter().rev().find(|hand| !hand.winner.is_tie())
}

/// The D5 bet for the hand after `history`.
///
/// Ties are skipped. If the last decisive hand was won by five points or
/// more, back the same side again; otherwise back the other side. With no
/// decisive hand yet there is no bet.
pub fn d5_bet(history: &[HandResult]) -> Option<Side> {
    let last = last_decisive(history)?;
    let winner = last.winner.side()?;
    if last.delta() >= D5_FOLLOW_DELTA {
        Some(winner)
    } else {
        Some(winner.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Winner};
    use chrono::Utc;

    fn hand(id: u32, player_score: u8, banker_score: u8) -> HandResult {
        HandResult {
            id,
            player_score,
            banker_score,
            winner: Winner::from_scores(player_score, banker_score),
            bet_placed: None,
            outcome: Outcome::NoBet,
            pnl: 0,
            running_balance: 0,
            timestamp: Utc::now(),
            player_cards: Vec::new(),
            banker_cards: Vec::new(),
        }
    }

    #[test]
    fn no_bet_without_history() {
        assert_eq!(d5_bet(&[]), None);
    }

    #[test]
    fn no_bet_when_only_ties() {
        let history = vec![hand(1, 4, 4), hand(2, 9, 9)];
        assert_eq!(d5_bet(&history), None);
    }

    #[test]
    fn follows_wide_margin() {
        let history = vec![hand(1, 5, 3), hand(2, 1, 9)];
        assert_eq!(d5_bet(&history), Some(Side::Banker));
    }

    #[test]
    fn fades_narrow_margin() {
        let history = vec![hand(1, 6, 2)];
        assert_eq!(d5_bet(&history), Some(Side::Banker));
        let history = vec![hand(1, 3, 7)];
        assert_eq!(d5_bet(&history), Some(Side::Player));
    }

    #[test]
    fn margin_of_exactly_five_follows() {
        let history = vec![hand(1, 7, 2)];
        assert_eq!(d5_bet(&history), Some(Side::Player));
    }

    #[test]
    fn skips_trailing_ties() {
        let history = vec![hand(1, 0, 8), hand(2, 5, 5), hand(3, 7, 7)];
        assert_eq!(d5_bet(&history), Some(Side::Banker));
    }
}
