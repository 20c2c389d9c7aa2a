use crate::{HandResult, Outcome, Winner};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoeStats {
    pub hands: usize,
    pub player_wins: usize,
    pub banker_wins: usize,
    pub ties: usize,
    pub bets_won: usize,
    pub bets_lost: usize,
    pub bets_pushed: usize,
    pub final_balance: i64,
    pub peak_balance: i64,
    /// Lowest running balance, never above zero.
    pub max_drawdown: i64,
}

impl ShoeStats {
    pub fn from_history(history: &[HandResult]) -> Self {
        let mut stats = Self {
            hands: history.len(),
            ..Self::default()
        };
        for hand in history {
            match hand.winner {
                Winner::Player => stats.player_wins += 1,
                Winner::Banker => stats.banker_wins += 1,
                Winner::Tie => stats.ties += 1,
            }
            match hand.outcome {
                Outcome::Win => stats.bets_won += 1,
                Outcome::Loss => stats.bets_lost += 1,
                Outcome::Push => stats.bets_pushed += 1,
                Outcome::NoBet => {}
            }
            stats.peak_balance = stats.peak_balance.max(hand.running_balance);
            stats.max_drawdown = stats.max_drawdown.min(hand.running_balance);
        }
        stats.final_balance = history.last().map(|hand| hand.running_balance).unwrap_or(0);
        stats
    }

    /// Share of resolved bets that won. Pushes and hands without a bet are
    /// left out.
    pub fn win_rate(&self) -> Option<f64> {
        let resolved = self.bets_won + self.bets_lost;
        if resolved == 0 {
            return None;
        }
        Some(self.bets_won as f64 / resolved as f64)
    }

    pub fn bets_placed(&self) -> usize {
        self.bets_won + self.bets_lost + self.bets_pushed
    }
}

/// Balance curve for the performance chart: starts at `(0, 0)` and adds a
/// point per decisive hand. Ties do not move the x axis.
pub fn balance_curve(history: &[HandResult]) -> Vec<(u32, i64)> {
    let mut points = vec![(0, 0)];
    let mut step = 0u32;
    for hand in history.iter().filter(|hand| !hand.winner.is_tie()) {
        step += 1;
        points.push((step, hand.running_balance));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;
    use chrono::Utc;

    fn hand(id: u32, winner: Winner, outcome: Outcome, running_balance: i64) -> HandResult {
        HandResult {
            id,
            player_score: 0,
            banker_score: 0,
            winner,
            bet_placed: (outcome != Outcome::NoBet).then_some(Side::Banker),
            outcome,
            pnl: 0,
            running_balance,
            timestamp: Utc::now(),
            player_cards: Vec::new(),
            banker_cards: Vec::new(),
        }
    }

    fn sample() -> Vec<HandResult> {
        vec![
            hand(1, Winner::Player, Outcome::NoBet, 0),
            hand(2, Winner::Player, Outcome::Loss, -1),
            hand(3, Winner::Tie, Outcome::Push, -1),
            hand(4, Winner::Banker, Outcome::Loss, -2),
            hand(5, Winner::Banker, Outcome::Win, -1),
            hand(6, Winner::Player, Outcome::Win, 0),
            hand(7, Winner::Player, Outcome::Win, 1),
        ]
    }

    #[test]
    fn counts_winners_and_outcomes() {
        let stats = ShoeStats::from_history(&sample());
        assert_eq!(stats.hands, 7);
        assert_eq!(stats.player_wins, 4);
        assert_eq!(stats.banker_wins, 2);
        assert_eq!(stats.ties, 1);
        assert_eq!(stats.bets_won, 3);
        assert_eq!(stats.bets_lost, 2);
        assert_eq!(stats.bets_pushed, 1);
        assert_eq!(stats.bets_placed(), 6);
        assert_eq!(stats.final_balance, 1);
        assert_eq!(stats.peak_balance, 1);
        assert_eq!(stats.max_drawdown, -2);
        assert_eq!(stats.win_rate(), Some(0.6));
    }

    #[test]
    fn empty_history_has_no_win_rate() {
        let stats = ShoeStats::from_history(&[]);
        assert_eq!(stats.win_rate(), None);
        assert_eq!(stats.max_drawdown, 0);
    }

    #[test]
    fn curve_skips_ties() {
        let curve = balance_curve(&sample());
        assert_eq!(
            curve,
            vec![(0, 0), (1, 0), (2, -1), (3, -2), (4, -1), (5, 0), (6, 1)]
        );
    }
}
