use crate::Card;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A side a bet can stand on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Banker,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Banker,
            Side::Banker => Side::Player,
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Side::Player => "P",
            Side::Banker => "B",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Banker,
    Tie,
}

impl Winner {
    pub fn from_scores(player_score: u8, banker_score: u8) -> Self {
        match player_score.cmp(&banker_score) {
            std::cmp::Ordering::Greater => Winner::Player,
            std::cmp::Ordering::Less => Winner::Banker,
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }

    /// The winning side, or `None` for a tie.
    pub fn side(self) -> Option<Side> {
        match self {
            Winner::Player => Some(Side::Player),
            Winner::Banker => Some(Side::Banker),
            Winner::Tie => None,
        }
    }

    pub fn is_tie(self) -> bool {
        matches!(self, Winner::Tie)
    }

    pub fn short(self) -> &'static str {
        match self {
            Winner::Player => "P",
            Winner::Banker => "B",
            Winner::Tie => "T",
        }
    }
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Winner::Player,
            Side::Banker => Winner::Banker,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Push,
    NoBet,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Win => "WIN",
            Outcome::Loss => "LOSS",
            Outcome::Push => "PUSH",
            Outcome::NoBet => "NO_BET",
        }
    }
}

/// Settles a flat one-unit bet. A tie pushes any standing bet.
pub fn settle(bet: Option<Side>, winner: Winner) -> (Outcome, i64) {
    let Some(bet) = bet else {
        return (Outcome::NoBet, 0);
    };
    match winner.side() {
        Some(side) if side == bet => (Outcome::Win, 1),
        None => (Outcome::Push, 0),
        Some(_) => (Outcome::Loss, -1),
    }
}

/// One settled coup. Never mutated once dealt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub id: u32,
    pub player_score: u8,
    pub banker_score: u8,
    pub winner: Winner,
    pub bet_placed: Option<Side>,
    pub outcome: Outcome,
    pub pnl: i64,
    pub running_balance: i64,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub player_cards: Vec<Card>,
    #[serde(default)]
    pub banker_cards: Vec<Card>,
}

impl HandResult {
    pub fn delta(&self) -> u8 {
        self.player_score.abs_diff(self.banker_score)
    }
}
