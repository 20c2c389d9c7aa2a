use crate::SessionError;
use d5sim_core::{compute_grid, HandResult, RoadConfig, RoadGrid, ShoeConfig, ShoeStats, Side};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoeReport {
    pub seed: u64,
    pub shoe_number: u32,
    pub shoe: ShoeConfig,
    pub road: RoadConfig,
    pub cards_remaining: usize,
    pub stats: ShoeStats,
    pub hands: Vec<HandResult>,
}

impl ShoeReport {
    pub fn grid(&self) -> RoadGrid {
        compute_grid(&self.hands, &self.road)
    }

    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!(
                "shoe {} | seed {:#x} | decks {} | cut card {} | left {}",
                self.shoe_number,
                self.seed,
                self.shoe.deck_count,
                self.shoe.cut_card_padding,
                self.cards_remaining
            ),
            summary_line(&self.stats),
            String::new(),
            "hands:".to_string(),
            format!("  {}", log_header()),
        ];
        for hand in &self.hands {
            lines.push(format!("  {}", log_row(hand)));
        }
        lines.push(String::new());
        lines.push("big road:".to_string());
        for row in road_lines(&self.grid()) {
            lines.push(format!("  {row}"));
        }
        lines.join("\n")
    }
}

pub fn summary_line(stats: &ShoeStats) -> String {
    let win_rate = stats
        .win_rate()
        .map(|rate| format!("{:.1}%", rate * 100.0))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "hands {} | banker {} player {} tie {} | D5 won {} lost {} push {} | win rate {} | balance {:+} | peak {:+} | drawdown {}",
        stats.hands,
        stats.banker_wins,
        stats.player_wins,
        stats.ties,
        stats.bets_won,
        stats.bets_lost,
        stats.bets_pushed,
        win_rate,
        stats.final_balance,
        stats.peak_balance,
        stats.max_drawdown
    )
}

pub fn log_header() -> String {
    format!(
        "{:>4}  {:<2} {:<6}  {:>5}  {:>2}  {:>3}  {:>5}  cards",
        "#", "W", "result", "score", "Δ", "bet", "sum"
    )
}

/// One row of the hand log: id, winner, outcome, score, margin, bet,
/// running balance and the cards each side held.
pub fn log_row(hand: &HandResult) -> String {
    let bet = hand.bet_placed.map(Side::short).unwrap_or("-");
    let cards = |cards: &[d5sim_core::Card]| {
        cards
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };
    format!(
        "{:>4}  {:<2} {:<6}  {:>2}-{:<2}  {:>2}  {:>3}  {:>+5}  P[{}] B[{}]",
        hand.id,
        hand.winner.short(),
        hand.outcome.label(),
        hand.player_score,
        hand.banker_score,
        hand.delta(),
        bet,
        hand.running_balance,
        cards(&hand.player_cards),
        cards(&hand.banker_cards)
    )
}

/// Text rendering of the occupied part of the road. `P` and `B` mark beads;
/// lowercase means ties were dealt before that bead. Empty cells are `.`.
pub fn road_lines(grid: &RoadGrid) -> Vec<String> {
    let width = grid.occupied_columns().max(1);
    (0..grid.rows())
        .map(|row| {
            grid.row(row)
                .take(width)
                .map(|cell| match cell {
                    Some(bead) => {
                        let mark = match bead.winner {
                            Side::Player => 'P',
                            Side::Banker => 'B',
                        };
                        if bead.tie_count > 0 {
                            mark.to_ascii_lowercase()
                        } else {
                            mark
                        }
                    }
                    None => '.',
                })
                .collect()
        })
        .collect()
}

pub fn write_json(path: &Path, report: &ShoeReport) -> Result<(), SessionError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(report)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, report: &ShoeReport) -> Result<(), SessionError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, report.to_text_report())?;
    Ok(())
}
