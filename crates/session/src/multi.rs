use crate::{Session, SessionConfig, SessionError};
use d5sim_core::{RngState, ShoeStats, SimConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoeSummary {
    pub seed: u64,
    pub stats: ShoeStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiShoeSummary {
    pub base_seed: u64,
    pub shoes: Vec<ShoeSummary>,
}

impl MultiShoeSummary {
    pub fn total_hands(&self) -> usize {
        self.shoes.iter().map(|shoe| shoe.stats.hands).sum()
    }

    pub fn total_balance(&self) -> i64 {
        self.shoes.iter().map(|shoe| shoe.stats.final_balance).sum()
    }

    pub fn winning_shoes(&self) -> usize {
        self.shoes
            .iter()
            .filter(|shoe| shoe.stats.final_balance > 0)
            .count()
    }

    pub fn best(&self) -> Option<&ShoeSummary> {
        self.shoes.iter().max_by_key(|shoe| shoe.stats.final_balance)
    }

    pub fn worst(&self) -> Option<&ShoeSummary> {
        self.shoes.iter().min_by_key(|shoe| shoe.stats.final_balance)
    }

    /// Wins over resolved bets across every shoe.
    pub fn win_rate(&self) -> Option<f64> {
        let won: usize = self.shoes.iter().map(|shoe| shoe.stats.bets_won).sum();
        let lost: usize = self.shoes.iter().map(|shoe| shoe.stats.bets_lost).sum();
        if won + lost == 0 {
            return None;
        }
        Some(won as f64 / (won + lost) as f64)
    }
}

/// Plays `count` independent shoes to the cut card. Shoe `i` is seeded with
/// `base_seed + i`, so any single shoe can be replayed on its own.
pub fn run_shoes(sim: &SimConfig, count: usize) -> Result<MultiShoeSummary, SessionError> {
    sim.validate()?;
    let base_seed = sim
        .seed
        .unwrap_or_else(|| RngState::from_entropy().next_u64());
    let mut shoes = Vec::with_capacity(count);
    for idx in 0..count {
        let seed = base_seed.wrapping_add(idx as u64);
        let mut session = Session::new(SessionConfig::new(SimConfig {
            seed: Some(seed),
            ..sim.clone()
        }))?;
        session.fast_forward();
        shoes.push(ShoeSummary {
            seed,
            stats: session.stats(),
        });
    }
    let summary = MultiShoeSummary { base_seed, shoes };
    info!(
        shoes = count,
        hands = summary.total_hands(),
        balance = summary.total_balance(),
        "multi-shoe run finished"
    );
    Ok(summary)
}
