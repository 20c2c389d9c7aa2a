use crate::{SessionConfig, SessionError, ShoeReport};
use d5sim_core::{
    balance_curve, compute_grid, Event, HandResult, RngState, RoadGrid, ShoeEngine, ShoeStats,
};
use tracing::info;

/// One table: an engine, the hands dealt from its current shoe and the
/// running balance of the D5 strategy.
#[derive(Debug)]
pub struct Session {
    pub config: SessionConfig,
    engine: ShoeEngine,
    history: Vec<HandResult>,
    balance: i64,
    finished: bool,
    shoe_number: u32,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.sim.validate()?;
        let rng = match config.sim.seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        let engine = ShoeEngine::new(config.sim.shoe, rng);
        Ok(Self::with_engine(config, engine))
    }

    /// Wraps an engine built elsewhere, typically over a stacked shoe.
    pub fn with_engine(config: SessionConfig, engine: ShoeEngine) -> Self {
        Self {
            config,
            engine,
            history: Vec::new(),
            balance: 0,
            finished: false,
            shoe_number: 1,
        }
    }

    /// Deals one hand. Returns `None` once the cut card is reached.
    pub fn step(&mut self) -> Option<&HandResult> {
        if self.finished {
            return None;
        }
        match self.engine.deal_next_hand(&self.history, self.balance) {
            Some(hand) => {
                self.balance = hand.running_balance;
                self.history.push(hand);
                self.history.last()
            }
            None => {
                self.finished = true;
                info!(
                    shoe = self.shoe_number,
                    hands = self.history.len(),
                    balance = self.balance,
                    "shoe finished"
                );
                None
            }
        }
    }

    /// Deals until the cut card. Returns the number of hands dealt.
    pub fn fast_forward(&mut self) -> usize {
        let mut dealt = 0;
        while self.step().is_some() {
            dealt += 1;
        }
        dealt
    }

    /// Starts a fresh shoe with an empty history and a zero balance.
    pub fn reset(&mut self) {
        self.engine.init_shoe();
        self.history.clear();
        self.balance = 0;
        self.finished = false;
        self.shoe_number += 1;
    }

    pub fn history(&self) -> &[HandResult] {
        &self.history
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn is_finished(&self) -> bool {
        self.finished || !self.engine.has_cards()
    }

    pub fn cards_remaining(&self) -> usize {
        self.engine.cards_remaining()
    }

    pub fn seed(&self) -> u64 {
        self.engine.seed()
    }

    pub fn shoe_number(&self) -> u32 {
        self.shoe_number
    }

    pub fn grid(&self) -> RoadGrid {
        compute_grid(&self.history, &self.config.sim.road)
    }

    pub fn stats(&self) -> ShoeStats {
        ShoeStats::from_history(&self.history)
    }

    pub fn curve(&self) -> Vec<(u32, i64)> {
        balance_curve(&self.history)
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.engine.drain_events()
    }

    pub fn report(&self) -> ShoeReport {
        ShoeReport {
            seed: self.seed(),
            shoe_number: self.shoe_number,
            shoe: *self.engine.config(),
            road: self.config.sim.road,
            cards_remaining: self.cards_remaining(),
            stats: self.stats(),
            hands: self.history.clone(),
        }
    }
}
