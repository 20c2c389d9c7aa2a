use crate::{
    d5_bet, deal_coup, settle, BurnReport, Event, EventBus, HandResult, RngState, Shoe,
    ShoeConfig, Winner,
};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Owns one shoe and settles hands dealt from it.
///
/// The engine never sees the history except as a borrowed slice; the caller
/// owns the hand records and the balance.
#[derive(Debug)]
pub struct ShoeEngine {
    config: ShoeConfig,
    rng: RngState,
    shoe: Shoe,
    last_burn: Option<BurnReport>,
    events: EventBus,
}

impl ShoeEngine {
    /// Builds, shuffles and burns a fresh shoe.
    pub fn new(config: ShoeConfig, rng: RngState) -> Self {
        let mut engine = Self {
            config,
            rng,
            shoe: Shoe::default(),
            last_burn: None,
            events: EventBus::default(),
        };
        engine.init_shoe();
        engine
    }

    /// Uses `shoe` exactly as stacked: no shuffle, no burn.
    pub fn with_shoe(config: ShoeConfig, shoe: Shoe) -> Self {
        Self {
            config,
            rng: RngState::from_seed(0),
            shoe,
            last_burn: None,
            events: EventBus::default(),
        }
    }

    /// Replaces the shoe with `deck_count` fresh decks, shuffled and burned.
    /// The random source carries on, so successive shoes differ.
    pub fn init_shoe(&mut self) {
        let mut shoe = Shoe::build(self.config.deck_count);
        shoe.shuffle(&mut self.rng);
        self.events.push(Event::ShoeShuffled {
            seed: self.rng.seed(),
            cards: shoe.len(),
        });
        self.last_burn = shoe.burn();
        if let Some(burn) = self.last_burn.as_ref() {
            self.events.push(Event::CardsBurned {
                indicator: burn.indicator,
                burned: burn.burned,
                remaining: shoe.len(),
            });
            info!(
                seed = self.rng.seed(),
                indicator = %burn.indicator,
                burned = burn.burned,
                remaining = shoe.len(),
                "new shoe"
            );
        }
        self.shoe = shoe;
    }

    /// False once the shoe is down to the cut card.
    pub fn has_cards(&self) -> bool {
        self.shoe.len() > self.config.cut_card_padding
    }

    /// Deals and settles the next hand, or `None` once the cut card is
    /// reached. The D5 bet is fixed from `history` before any card is drawn.
    pub fn deal_next_hand(
        &mut self,
        history: &[HandResult],
        current_balance: i64,
    ) -> Option<HandResult> {
        if !self.has_cards() {
            debug!(remaining = self.shoe.len(), "cut card reached");
            self.events.push(Event::CutCardReached {
                remaining: self.shoe.len(),
            });
            return None;
        }

        let id = history.len() as u32 + 1;
        let bet = d5_bet(history);
        let coup = match deal_coup(&mut self.shoe) {
            Ok(coup) => coup,
            Err(err) => {
                warn!(id, error = %err, "coup abandoned");
                return None;
            }
        };

        let player_score = coup.player_score();
        let banker_score = coup.banker_score();
        let winner = Winner::from_scores(player_score, banker_score);
        let (outcome, pnl) = settle(bet, winner);
        let running_balance = current_balance + pnl;

        debug!(
            id,
            player_score,
            banker_score,
            ?winner,
            ?bet,
            ?outcome,
            running_balance,
            "hand settled"
        );
        self.events.push(Event::HandSettled {
            id,
            winner,
            bet,
            outcome,
            running_balance,
            remaining: self.shoe.len(),
        });

        Some(HandResult {
            id,
            player_score,
            banker_score,
            winner,
            bet_placed: bet,
            outcome,
            pnl,
            running_balance,
            timestamp: Utc::now(),
            player_cards: coup.player,
            banker_cards: coup.banker,
        })
    }

    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn config(&self) -> &ShoeConfig {
        &self.config
    }

    pub fn last_burn(&self) -> Option<&BurnReport> {
        self.last_burn.as_ref()
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain().collect()
    }
}
