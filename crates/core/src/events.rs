use crate::{Card, Outcome, Side, Winner};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    ShoeShuffled {
        seed: u64,
        cards: usize,
    },
    CardsBurned {
        indicator: Card,
        burned: usize,
        remaining: usize,
    },
    HandSettled {
        id: u32,
        winner: Winner,
        bet: Option<Side>,
        outcome: Outcome,
        running_balance: i64,
        remaining: usize,
    },
    CutCardReached {
        remaining: usize,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
