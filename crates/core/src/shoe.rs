use crate::{Card, Rank, RngState, Suit};
use thiserror::Error;

pub const CARDS_PER_DECK: usize = 52;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShoeError {
    #[error("shoe is empty")]
    Empty,
}

/// Cards removed from the top of a fresh shoe before play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnReport {
    pub indicator: Card,
    pub burned: usize,
}

/// A stack of cards dealt from the end of the vector.
#[derive(Debug, Default, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Unshuffled shoe of `deck_count` standard decks.
    pub fn build(deck_count: usize) -> Self {
        let mut cards = Vec::with_capacity(deck_count * CARDS_PER_DECK);
        for _ in 0..deck_count {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }
        Self { cards }
    }

    /// Stacked shoe; the last card of `cards` is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    /// Turns the indicator card and discards as many cards as it burns.
    /// Returns `None` on an empty shoe.
    pub fn burn(&mut self) -> Option<BurnReport> {
        let indicator = self.cards.pop()?;
        let mut burned = 0;
        for _ in 0..indicator.burn_count() {
            if self.cards.pop().is_none() {
                break;
            }
            burned += 1;
        }
        Some(BurnReport { indicator, burned })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_contains_every_card_once_per_deck() {
        let shoe = Shoe::build(8);
        assert_eq!(shoe.len(), 8 * CARDS_PER_DECK);
        let aces_of_spades = shoe
            .cards()
            .iter()
            .filter(|card| **card == Card::new(Suit::Spades, Rank::Ace))
            .count();
        assert_eq!(aces_of_spades, 8);
    }

    #[test]
    fn draw_takes_from_the_end() {
        let mut shoe = Shoe::from_cards(vec![
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Clubs, Rank::King),
        ]);
        assert_eq!(shoe.draw(), Ok(Card::new(Suit::Clubs, Rank::King)));
        assert_eq!(shoe.draw(), Ok(Card::new(Suit::Hearts, Rank::Two)));
        assert_eq!(shoe.draw(), Err(ShoeError::Empty));
    }

    #[test]
    fn burn_discards_indicator_count() {
        let mut cards = vec![Card::new(Suit::Hearts, Rank::Nine); 10];
        cards.push(Card::new(Suit::Spades, Rank::Three));
        let mut shoe = Shoe::from_cards(cards);
        let report = shoe.burn().expect("burn");
        assert_eq!(report.indicator, Card::new(Suit::Spades, Rank::Three));
        assert_eq!(report.burned, 3);
        assert_eq!(shoe.len(), 7);
    }

    #[test]
    fn burn_stops_when_shoe_runs_dry() {
        let mut shoe = Shoe::from_cards(vec![
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Spades, Rank::King),
        ]);
        let report = shoe.burn().expect("burn");
        assert_eq!(report.burned, 1);
        assert!(shoe.is_empty());
        assert!(shoe.burn().is_none());
    }
}
