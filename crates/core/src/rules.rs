//! Punto banco drawing rules.

use crate::{Card, Shoe, ShoeError};
use serde::{Deserialize, Serialize};

pub fn hand_score(cards: &[Card]) -> u8 {
    let sum: u32 = cards.iter().map(|card| u32::from(card.value())).sum();
    (sum % 10) as u8
}

/// An eight or nine on the first two cards ends the coup.
pub fn is_natural(score: u8) -> bool {
    score >= 8
}

/// Player draws on 0-5 and stands on 6-7.
pub fn player_draws(player_score: u8) -> bool {
    player_score <= 5
}

/// Banker's third card decision. `player_third` is the point value of the
/// Player's third card, `None` when Player stood.
pub fn banker_draws(banker_score: u8, player_third: Option<u8>) -> bool {
    let Some(p3) = player_third else {
        return banker_score <= 5;
    };
    match banker_score {
        0..=2 => true,
        3 => p3 != 8,
        4 => (2..=7).contains(&p3),
        5 => (4..=7).contains(&p3),
        6 => p3 == 6 || p3 == 7,
        _ => false,
    }
}

/// Cards dealt to both sides for one coup, in the order they were drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coup {
    pub player: Vec<Card>,
    pub banker: Vec<Card>,
}

impl Coup {
    pub fn player_score(&self) -> u8 {
        hand_score(&self.player)
    }

    pub fn banker_score(&self) -> u8 {
        hand_score(&self.banker)
    }

    pub fn player_third(&self) -> Option<Card> {
        self.player.get(2).copied()
    }

    pub fn banker_third(&self) -> Option<Card> {
        self.banker.get(2).copied()
    }

    pub fn cards_used(&self) -> usize {
        self.player.len() + self.banker.len()
    }
}

/// Deals one coup: two cards to Player, two to Banker, then the third card
/// rules. Fails only when the shoe runs out mid-coup.
pub fn deal_coup(shoe: &mut Shoe) -> Result<Coup, ShoeError> {
    let mut player = vec![shoe.draw()?, shoe.draw()?];
    let mut banker = vec![shoe.draw()?, shoe.draw()?];

    let player_initial = hand_score(&player);
    let banker_initial = hand_score(&banker);
    if is_natural(player_initial) || is_natural(banker_initial) {
        return Ok(Coup { player, banker });
    }

    let mut player_third = None;
    if player_draws(player_initial) {
        let card = shoe.draw()?;
        player.push(card);
        player_third = Some(card.value());
    }

    if banker_draws(banker_initial, player_third) {
        banker.push(shoe.draw()?);
    }

    Ok(Coup { player, banker })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(Suit::Spades, rank)
    }

    #[test]
    fn score_is_sum_mod_ten() {
        assert_eq!(hand_score(&[card(Rank::Nine), card(Rank::Nine)]), 8);
        assert_eq!(hand_score(&[card(Rank::King), card(Rank::Queen)]), 0);
        assert_eq!(
            hand_score(&[card(Rank::Seven), card(Rank::Six), card(Rank::Ace)]),
            4
        );
    }

    #[test]
    fn banker_stands_on_seven_regardless() {
        for p3 in 0..=9 {
            assert!(!banker_draws(7, Some(p3)));
        }
        assert!(!banker_draws(7, None));
    }

    #[test]
    fn short_coup_fails_closed() {
        let mut shoe = Shoe::from_cards(vec![card(Rank::Two), card(Rank::Three)]);
        assert_eq!(deal_coup(&mut shoe), Err(ShoeError::Empty));
    }
}
