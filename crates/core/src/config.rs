use crate::CARDS_PER_DECK;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DECK_COUNT: usize = 8;
pub const DEFAULT_CUT_CARD_PADDING: usize = 14;
pub const DEFAULT_ROAD_ROWS: usize = 6;
pub const DEFAULT_ROAD_COLS: usize = 60;

/// Largest number of cards a single coup can consume.
pub const MAX_CARDS_PER_HAND: usize = 6;

/// Most cards the indicator can remove: the indicator itself plus ten.
const MAX_BURN: usize = 11;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("deck count must be at least 1")]
    NoDecks,
    #[error("cut card padding {0} is below the six card worst case")]
    PaddingTooSmall(usize),
    #[error("cut card padding {padding} leaves no playable cards in a {cards} card shoe")]
    PaddingTooLarge { padding: usize, cards: usize },
    #[error("road grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyRoad { rows: usize, cols: usize },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShoeConfig {
    pub deck_count: usize,
    pub cut_card_padding: usize,
}

impl Default for ShoeConfig {
    fn default() -> Self {
        Self {
            deck_count: DEFAULT_DECK_COUNT,
            cut_card_padding: DEFAULT_CUT_CARD_PADDING,
        }
    }
}

impl ShoeConfig {
    pub fn total_cards(&self) -> usize {
        self.deck_count * CARDS_PER_DECK
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_count == 0 {
            return Err(ConfigError::NoDecks);
        }
        if self.cut_card_padding < MAX_CARDS_PER_HAND {
            return Err(ConfigError::PaddingTooSmall(self.cut_card_padding));
        }
        let cards = self.total_cards();
        if self.cut_card_padding + MAX_BURN >= cards {
            return Err(ConfigError::PaddingTooLarge {
                padding: self.cut_card_padding,
                cards,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoadConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROAD_ROWS,
            cols: DEFAULT_ROAD_COLS,
        }
    }
}

impl RoadConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyRoad {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimConfig {
    pub shoe: ShoeConfig,
    pub road: RoadConfig,
    pub seed: Option<u64>,
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shoe.validate()?;
        self.road.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
        assert_eq!(SimConfig::default().shoe.total_cards(), 416);
    }

    #[test]
    fn rejects_degenerate_shoes() {
        let none = ShoeConfig {
            deck_count: 0,
            ..ShoeConfig::default()
        };
        assert_eq!(none.validate(), Err(ConfigError::NoDecks));

        let thin = ShoeConfig {
            cut_card_padding: 5,
            ..ShoeConfig::default()
        };
        assert_eq!(thin.validate(), Err(ConfigError::PaddingTooSmall(5)));

        let fat = ShoeConfig {
            deck_count: 1,
            cut_card_padding: 41,
        };
        assert_eq!(
            fat.validate(),
            Err(ConfigError::PaddingTooLarge {
                padding: 41,
                cards: 52
            })
        );
    }

    #[test]
    fn rejects_empty_road() {
        let road = RoadConfig { rows: 0, cols: 60 };
        assert_eq!(
            road.validate(),
            Err(ConfigError::EmptyRoad { rows: 0, cols: 60 })
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{"shoe":{"deck_count":6}}"#).expect("parse");
        assert_eq!(config.shoe.deck_count, 6);
        assert_eq!(config.shoe.cut_card_padding, DEFAULT_CUT_CARD_PADDING);
        assert_eq!(config.road, RoadConfig::default());
        assert_eq!(config.seed, None);
    }
}
