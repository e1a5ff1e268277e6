use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Card, Strategy, DOWN_SENTINEL, MAX_CARD, MIN_CARD, UP_SENTINEL};

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("number of players must be between {} and {}, got {}", MIN_PLAYERS, MAX_PLAYERS, .0)]
    Players(usize),
    #[error("hand size must be at least 1")]
    EmptyHand,
    #[error("cannot deal {players} hands of {hand_size} cards from a deck of {deck} cards")]
    DeckTooSmall {
        players: usize,
        hand_size: usize,
        deck: usize,
    },
    #[error("a player must be allowed to play at least one card per turn")]
    NoPlays,
    #[error("min_cards ({min}) is larger than max_cards ({max})")]
    Quota { min: usize, max: usize },
    #[error(
        "card range {min}..={max} must not be empty and must lie strictly between {} and {}",
        UP_SENTINEL,
        DOWN_SENTINEL
    )]
    CardRange { min: Card, max: Card },
    #[error("could not read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config")]
    Parse(#[from] ron::error::SpannedError),
}

/// Everything that decides how a game is played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub n_players: usize,
    pub hand_size: usize,
    pub strategy: Strategy,
    /// cards a player has to play each turn, the game is over otherwise
    pub min_cards: usize,
    /// cards a player may play each turn
    pub max_cards: usize,
    pub min_card: Card,
    pub max_card: Card,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            n_players: 3,
            hand_size: 6,
            strategy: Strategy::default(),
            min_cards: 2,
            max_cards: 2,
            min_card: MIN_CARD,
            max_card: MAX_CARD,
        }
    }
}

impl GameConfig {
    /// the official deck and quota with the default strategy
    pub fn new(n_players: usize, hand_size: usize) -> Result<Self, ConfigError> {
        let config = Self {
            n_players,
            hand_size,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// number of cards in a full deck
    pub fn deck_size(&self) -> usize {
        if self.max_card < self.min_card {
            return 0;
        }
        (self.max_card - self.min_card) as usize + 1
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.n_players) {
            return Err(ConfigError::Players(self.n_players));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        if self.max_cards == 0 {
            return Err(ConfigError::NoPlays);
        }
        if self.min_cards > self.max_cards {
            return Err(ConfigError::Quota {
                min: self.min_cards,
                max: self.max_cards,
            });
        }
        if self.min_card > self.max_card
            || self.min_card <= UP_SENTINEL
            || self.max_card >= DOWN_SENTINEL
        {
            return Err(ConfigError::CardRange {
                min: self.min_card,
                max: self.max_card,
            });
        }
        if self.n_players * self.hand_size > self.deck_size() {
            return Err(ConfigError::DeckTooSmall {
                players: self.n_players,
                hand_size: self.hand_size,
                deck: self.deck_size(),
            });
        }
        Ok(())
    }

    /// parses and validates a config written in RON,
    /// fields that are left out keep their defaults
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&s)
    }
}
