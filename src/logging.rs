use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Card, Hand, Play, Strategy};

/// How much a game prints while it is played.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    #[default]
    Quiet,
    /// start, end and the number of unplayed cards
    Info,
    /// every turn
    Debug,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLog {
    pub strategy: Strategy,
    pub seed: Option<String>,
    pub deal: Vec<Hand>,
    pub turns: Vec<TurnLog>,
    pub outcome: Option<usize>,
}

impl GameLog {
    pub fn new(strategy: Strategy, seed: Option<&str>) -> Self {
        Self {
            strategy,
            seed: seed.map(str::to_owned),
            deal: Vec::new(),
            turns: Vec::new(),
            outcome: None,
        }
    }

    pub fn push(&mut self, log: TurnLog) {
        self.turns.push(log)
    }

    /// all plays of the game in order
    pub fn plays(&self) -> impl Iterator<Item = &Play> {
        self.turns.iter().flat_map(|turn| match turn {
            TurnLog::Played { plays, .. } | TurnLog::Stuck { plays, .. } => plays.as_slice(),
            TurnLog::Skipped { .. } => &[],
        })
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TurnLog {
    /// the quota was met and the hand refilled
    Played {
        round: usize,
        player: usize,
        hand: Hand,
        plays: Vec<Play>,
        drawn: Vec<Card>,
    },
    /// the player had no cards left
    Skipped { round: usize, player: usize },
    /// the quota was missed, this ends the game
    Stuck {
        round: usize,
        player: usize,
        hand: Hand,
        plays: Vec<Play>,
    },
}

fn cards_string(cards: &[Card]) -> String {
    let cards: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
    cards.join(" ")
}

impl Display for TurnLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnLog::Played {
                player,
                hand,
                plays,
                drawn,
                ..
            } => {
                writeln!(f, "Player: {}", player + 1)?;
                writeln!(f, "  Hand: {}", cards_string(hand))?;
                for play in plays {
                    writeln!(f, "  Play: {play}")?;
                }
                write!(f, "  Get cards: {}", cards_string(drawn))
            }
            TurnLog::Skipped { player, .. } => {
                write!(f, "Player: {} (no cards left)", player + 1)
            }
            TurnLog::Stuck {
                player,
                hand,
                plays,
                ..
            } => {
                writeln!(f, "Player: {}", player + 1)?;
                writeln!(f, "  Hand: {}", cards_string(hand))?;
                for play in plays {
                    writeln!(f, "  Play: {play}")?;
                }
                write!(f, "  Stuck after {} card(s)", plays.len())
            }
        }
    }
}
