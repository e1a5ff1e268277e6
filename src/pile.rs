use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Card;

/// Starting top of an ascending pile.
pub const UP_SENTINEL: Card = 1;
/// Starting top of a descending pile.
pub const DOWN_SENTINEL: Card = 100;
/// A card this far against the direction of a pile may still be played on it.
pub const SACRIFICE_STEP: Card = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    UpA,
    UpB,
    DownA,
    DownB,
}

impl PileId {
    /// all piles in table layout order
    pub const ALL: [PileId; 4] = [PileId::UpA, PileId::UpB, PileId::DownA, PileId::DownB];
    pub const UP: [PileId; 2] = [PileId::UpA, PileId::UpB];
    pub const DOWN: [PileId; 2] = [PileId::DownA, PileId::DownB];
    /// order in which the min-diff players collect their candidates,
    /// decides which backwards step is found first
    pub const SCAN: [PileId; 4] = [PileId::UpB, PileId::UpA, PileId::DownB, PileId::DownA];

    pub fn direction(self) -> Direction {
        match self {
            PileId::UpA | PileId::UpB => Direction::Up,
            PileId::DownA | PileId::DownB => Direction::Down,
        }
    }

    /// the name also decides ties between equally good plays
    pub fn name(self) -> &'static str {
        match self {
            PileId::UpA => "up_a",
            PileId::UpB => "up_b",
            PileId::DownA => "down_a",
            PileId::DownB => "down_b",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which moves a strategy is allowed to make.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayRule {
    /// only moves in the direction of the pile
    Standard,
    /// additionally the backwards step of exactly ten
    WithSacrifice,
}

impl PlayRule {
    pub fn permits(self, piles: &Piles, card: Card, pile: PileId) -> bool {
        match self {
            PlayRule::Standard => piles.accepts(card, pile),
            PlayRule::WithSacrifice => {
                piles.accepts(card, pile) || piles.sacrifice_eligible(card, pile)
            }
        }
    }
}

/// One card placed on one pile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub card: Card,
    pub pile: PileId,
    pub sacrifice: bool,
}

impl Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.sacrifice {
            write!(f, "{} {} (ten)", self.card, self.pile)
        } else {
            write!(f, "{} {}", self.card, self.pile)
        }
    }
}

/// The four piles on the table.
#[derive(Debug, Clone)]
pub struct Piles {
    piles: [Vec<Card>; 4],
    journal: Vec<Play>,
}

impl Piles {
    pub fn new() -> Self {
        Self {
            piles: PileId::ALL.map(|id| match id.direction() {
                Direction::Up => vec![UP_SENTINEL],
                Direction::Down => vec![DOWN_SENTINEL],
            }),
            journal: Vec::new(),
        }
    }

    /// piles starting from the given tops instead of the sentinels,
    /// in layout order
    pub fn with_tops(tops: [Card; 4]) -> Self {
        Self {
            piles: tops.map(|top| vec![top]),
            journal: Vec::new(),
        }
    }

    pub fn top(&self, pile: PileId) -> Card {
        // piles start with a sentinel and never shrink
        let cards = &self.piles[pile.index()];
        cards[cards.len() - 1]
    }

    pub fn cards(&self, pile: PileId) -> &[Card] {
        &self.piles[pile.index()]
    }

    /// the direction rule
    pub fn accepts(&self, card: Card, pile: PileId) -> bool {
        let top = self.top(pile);
        match pile.direction() {
            Direction::Up => card > top,
            Direction::Down => card < top,
        }
    }

    /// true if the card is exactly ten against the direction of the pile
    pub fn sacrifice_eligible(&self, card: Card, pile: PileId) -> bool {
        let top = self.top(pile);
        match pile.direction() {
            Direction::Up => top.checked_sub(card) == Some(SACRIFICE_STEP),
            Direction::Down => card.checked_sub(top) == Some(SACRIFICE_STEP),
        }
    }

    /// puts the card on the pile
    /// the caller has to make sure the rule allows it
    pub fn commit(&mut self, card: Card, pile: PileId, rule: PlayRule) {
        assert!(
            rule.permits(self, card, pile),
            "illegal play of {card} on {pile} (top {})",
            self.top(pile)
        );
        let sacrifice = !self.accepts(card, pile);
        self.piles[pile.index()].push(card);
        self.journal.push(Play {
            card,
            pile,
            sacrifice,
        });
    }

    /// every play made so far, oldest first
    pub fn journal(&self) -> &[Play] {
        &self.journal
    }

    /// number of cards on the piles, sentinels not counted
    pub fn played_count(&self) -> usize {
        self.piles.iter().map(|p| p.len() - 1).sum()
    }
}

impl Default for Piles {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Piles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for id in PileId::ALL {
            let cards: Vec<String> = self.cards(id).iter().map(|c| c.to_string()).collect();
            writeln!(f, "  Pile {id}: {}", cards.join(" "))?;
        }
        Ok(())
    }
}
