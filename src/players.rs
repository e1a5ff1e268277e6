use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Card, MyRng, PileId, Piles, PlayRule};

mod random;
pub use random::RandomPlayer;

mod updown;
pub use updown::RandomUpDownPlayer;

mod min_diff;
pub use min_diff::MinDiffPlayer;

mod min_diff_mod;
pub use min_diff_mod::MinDiffModPlayer;

/// The cards a player holds, in the order they were received.
pub type Hand = Vec<Card>;

pub trait Player {
    /// plays between zero and `max_cards` cards from the hand onto the piles
    /// returns true if at least `min_cards` (and at least one) cards were played
    fn play(
        &self,
        hand: &mut Hand,
        piles: &mut Piles,
        min_cards: usize,
        max_cards: usize,
        rng: &mut MyRng,
    ) -> bool;
}

/// The heuristics a game can be played with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Random,
    #[serde(rename = "random_updown")]
    RandomUpDown,
    MinDiff,
    MinDiffMod { play_tens: bool },
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::MinDiffMod { play_tens: true }
    }
}

impl Player for Strategy {
    fn play(
        &self,
        hand: &mut Hand,
        piles: &mut Piles,
        min_cards: usize,
        max_cards: usize,
        rng: &mut MyRng,
    ) -> bool {
        match *self {
            Strategy::Random => RandomPlayer.play(hand, piles, min_cards, max_cards, rng),
            Strategy::RandomUpDown => {
                RandomUpDownPlayer.play(hand, piles, min_cards, max_cards, rng)
            }
            Strategy::MinDiff => MinDiffPlayer.play(hand, piles, min_cards, max_cards, rng),
            Strategy::MinDiffMod { play_tens } => {
                MinDiffModPlayer { play_tens }.play(hand, piles, min_cards, max_cards, rng)
            }
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Random => write!(f, "random"),
            Strategy::RandomUpDown => write!(f, "random_updown"),
            Strategy::MinDiff => write!(f, "min_diff"),
            Strategy::MinDiffMod { play_tens: true } => write!(f, "min_diff_mod"),
            Strategy::MinDiffMod { play_tens: false } => write!(f, "min_diff_mod (no tens)"),
        }
    }
}

/// moves the card from the hand onto the pile
fn place(hand: &mut Hand, piles: &mut Piles, card: Card, pile: PileId, rule: PlayRule) {
    let pos = hand
        .iter()
        .position(|&c| c == card)
        .unwrap_or_else(|| panic!("{card} is not in the hand"));
    hand.remove(pos);
    piles.commit(card, pile, rule);
}

/// walks the cards in the given order and puts each one on the first pile
/// of `pile_order` that accepts it, until the budget is used up
fn greedy_pass(
    hand: &mut Hand,
    piles: &mut Piles,
    cards: &[Card],
    pile_order: &[PileId],
    played: &mut usize,
    max_cards: usize,
) {
    for &card in cards {
        if *played >= max_cards {
            break;
        }
        if let Some(&pile) = pile_order.iter().find(|&&p| piles.accepts(card, p)) {
            place(hand, piles, card, pile, PlayRule::Standard);
            *played += 1;
        }
    }
}

fn quota_met(played: usize, min_cards: usize) -> bool {
    played > 0 && played >= min_cards
}
