use rand::seq::SliceRandom;

use super::{greedy_pass, quota_met, Hand, Player};
use crate::{MyRng, PileId, Piles};

/// Plays the hand in its own order, each card on the first pile that takes it.
/// The piles are visited in a fresh random order every turn.
pub struct RandomPlayer;

impl Player for RandomPlayer {
    fn play(
        &self,
        hand: &mut Hand,
        piles: &mut Piles,
        min_cards: usize,
        max_cards: usize,
        rng: &mut MyRng,
    ) -> bool {
        let mut pile_order = PileId::ALL;
        pile_order.shuffle(rng);

        let cards = hand.clone();
        let mut played = 0;
        greedy_pass(hand, piles, &cards, &pile_order, &mut played, max_cards);
        quota_met(played, min_cards)
    }
}
