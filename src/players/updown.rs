use rand::seq::SliceRandom;

use super::{greedy_pass, quota_met, Hand, Player};
use crate::{MyRng, PileId, Piles};

/// Low cards go up, high cards go down.
///
/// First the sorted hand is tried on the ascending piles, then what is left,
/// sorted from high to low, on the descending piles. Within each group the
/// piles are visited in a random order.
pub struct RandomUpDownPlayer;

impl Player for RandomUpDownPlayer {
    fn play(
        &self,
        hand: &mut Hand,
        piles: &mut Piles,
        min_cards: usize,
        max_cards: usize,
        rng: &mut MyRng,
    ) -> bool {
        let mut up = PileId::UP;
        up.shuffle(rng);
        let mut down = PileId::DOWN;
        down.shuffle(rng);

        let mut played = 0;

        let mut ascending = hand.clone();
        ascending.sort_unstable();
        greedy_pass(hand, piles, &ascending, &up, &mut played, max_cards);

        let mut descending = hand.clone();
        descending.sort_unstable_by(|a, b| b.cmp(a));
        greedy_pass(hand, piles, &descending, &down, &mut played, max_cards);

        quota_met(played, min_cards)
    }
}
