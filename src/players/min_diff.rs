use super::{place, quota_met, Hand, Player};
use crate::{Card, Direction, MyRng, PileId, Piles, PlayRule};

/// A possible play together with how far the card is from the top of the pile.
/// Moves against the direction of the pile have a negative distance.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct Candidate {
    pub distance: i32,
    pub pile: PileId,
    pub card: Card,
}

impl Candidate {
    /// ties on the distance go to the pile whose name sorts first, then to the lower card
    pub fn key(&self) -> (i32, &'static str, Card) {
        (self.distance, self.pile.name(), self.card)
    }
}

/// every play the rule allows, piles in scan order, cards in hand order
pub(super) fn candidates(hand: &[Card], piles: &Piles, rule: PlayRule) -> Vec<Candidate> {
    let mut out = Vec::new();
    for pile in PileId::SCAN {
        let top = piles.top(pile) as i32;
        for &card in hand {
            if !rule.permits(piles, card, pile) {
                continue;
            }
            let distance = match pile.direction() {
                Direction::Up => card as i32 - top,
                Direction::Down => top - card as i32,
            };
            out.push(Candidate {
                distance,
                pile,
                card,
            });
        }
    }
    out
}

/// Always makes the play with the smallest jump over all cards and piles.
pub struct MinDiffPlayer;

impl Player for MinDiffPlayer {
    fn play(
        &self,
        hand: &mut Hand,
        piles: &mut Piles,
        min_cards: usize,
        max_cards: usize,
        _rng: &mut MyRng,
    ) -> bool {
        let mut played = 0;
        while played < max_cards {
            let best = candidates(hand, piles, PlayRule::Standard)
                .into_iter()
                .min_by_key(Candidate::key);
            let Some(best) = best else {
                break;
            };
            place(hand, piles, best.card, best.pile, PlayRule::Standard);
            played += 1;
        }
        quota_met(played, min_cards)
    }
}
