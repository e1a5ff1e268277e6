use super::min_diff::{candidates, Candidate};
use super::{place, quota_met, Hand, Player};
use crate::{MyRng, Piles, PlayRule, SACRIFICE_STEP};

/// [`MinDiffPlayer`](super::MinDiffPlayer) that also knows the backwards ten rule.
///
/// With `play_tens` the first backwards step found is taken before anything
/// else. Without it the steps still compete on their (negative) distance.
pub struct MinDiffModPlayer {
    pub play_tens: bool,
}

impl MinDiffModPlayer {
    fn choose(&self, found: &[Candidate]) -> Option<Candidate> {
        let ten = -(SACRIFICE_STEP as i32);
        if self.play_tens {
            if let Some(step) = found.iter().find(|c| c.distance == ten) {
                return Some(*step);
            }
        }
        found.iter().copied().min_by_key(Candidate::key)
    }
}

impl Player for MinDiffModPlayer {
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
            let found = candidates(hand, piles, PlayRule::WithSacrifice);
            let Some(choice) = self.choose(&found) else {
                break;
            };
            place(hand, piles, choice.card, choice.pile, PlayRule::WithSacrifice);
            played += 1;
        }
        quota_met(played, min_cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, PileId};
    use rand::SeedableRng;

    fn plays(piles: &Piles) -> Vec<(Card, PileId, bool)> {
        piles
            .journal()
            .iter()
            .map(|p| (p.card, p.pile, p.sacrifice))
            .collect()
    }

    #[test]
    fn ten_step_beats_a_closer_card() {
        let mut rng = MyRng::seed_from_u64(0);
        let mut piles = Piles::with_tops([50, 1, 100, 100]);
        let mut hand = vec![51, 40];
        let player = MinDiffModPlayer { play_tens: true };
        assert!(player.play(&mut hand, &mut piles, 1, 1, &mut rng));
        assert_eq!(plays(&piles), vec![(40, PileId::UpA, true)]);
        assert_eq!(hand, vec![51]);
    }

    #[test]
    fn ten_step_upwards_on_a_descending_pile() {
        let mut rng = MyRng::seed_from_u64(0);
        let mut piles = Piles::with_tops([90, 90, 30, 100]);
        let mut hand = vec![40, 99];
        let player = MinDiffModPlayer { play_tens: true };
        assert!(player.play(&mut hand, &mut piles, 1, 1, &mut rng));
        assert_eq!(plays(&piles), vec![(40, PileId::DownA, true)]);
    }

    #[test]
    fn up_b_step_is_found_before_up_a() {
        let mut rng = MyRng::seed_from_u64(0);
        // 40 steps back on up_a, 50 on up_b
        let mut piles = Piles::with_tops([50, 60, 100, 100]);
        let mut hand = vec![40, 50];
        let player = MinDiffModPlayer { play_tens: true };
        assert!(player.play(&mut hand, &mut piles, 1, 1, &mut rng));
        assert_eq!(plays(&piles), vec![(50, PileId::UpB, true)]);
        assert_eq!(hand, vec![40]);
    }

    #[test]
    fn down_b_step_is_found_before_down_a() {
        let mut rng = MyRng::seed_from_u64(0);
        // 40 steps back on down_a, 30 on down_b
        let mut piles = Piles::with_tops([95, 95, 30, 20]);
        let mut hand = vec![40, 30];
        let player = MinDiffModPlayer { play_tens: true };
        assert!(player.play(&mut hand, &mut piles, 1, 1, &mut rng));
        assert_eq!(plays(&piles), vec![(30, PileId::DownB, true)]);
    }

    #[test]
    fn ascending_steps_come_before_descending_ones() {
        let mut rng = MyRng::seed_from_u64(0);
        // up_b has a step for 60, down_a one for 30, up_b comes first
        let mut piles = Piles::with_tops([95, 70, 20, 100]);
        let mut hand = vec![30, 60];
        let player = MinDiffModPlayer { play_tens: true };
        assert!(player.play(&mut hand, &mut piles, 2, 2, &mut rng));
        assert_eq!(
            plays(&piles),
            vec![(60, PileId::UpB, true), (30, PileId::DownA, true)]
        );
    }

    #[test]
    fn steps_open_up_new_plays() {
        let mut rng = MyRng::seed_from_u64(0);
        let mut piles = Piles::with_tops([50, 95, 5, 3]);
        let mut hand = vec![40, 45];
        let player = MinDiffModPlayer { play_tens: true };
        assert!(player.play(&mut hand, &mut piles, 2, 2, &mut rng));
        assert_eq!(
            plays(&piles),
            vec![(40, PileId::UpA, true), (45, PileId::UpA, false)]
        );
    }

    #[test]
    fn without_tens_the_lowest_key_wins() {
        let mut rng = MyRng::seed_from_u64(0);
        // two steps: 60 on up_b and 30 on down_a; sorted, down_a comes first
        let mut piles = Piles::with_tops([95, 70, 20, 100]);
        let mut hand = vec![60, 30];
        let player = MinDiffModPlayer { play_tens: false };
        assert!(player.play(&mut hand, &mut piles, 1, 1, &mut rng));
        assert_eq!(plays(&piles), vec![(30, PileId::DownA, true)]);
    }

    #[test]
    fn plain_moves_when_no_step_exists() {
        let mut rng = MyRng::seed_from_u64(0);
        let mut piles = Piles::new();
        let mut hand = vec![5, 95, 11];
        let player = MinDiffModPlayer { play_tens: true };
        assert!(player.play(&mut hand, &mut piles, 2, 2, &mut rng));
        assert_eq!(
            plays(&piles),
            vec![(5, PileId::UpA, false), (95, PileId::DownA, false)]
        );
    }
}
