use proptest::prelude::*;
use rand::SeedableRng;
use the_game_sim::{
    run_game, Deck, Direction, Game, GameConfig, GameState, Hand, MyRng, PileId, Piles, Player,
    PlayRule, Strategy,
};

fn heuristics() -> impl proptest::strategy::Strategy<Value = Strategy> {
    prop_oneof![
        Just(Strategy::Random),
        Just(Strategy::RandomUpDown),
        Just(Strategy::MinDiff),
        Just(Strategy::MinDiffMod { play_tens: true }),
        Just(Strategy::MinDiffMod { play_tens: false }),
    ]
}

/// replays the journal on fresh piles and checks every play against the rule
fn replay_is_legal(piles: &Piles, rule: PlayRule) -> bool {
    let mut replay = Piles::new();
    for play in piles.journal() {
        if !rule.permits(&replay, play.card, play.pile) {
            return false;
        }
        replay.commit(play.card, play.pile, rule);
    }
    PileId::ALL
        .iter()
        .all(|&id| replay.cards(id) == piles.cards(id))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn games_conserve_cards(
        strategy in heuristics(),
        n_players in 1usize..=5,
        hand_size in 1usize..=8,
        seed in "[a-z]{1,8}",
    ) {
        let config = GameConfig {
            n_players,
            hand_size,
            strategy,
            ..Default::default()
        };
        let mut game = Game::new(config, Some(&seed)).unwrap();
        let mut steps = 0;
        while game.step() != GameState::GameOver {
            let held: usize = game.hands().iter().map(Vec::len).sum();
            prop_assert_eq!(game.deck().len() + held + game.piles().played_count(), 98);
            prop_assert!(game.hands().iter().all(|h| h.len() <= hand_size));
            steps += 1;
            // every turn plays a card, skips are bounded by the table size
            prop_assert!(steps <= (98 + 1) * (n_players + 1));
        }
        prop_assert!(game.outcome() <= 98);
        prop_assert_eq!(game.log().outcome, Some(game.outcome()));
    }

    #[test]
    fn piles_only_move_legally(strategy in heuristics(), seed in "[a-z]{1,8}") {
        let config = GameConfig::default().with_strategy(strategy);
        let mut game = Game::new(config, Some(&seed)).unwrap();
        game.play_game();
        let rule = match strategy {
            Strategy::MinDiffMod { .. } => PlayRule::WithSacrifice,
            _ => PlayRule::Standard,
        };
        prop_assert!(replay_is_legal(game.piles(), rule));

        for id in PileId::ALL {
            for pair in game.piles().cards(id).windows(2) {
                let forward = match id.direction() {
                    Direction::Up => pair[1] > pair[0],
                    Direction::Down => pair[1] < pair[0],
                };
                let ten_back = match id.direction() {
                    Direction::Up => pair[0] == pair[1] + 10,
                    Direction::Down => pair[1] == pair[0] + 10,
                };
                prop_assert!(forward || (rule == PlayRule::WithSacrifice && ten_back));
            }
        }
    }

    #[test]
    fn strategies_respect_the_budget(
        strategy in heuristics(),
        cards in proptest::sample::subsequence((2u8..=99).collect::<Vec<_>>(), 0..=8),
        tops in (2u8..=60, 2u8..=60, 40u8..=99, 40u8..=99),
        max_cards in 1usize..=4,
        seed in any::<u64>(),
    ) {
        let mut rng = MyRng::seed_from_u64(seed);
        let mut piles = Piles::with_tops([tops.0, tops.1, tops.2, tops.3]);
        let mut hand: Hand = cards.clone();
        let met = strategy.play(&mut hand, &mut piles, 2, max_cards, &mut rng);

        let played = piles.journal().len();
        prop_assert!(played <= max_cards);
        prop_assert_eq!(met, played >= 2);
        prop_assert_eq!(hand.len() + played, cards.len());
        for play in piles.journal() {
            prop_assert!(cards.contains(&play.card));
            prop_assert!(!hand.contains(&play.card));
        }
    }
}

#[test]
fn random_strategies_repeat_under_a_seed() {
    for strategy in [Strategy::Random, Strategy::RandomUpDown] {
        let plays = |seed: u64| {
            let mut rng = MyRng::seed_from_u64(seed);
            let mut deck = Deck::new_official(&mut rng);
            let mut piles = Piles::new();
            let mut hand: Hand = deck.draw(8).collect();
            while strategy.play(&mut hand, &mut piles, 1, 3, &mut rng) {
                hand.extend(deck.draw(3));
            }
            piles.journal().to_vec()
        };
        assert_eq!(plays(1234), plays(1234));
    }
}

#[test]
fn nearest_cards_are_played_first() {
    let mut rng = MyRng::seed_from_u64(0);
    let mut piles = Piles::new();
    let mut hand = vec![5, 95, 11];
    assert!(Strategy::MinDiff.play(&mut hand, &mut piles, 2, 2, &mut rng));
    let plays: Vec<_> = piles.journal().iter().map(|p| (p.card, p.pile)).collect();
    assert_eq!(plays, vec![(5, PileId::UpA), (95, PileId::DownA)]);
}

#[test]
fn ten_step_is_taken_first() {
    let mut rng = MyRng::seed_from_u64(0);
    let mut piles = Piles::with_tops([50, 1, 100, 100]);
    let mut hand = vec![3, 40, 98];
    let strategy = Strategy::MinDiffMod { play_tens: true };
    assert!(strategy.play(&mut hand, &mut piles, 1, 1, &mut rng));
    assert_eq!(piles.top(PileId::UpA), 40);
    assert!(piles.journal()[0].sacrifice);
}

#[test]
fn blocked_hand_loses_with_every_strategy() {
    let mut rng = MyRng::seed_from_u64(0);
    for strategy in [
        Strategy::Random,
        Strategy::RandomUpDown,
        Strategy::MinDiff,
        Strategy::MinDiffMod { play_tens: true },
    ] {
        let mut piles = Piles::with_tops([50, 55, 3, 2]);
        let mut hand = vec![3];
        assert!(!strategy.play(&mut hand, &mut piles, 2, 2, &mut rng));
        assert_eq!(hand, vec![3]);
    }
}

#[test]
fn empty_deck_stays_empty() {
    let mut deck = Deck::from_cards(Vec::new());
    assert_eq!(deck.draw(3).count(), 0);
    assert!(deck.is_exhausted());
    assert_eq!(deck.draw(1).next(), None);
    assert!(deck.is_exhausted());
}

#[test]
fn default_game_finishes() {
    let outcome = run_game(3, 6).unwrap();
    assert!(outcome <= 98);
}
