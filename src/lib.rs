use rand::SeedableRng;
pub use rand_pcg::Pcg64Mcg as MyRng;
use rand_seeder::Seeder;

pub mod config;
pub mod deck;
pub mod logging;
pub mod pile;
pub mod players;
pub mod simulation;

pub use config::{ConfigError, GameConfig};
pub use deck::{Card, Deck, MAX_CARD, MIN_CARD};
pub use logging::{GameLog, TurnLog, Verbosity};
pub use pile::{
    Direction, PileId, Piles, Play, PlayRule, DOWN_SENTINEL, SACRIFICE_STEP, UP_SENTINEL,
};
pub use players::{Hand, Player, Strategy};

/// Where the turn loop stands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    /// hands are dealt, nobody has played yet
    Running,
    PlayerTurn(usize),
    GameOver,
}

pub struct Game {
    config: GameConfig,
    rng: MyRng,
    deck: Deck,
    piles: Piles,
    hands: Vec<Hand>,
    state: GameState,
    turn: usize,
    log: GameLog,
    verbosity: Verbosity,
}

/// constructors
impl Game {
    /// shuffles a fresh deck and deals the hands
    /// the same seed always gives the same game
    pub fn new(config: GameConfig, seed: Option<&str>) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng: MyRng = if let Some(seed) = seed {
            Seeder::from(seed).make_rng()
        } else {
            MyRng::from_entropy()
        };
        let deck = Deck::new(config.min_card, config.max_card, &mut rng);
        let mut game = Self::from_parts(config, deck, rng);
        game.log.seed = seed.map(str::to_owned);
        Ok(game)
    }

    /// starts a game from a prepared deck
    pub fn from_parts(config: GameConfig, mut deck: Deck, rng: MyRng) -> Self {
        let hands: Vec<Hand> = (0..config.n_players)
            .map(|_| deck.draw(config.hand_size).collect())
            .collect();
        let mut log = GameLog::new(config.strategy, None);
        log.deal = hands.clone();
        Self {
            config,
            rng,
            deck,
            piles: Piles::new(),
            hands,
            state: GameState::Running,
            turn: 0,
            log,
            verbosity: Verbosity::Quiet,
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// game state
impl Game {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// cards still in the deck or in a hand, 0 is a win
    pub fn outcome(&self) -> usize {
        self.deck.len() + self.hands.iter().map(Vec::len).sum::<usize>()
    }

    /// the round counts full passes around the table, starting at 1
    fn round(&self) -> usize {
        self.turn / self.config.n_players + 1
    }

    fn info(&self, msg: impl std::fmt::Display) {
        if self.verbosity >= Verbosity::Info {
            println!("{msg}");
        }
    }

    fn debug(&self, msg: impl std::fmt::Display) {
        if self.verbosity >= Verbosity::Debug {
            println!("{msg}");
        }
    }
}

/// progressing the game state
impl Game {
    /// makes a single transition of the turn loop and returns the new state
    pub fn step(&mut self) -> GameState {
        match self.state {
            GameState::Running => {
                self.info("THE GAME");
                self.debug(format_args!("Strategy: {}", self.config.strategy));
                for (i, hand) in self.hands.iter().enumerate() {
                    self.debug(format_args!("  Player {}: {:?}", i + 1, hand));
                }
                self.debug(format_args!("  Deck: {} cards", self.deck.len()));
                self.state = GameState::PlayerTurn(0);
            }
            GameState::PlayerTurn(idx) => {
                if self.hands.iter().all(Vec::is_empty) {
                    self.finish();
                    return self.state;
                }
                if idx == 0 {
                    self.debug(format_args!("\nTurn: {}", self.round()));
                    self.debug(&self.piles);
                }
                if self.hands[idx].is_empty() {
                    let log = TurnLog::Skipped {
                        round: self.round(),
                        player: idx,
                    };
                    self.debug(&log);
                    self.log.push(log);
                    self.next_player(idx);
                } else {
                    self.take_turn(idx);
                }
            }
            GameState::GameOver => (),
        }
        self.state
    }

    fn next_player(&mut self, idx: usize) {
        self.turn += 1;
        self.state = GameState::PlayerTurn((idx + 1) % self.config.n_players);
    }

    fn take_turn(&mut self, idx: usize) {
        let round = self.round();
        let hand = self.hands[idx].clone();
        let before = self.piles.journal().len();

        let strategy = self.config.strategy;
        let met_quota = strategy.play(
            &mut self.hands[idx],
            &mut self.piles,
            self.config.min_cards,
            self.config.max_cards,
            &mut self.rng,
        );
        let plays = self.piles.journal()[before..].to_vec();

        if !met_quota {
            let log = TurnLog::Stuck {
                round,
                player: idx,
                hand,
                plays,
            };
            self.debug(&log);
            self.log.push(log);
            self.finish();
            return;
        }

        let missing = self.config.hand_size.saturating_sub(self.hands[idx].len());
        let drawn: Vec<Card> = self.deck.draw(missing).collect();
        self.hands[idx].extend_from_slice(&drawn);
        let log = TurnLog::Played {
            round,
            player: idx,
            hand,
            plays,
            drawn,
        };
        self.debug(&log);
        self.log.push(log);
        self.next_player(idx);
    }

    fn finish(&mut self) {
        self.state = GameState::GameOver;
        let outcome = self.outcome();
        self.log.outcome = Some(outcome);
        self.info("\nGame Over");
        self.debug(&self.piles);
        self.info(format_args!("{outcome} unplayed cards"));
    }

    /// plays until nobody can make the quota and returns the number of unplayed cards
    pub fn play_game(&mut self) -> usize {
        while self.step() != GameState::GameOver {}
        self.outcome()
    }
}

/// plays one game with the official deck and the default strategy
pub fn run_game(n_players: usize, hand_size: usize) -> Result<usize, ConfigError> {
    let config = GameConfig::new(n_players, hand_size)?;
    run_game_with(&config, None)
}

/// plays one game quietly and returns the number of unplayed cards
pub fn run_game_with(config: &GameConfig, seed: Option<&str>) -> Result<usize, ConfigError> {
    let mut game = Game::new(config.clone(), seed)?;
    Ok(game.play_game())
}
