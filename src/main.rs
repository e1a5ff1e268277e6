use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use the_game_sim::simulation::{simulate_with_progress, Summary};
use the_game_sim::{Game, GameConfig, Strategy, Verbosity};

#[derive(Parser, Debug)]
#[command(
    name = "the_game_sim",
    version,
    about = "Play The Game with automated players and count the unplayed cards"
)]
struct Args {
    /// Play the game N times and summarize the outcomes
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    montecarlo: usize,
    /// Print every turn of a single game
    #[arg(short, long)]
    debug: bool,
    /// Only print the result
    #[arg(short, long, conflicts_with = "debug")]
    quiet: bool,
    /// Heuristic the players use
    #[arg(short, long, value_enum)]
    strategy: Option<StrategyArg>,
    /// Number of players
    #[arg(short, long)]
    players: Option<usize>,
    /// Cards in a full hand
    #[arg(long)]
    hand_size: Option<usize>,
    /// Don't prefer the backwards ten step with min-diff-mod
    #[arg(long)]
    no_tens: bool,
    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<String>,
    /// Game config in RON, flags take precedence
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Write the log of a single game as RON
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
    /// Print a histogram of the outcomes of a Monte Carlo run
    #[arg(long)]
    histogram: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum StrategyArg {
    Random,
    RandomUpdown,
    MinDiff,
    MinDiffMod,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(strategy) = self.strategy {
            config.strategy = match strategy {
                StrategyArg::Random => Strategy::Random,
                StrategyArg::RandomUpdown => Strategy::RandomUpDown,
                StrategyArg::MinDiff => Strategy::MinDiff,
                StrategyArg::MinDiffMod => Strategy::MinDiffMod { play_tens: true },
            };
        }
        if self.no_tens {
            if let Strategy::MinDiffMod { play_tens } = &mut config.strategy {
                *play_tens = false;
            }
        }
        if let Some(players) = self.players {
            config.n_players = players;
        }
        if let Some(hand_size) = self.hand_size {
            config.hand_size = hand_size;
        }
        config.validate()?;
        Ok(config)
    }

    fn verbosity(&self) -> Verbosity {
        if self.debug {
            Verbosity::Debug
        } else if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Info
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.game_config()?;
    if args.montecarlo > 1 {
        run_montecarlo(&args, &config)
    } else {
        run_single(&args, config)
    }
}

fn run_single(args: &Args, config: GameConfig) -> Result<()> {
    let mut game = Game::new(config, args.seed.as_deref())?.with_verbosity(args.verbosity());
    let outcome = game.play_game();
    if args.quiet {
        println!("{outcome}");
    }
    if let Some(path) = &args.log {
        let log = game.log().to_ron().context("could not serialize the game log")?;
        std::fs::write(path, log)
            .with_context(|| format!("could not write {}", path.display()))?;
    }
    Ok(())
}

fn run_montecarlo(args: &Args, config: &GameConfig) -> Result<()> {
    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(args.montecarlo as u64);
        pb.set_style(ProgressStyle::with_template(
            "{elapsed_precise} [{bar:40}] {pos}/{len} games",
        )?);
        pb
    };
    let outcomes =
        simulate_with_progress(config, args.montecarlo, args.seed.as_deref(), || pb.inc(1))?;
    pb.finish_and_clear();

    let Some(summary) = Summary::from_outcomes(&outcomes) else {
        return Ok(());
    };
    if args.quiet {
        println!("{}", summary.median);
        return Ok(());
    }
    println!("Strategy: {}", config.strategy);
    println!("{summary}");
    if args.histogram {
        print!("{}", summary.render_histogram(50));
    }
    Ok(())
}
