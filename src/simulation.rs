use std::collections::BTreeMap;
use std::fmt::Display;

use rayon::prelude::*;
use serde::Serialize;

use crate::{ConfigError, Game, GameConfig};

/// seed of the game with the given index in a batch
pub fn game_seed(base: &str, index: usize) -> String {
    format!("{base}/{index}")
}

/// plays `games` games in parallel, outcomes are in game order
///
/// every game gets its own rng, with a base seed `s` game `i` is seeded
/// with `"s/i"` so a batch gives the same outcomes however rayon schedules it
pub fn simulate(
    config: &GameConfig,
    games: usize,
    seed: Option<&str>,
) -> Result<Vec<usize>, ConfigError> {
    simulate_with_progress(config, games, seed, || ())
}

/// like [`simulate`], calls `progress` after every finished game
pub fn simulate_with_progress<F>(
    config: &GameConfig,
    games: usize,
    seed: Option<&str>,
    progress: F,
) -> Result<Vec<usize>, ConfigError>
where
    F: Fn() + Sync,
{
    config.validate()?;
    (0..games)
        .into_par_iter()
        .map(|i| -> Result<usize, ConfigError> {
            let seed = seed.map(|base| game_seed(base, i));
            let mut game = Game::new(config.clone(), seed.as_deref())?;
            let outcome = game.play_game();
            progress();
            Ok(outcome)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub games: usize,
    pub median: f64,
    pub mean: f64,
    pub min: usize,
    pub max: usize,
    pub lower_quartile: f64,
    pub upper_quartile: f64,
    /// games that ended with every card played
    pub wins: usize,
    /// number of games for every outcome that occurred
    pub histogram: BTreeMap<usize, usize>,
}

impl Summary {
    /// None if there are no outcomes
    pub fn from_outcomes(outcomes: &[usize]) -> Option<Self> {
        if outcomes.is_empty() {
            return None;
        }
        let mut sorted = outcomes.to_vec();
        sorted.sort_unstable();

        let mut histogram = BTreeMap::new();
        for &outcome in &sorted {
            *histogram.entry(outcome).or_insert(0) += 1;
        }

        Some(Self {
            games: sorted.len(),
            median: percentile(&sorted, 0.5),
            mean: sorted.iter().sum::<usize>() as f64 / sorted.len() as f64,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            lower_quartile: percentile(&sorted, 0.25),
            upper_quartile: percentile(&sorted, 0.75),
            wins: histogram.get(&0).copied().unwrap_or(0),
            histogram,
        })
    }

    /// one line per outcome between min and max, bars scaled to `width`
    pub fn render_histogram(&self, width: usize) -> String {
        let tallest = self.histogram.values().copied().max().unwrap_or(0).max(1);
        let mut out = String::new();
        for outcome in self.min..=self.max {
            let count = self.histogram.get(&outcome).copied().unwrap_or(0);
            let bar = "#".repeat((count * width).div_ceil(tallest));
            out.push_str(&format!("{outcome:>3} | {bar} {count}\n"));
        }
        out
    }
}

/// linear interpolation between the closest ranks, expects sorted input
fn percentile(sorted: &[usize], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] as f64 + (sorted[hi] as f64 - sorted[lo] as f64) * frac
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Median: {}", self.median)?;
        writeln!(f, "Mean: {:.2}", self.mean)?;
        writeln!(
            f,
            "Quartiles: {} / {} / {}",
            self.lower_quartile, self.median, self.upper_quartile
        )?;
        writeln!(f, "Range: {}..={}", self.min, self.max)?;
        write!(f, "Wins: {} of {} games", self.wins, self.games)
    }
}
