pub mod card;
pub mod check;
pub mod score;

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use tenpin_core::lookahead::LookaheadScorer;
use tenpin_core::running::PendingBonusScorer;
use tenpin_core::{Game, Scorecard, ScoreStrategy};

/// Scoring formulation selected on the command line
#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum StrategyKind {
    /// Resolve bonuses by looking ahead into later frames
    Lookahead,
    /// Resolve bonuses forward with pending-bonus counters
    Running,
}

impl StrategyKind {
    /// Score a validated game with the selected strategy
    pub fn score(&self, game: &Game) -> tenpin_core::Result<Scorecard> {
        match self {
            StrategyKind::Lookahead => LookaheadScorer.score(game),
            StrategyKind::Running => PendingBonusScorer.score(game),
        }
    }
}

/// Read a scorecard file (or stdin for `-`): a JSON array of frame records,
/// each an array of throw-symbol strings
pub fn read_records(input: &str) -> Result<Vec<Vec<String>>> {
    let data = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read scorecard from stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read input file: {}", input))?
    };

    serde_json::from_str(&data)
        .with_context(|| format!("Input is not a JSON array of frame records: {}", input))
}
