//! Scoring strategy interface
//!
//! The bonus rules can be resolved two ways: reading bonus pins out of
//! subsequent frames (backward lookahead), or crediting each new throw to
//! frames still owed pins (forward pending-bonus). Both strategies implement
//! [`ScoreStrategy`] and must produce identical scorecards for every valid
//! game.

use crate::error::ScoreError;
use crate::lookahead::LookaheadScorer;
use crate::types::{Game, Scorecard};

/// Trait for resolving a validated game into a scorecard
pub trait ScoreStrategy {
    /// Score every frame of the game, bonuses included
    ///
    /// Scoring is all-or-nothing: no partial scorecard is produced on error.
    fn score(&self, game: &Game) -> Result<Scorecard, ScoreError>;
}

/// Score a game with the default (lookahead) strategy
pub fn score_game(game: &Game) -> Result<Scorecard, ScoreError> {
    LookaheadScorer.score(game)
}
