//! Backward-lookahead scoring
//!
//! Scores the game in a single left-to-right pass. Each strike or spare
//! reads its bonus pins out of the throws that follow it, flattened across
//! frame boundaries; the final frame carries its own bonus throws and needs
//! no lookahead.

use crate::constants::{FRAMES_PER_GAME, PIN_COUNT};
use crate::error::ScoreError;
use crate::scorer::ScoreStrategy;
use crate::types::{FrameKind, Game, Scorecard};
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::trace;

/// Scores frames by looking ahead into subsequent throws
#[derive(Debug, Clone, Copy, Default)]
pub struct LookaheadScorer;

impl ScoreStrategy for LookaheadScorer {
    fn score(&self, game: &Game) -> Result<Scorecard, ScoreError> {
        score_lookahead(game)
    }
}

/// Score a validated game with the lookahead formulation
pub fn score_lookahead(game: &Game) -> Result<Scorecard, ScoreError> {
    let mut values = Vec::with_capacity(FRAMES_PER_GAME);

    for (i, frame) in game.frames.iter().enumerate() {
        let kind = frame.kind();

        let value = if i + 1 == FRAMES_PER_GAME {
            // The final frame's bonus throws are already in the frame
            frame.pin_total()
        } else {
            match kind {
                FrameKind::Open => frame.pin_total(),
                _ => u16::from(PIN_COUNT) + bonus(game, i, kind.bonus_throws() as usize)?,
            }
        };

        #[cfg(feature = "logging")]
        trace!(frame = i, ?kind, value, "resolved frame");

        values.push((kind, value));
    }

    Ok(Scorecard::from_values(values))
}

/// Sum the next `count` throws after `frame`, in delivery order
///
/// Throws are counted positionally: a strike followed by another strike
/// draws its second bonus throw from the frame after that.
fn bonus(game: &Game, frame: usize, count: usize) -> Result<u16, ScoreError> {
    let mut taken = 0;
    let mut sum = 0u16;

    for pins in game.throws_after(frame).take(count) {
        sum += u16::from(pins);
        taken += 1;
    }

    // Validated games always supply enough throws; fail fast rather than
    // scoring short.
    if taken < count {
        return Err(ScoreError::IndexOutOfRange { frame });
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Frame;
    use alloc::vec;
    use alloc::vec::Vec;

    fn game(frames: Vec<Vec<u8>>) -> Game {
        Game::new(frames.into_iter().map(Frame::new).collect()).unwrap()
    }

    #[test]
    fn test_perfect_game() {
        let mut frames: Vec<Vec<u8>> = (0..9).map(|_| vec![10]).collect();
        frames.push(vec![10, 10, 10]);

        let card = score_lookahead(&game(frames)).unwrap();

        assert_eq!(card.total, 300);
        assert!(card.frames.iter().all(|f| f.value == 30));
        assert_eq!(card.frames[0].running, 30);
        assert_eq!(card.frames[9].running, 300);
    }

    #[test]
    fn test_strike_bonus_crosses_frame_boundary() {
        // Strike, then an open frame: bonus is both throws of the next frame
        let mut frames = vec![vec![10], vec![3, 4]];
        frames.extend((0..8).map(|_| vec![0, 0]));

        let card = score_lookahead(&game(frames)).unwrap();

        assert_eq!(card.frames[0].value, 17);
        assert_eq!(card.frames[1].value, 7);
        assert_eq!(card.total, 24);
    }

    #[test]
    fn test_double_strike_draws_from_two_frames() {
        // X, X, (4,2): first strike's bonus is the second strike's single
        // throw plus the first throw of the open frame
        let mut frames = vec![vec![10], vec![10], vec![4, 2]];
        frames.extend((0..7).map(|_| vec![0, 0]));

        let card = score_lookahead(&game(frames)).unwrap();

        assert_eq!(card.frames[0].value, 24);
        assert_eq!(card.frames[1].value, 16);
        assert_eq!(card.frames[2].value, 6);
    }

    #[test]
    fn test_spare_bonus_is_single_throw() {
        let mut frames = vec![vec![9, 1], vec![5, 2]];
        frames.extend((0..8).map(|_| vec![0, 0]));

        let card = score_lookahead(&game(frames)).unwrap();

        assert_eq!(card.frames[0].value, 15);
        assert_eq!(card.frames[1].value, 7);
    }

    #[test]
    fn test_final_frame_spare_bonus_counts_once() {
        let mut frames: Vec<Vec<u8>> = (0..9).map(|_| vec![0, 0]).collect();
        frames.push(vec![1, 9, 5]);

        let card = score_lookahead(&game(frames)).unwrap();

        assert_eq!(card.frames[9].value, 15);
        assert_eq!(card.total, 15);
    }

    #[test]
    fn test_lookahead_guard_fails_fast() {
        // Bypass boundary validation: a ninth-frame strike with no bonus
        // throws available must error, not read past the end
        let mut frames: Vec<Frame> = (0..9).map(|_| Frame::new(vec![0, 0])).collect();
        frames[8] = Frame::new(vec![10]);
        frames.push(Frame::new(vec![3]));
        let game = Game { frames };

        let result = score_lookahead(&game);
        assert!(matches!(
            result,
            Err(ScoreError::IndexOutOfRange { frame: 8 })
        ));
    }
}
