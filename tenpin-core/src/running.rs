//! Forward pending-bonus scoring
//!
//! The alternative formulation: instead of looking ahead, thread an
//! accumulator through a single forward pass and credit every new throw to
//! frames still owed bonus pins. [`ScoreTally`] accepts frames one at a time,
//! which suits live scoreboards; [`PendingBonusScorer`] drives it over a
//! complete game.

use crate::constants::FRAMES_PER_GAME;
use crate::error::ScoreError;
use crate::scorer::ScoreStrategy;
use crate::types::{Frame, FrameKind, Game, Scorecard};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::trace;

/// Scores frames forward, crediting throws to frames awaiting bonus pins
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingBonusScorer;

impl ScoreStrategy for PendingBonusScorer {
    fn score(&self, game: &Game) -> Result<Scorecard, ScoreError> {
        let mut tally = ScoreTally::new();
        for frame in &game.frames {
            tally.push_frame(frame)?;
        }
        tally.into_scorecard()
    }
}

/// One frame's accumulating score inside a tally
#[derive(Debug, Clone, Copy)]
struct FrameTally {
    kind: FrameKind,
    value: u16,
    /// Bonus throws this frame is still owed
    awaiting: u8,
}

/// Incremental game tally for live display
///
/// Push frames as they complete. Earlier strike/spare frames absorb bonus
/// pins from each new throw; [`ScoreTally::resolved_frames`] reports how many
/// leading frames already hold their final value.
#[derive(Debug, Clone, Default)]
pub struct ScoreTally {
    frames: Vec<FrameTally>,
}

impl ScoreTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(FRAMES_PER_GAME),
        }
    }

    /// Number of frames pushed so far
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames have been pushed yet
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Ingest the next completed frame
    ///
    /// Each throw first pays any bonus pins owed to the previous one or two
    /// frames (two only after consecutive strikes), then counts toward this
    /// frame's own value.
    pub fn push_frame(&mut self, frame: &Frame) -> Result<(), ScoreError> {
        let index = self.frames.len();
        if index >= FRAMES_PER_GAME {
            return Err(ScoreError::MalformedGame {
                frame: index,
                reason: String::from("game already has ten frames"),
            });
        }

        let mut value = 0u16;
        for &pins in &frame.throws {
            // Only the two frames immediately before this one can still be
            // awaiting bonus pins
            let start = index.saturating_sub(2);
            for earlier in &mut self.frames[start..] {
                if earlier.awaiting > 0 {
                    earlier.value += u16::from(pins);
                    earlier.awaiting -= 1;
                }
            }
            value += u16::from(pins);
        }

        let kind = frame.kind();
        // The final frame holds its bonus throws itself and is owed nothing
        let awaiting = if index + 1 == FRAMES_PER_GAME {
            0
        } else {
            kind.bonus_throws()
        };

        #[cfg(feature = "logging")]
        trace!(frame = index, ?kind, value, awaiting, "frame tallied");

        self.frames.push(FrameTally {
            kind,
            value,
            awaiting,
        });

        Ok(())
    }

    /// How many leading frames hold their final value
    pub fn resolved_frames(&self) -> usize {
        self.frames.iter().take_while(|f| f.awaiting == 0).count()
    }

    /// Running totals over the resolved prefix, in frame order
    pub fn running(&self) -> Vec<u16> {
        let mut sum = 0u16;
        self.frames[..self.resolved_frames()]
            .iter()
            .map(|f| {
                sum += f.value;
                sum
            })
            .collect()
    }

    /// Finish the tally into a scorecard
    ///
    /// Fails if fewer than ten frames were pushed, or if any frame is still
    /// owed bonus pins (impossible for a validated game).
    pub fn into_scorecard(self) -> Result<Scorecard, ScoreError> {
        if self.frames.len() != FRAMES_PER_GAME {
            return Err(ScoreError::MalformedGame {
                frame: self.frames.len(),
                reason: format!(
                    "game is not complete: {} of {} frames",
                    self.frames.len(),
                    FRAMES_PER_GAME
                ),
            });
        }

        if let Some(unresolved) = self.frames.iter().position(|f| f.awaiting > 0) {
            return Err(ScoreError::IndexOutOfRange { frame: unresolved });
        }

        Ok(Scorecard::from_values(
            self.frames.into_iter().map(|f| (f.kind, f.value)).collect(),
        ))
    }
}
