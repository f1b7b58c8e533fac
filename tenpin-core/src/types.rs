//! Core types for ten-pin games

use crate::constants::{
    FRAMES_PER_GAME, MAX_FINAL_FRAME_THROWS, MAX_FRAME_THROWS, PIN_COUNT, SPARE_BONUS_THROWS,
    STRIKE_BONUS_THROWS,
};
use crate::error::ScoreError;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// How a frame closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameKind {
    /// Fewer than ten pins down after both throws
    Open,
    /// All ten pins down using both throws
    Spare,
    /// All ten pins down on the first throw
    Strike,
}

impl FrameKind {
    /// Bonus throws this kind of frame draws from subsequent deliveries
    pub const fn bonus_throws(&self) -> u8 {
        match self {
            FrameKind::Open => 0,
            FrameKind::Spare => SPARE_BONUS_THROWS,
            FrameKind::Strike => STRIKE_BONUS_THROWS,
        }
    }

    /// Whether the frame ended with all ten pins down
    pub const fn is_closed(&self) -> bool {
        !matches!(self, FrameKind::Open)
    }
}

/// A single frame: decoded pin counts in delivery order
///
/// Frames one through nine hold one throw (strike) or two. The final frame
/// holds two throws when open, three when a strike or spare earned bonus
/// throws. Bonus throws belong to the final frame itself; they never start
/// an eleventh frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Pins knocked down per throw
    pub throws: Vec<u8>,
}

impl Frame {
    /// Create a frame from decoded pin counts
    pub fn new(throws: Vec<u8>) -> Self {
        Self { throws }
    }

    /// Pins downed by the first throw
    pub fn first(&self) -> u8 {
        self.throws.first().copied().unwrap_or(0)
    }

    /// Whether the first throw downed all ten pins
    pub fn is_strike(&self) -> bool {
        self.first() == PIN_COUNT
    }

    /// Whether the first two throws together downed all ten pins
    pub fn is_spare(&self) -> bool {
        !self.is_strike()
            && self.throws.len() >= 2
            && self.throws[0] + self.throws[1] == PIN_COUNT
    }

    /// Classify the frame by its opening throws
    pub fn kind(&self) -> FrameKind {
        if self.is_strike() {
            FrameKind::Strike
        } else if self.is_spare() {
            FrameKind::Spare
        } else {
            FrameKind::Open
        }
    }

    /// Total pins downed in this frame, bonus throws included
    pub fn pin_total(&self) -> u16 {
        self.throws.iter().map(|&t| u16::from(t)).sum()
    }

    /// Validate the frame shape for its position in the game
    pub fn validate(&self, index: usize) -> Result<(), ScoreError> {
        if self.throws.is_empty() {
            return Err(ScoreError::MalformedGame {
                frame: index,
                reason: String::from("frame has no throws"),
            });
        }

        if let Some(&pins) = self.throws.iter().find(|&&t| t > PIN_COUNT) {
            return Err(ScoreError::MalformedGame {
                frame: index,
                reason: format!("throw of {} pins exceeds {}", pins, PIN_COUNT),
            });
        }

        if index + 1 < FRAMES_PER_GAME {
            return self.validate_regular(index);
        }
        self.validate_final(index)
    }

    // Frames one through nine: one throw for a strike, two otherwise,
    // and two throws never down more than ten pins.
    fn validate_regular(&self, index: usize) -> Result<(), ScoreError> {
        if self.is_strike() {
            if self.throws.len() != 1 {
                return Err(ScoreError::MalformedGame {
                    frame: index,
                    reason: format!(
                        "strike frame has {} throws, expected 1",
                        self.throws.len()
                    ),
                });
            }
            return Ok(());
        }

        if self.throws.len() != MAX_FRAME_THROWS {
            return Err(ScoreError::MalformedGame {
                frame: index,
                reason: format!("frame has {} throws, expected 2", self.throws.len()),
            });
        }

        if self.throws[0] + self.throws[1] > PIN_COUNT {
            return Err(ScoreError::MalformedGame {
                frame: index,
                reason: format!(
                    "throws down {} pins, more than the {} standing",
                    self.throws[0] + self.throws[1],
                    PIN_COUNT
                ),
            });
        }

        Ok(())
    }

    // The final frame supplies its own bonus throws: three throws after a
    // strike or spare, exactly two when open.
    fn validate_final(&self, index: usize) -> Result<(), ScoreError> {
        if self.throws.len() > MAX_FINAL_FRAME_THROWS {
            return Err(ScoreError::MalformedGame {
                frame: index,
                reason: format!(
                    "final frame has {} throws, at most {} allowed",
                    self.throws.len(),
                    MAX_FINAL_FRAME_THROWS
                ),
            });
        }

        let closed = self.is_strike() || self.is_spare();
        let expected = if closed {
            MAX_FINAL_FRAME_THROWS
        } else {
            MAX_FRAME_THROWS
        };

        if self.throws.len() != expected {
            return Err(ScoreError::MalformedGame {
                frame: index,
                reason: format!(
                    "final {} frame has {} throws, expected {}",
                    if closed { "strike/spare" } else { "open" },
                    self.throws.len(),
                    expected
                ),
            });
        }

        if !self.is_strike() && self.throws[0] + self.throws[1] > PIN_COUNT {
            return Err(ScoreError::MalformedGame {
                frame: index,
                reason: format!(
                    "first two throws down {} pins, more than the {} standing",
                    self.throws[0] + self.throws[1],
                    PIN_COUNT
                ),
            });
        }

        Ok(())
    }
}

/// A complete, ordered ten-frame game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Exactly ten frames in play order
    pub frames: Vec<Frame>,
}

impl Game {
    /// Build a game from frames, validating the shape once at the boundary
    ///
    /// Scoring assumes a validated game and does not re-check invariants
    /// per frame.
    pub fn new(frames: Vec<Frame>) -> Result<Self, ScoreError> {
        let game = Self { frames };
        game.validate()?;
        Ok(game)
    }

    /// Validate frame count and every frame's shape
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.frames.len() != FRAMES_PER_GAME {
            return Err(ScoreError::MalformedGame {
                frame: self.frames.len(),
                reason: format!(
                    "expected {} frames, got {}",
                    FRAMES_PER_GAME,
                    self.frames.len()
                ),
            });
        }

        for (i, frame) in self.frames.iter().enumerate() {
            frame.validate(i)?;
        }

        Ok(())
    }

    /// All throws after the given frame, flattened in delivery order
    ///
    /// Strike and spare bonuses count throws positionally, ignoring frame
    /// boundaries.
    pub fn throws_after(&self, frame: usize) -> impl Iterator<Item = u8> + '_ {
        self.frames
            .get(frame + 1..)
            .unwrap_or(&[])
            .iter()
            .flat_map(|f| f.throws.iter().copied())
    }
}

/// Resolved score of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameScore {
    /// How the frame closed
    pub kind: FrameKind,
    /// Pins for the frame plus any bonus pins it earned
    pub value: u16,
    /// Cumulative score through this frame
    pub running: u16,
}

/// Per-frame breakdown and total for a scored game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    /// One entry per scoring frame, in play order
    pub frames: Vec<FrameScore>,
    /// Final score for the game
    pub total: u16,
}

impl Scorecard {
    /// Assemble a scorecard from per-frame values, accumulating running totals
    pub fn from_values(values: Vec<(FrameKind, u16)>) -> Self {
        let mut running = 0u16;
        let frames = values
            .into_iter()
            .map(|(kind, value)| {
                running += value;
                FrameScore {
                    kind,
                    value,
                    running,
                }
            })
            .collect();

        Self {
            frames,
            total: running,
        }
    }

    /// Running totals in frame order
    pub fn running_totals(&self) -> Vec<u16> {
        self.frames.iter().map(|f| f.running).collect()
    }
}
