//! # Tenpin Core
//!
//! Scorekeeping for ten-pin bowling: decode throw notation, validate a game,
//! and resolve strike/spare bonuses into per-frame and total scores.
//!
//! ## Modules
//!
//! - `constants`: Pin and frame limits
//! - `types`: Core types (Frame, Game, Scorecard, ScoreError)
//! - `decoder`: Throw-symbol decoding and raw scorecard normalization
//! - `scorer`: Scoring strategy interface
//! - `lookahead`: Backward-lookahead scoring strategy
//! - `running`: Forward pending-bonus strategy and incremental tally

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod decoder;
pub mod error;
pub mod lookahead;
pub mod running;
pub mod scorer;
pub mod types;

// Re-export commonly used types
pub use error::ScoreError;
pub use scorer::{score_game, ScoreStrategy};
pub use types::{Frame, FrameKind, Game, Scorecard};

/// Result type alias for scoring operations
pub type Result<T> = core::result::Result<T, ScoreError>;
