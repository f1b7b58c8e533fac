//! Error types for scoring operations

use alloc::string::String;

/// Errors that can occur while decoding or scoring a game
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// Unrecognized or out-of-range throw token
    #[cfg_attr(feature = "std", error("Invalid throw symbol: {0:?}"))]
    InvalidSymbol(String),

    /// Game shape violates the frame rules
    #[cfg_attr(feature = "std", error("Malformed game at frame {frame}: {reason}"))]
    MalformedGame {
        /// Zero-based index of the offending frame (or record)
        frame: usize,
        /// What rule the frame breaks
        reason: String,
    },

    /// Bonus lookahead ran past the last frame
    ///
    /// Internal invariant violation: cannot occur once a game has passed
    /// validation.
    #[cfg_attr(feature = "std", error("Bonus lookahead past end of game from frame {frame}"))]
    IndexOutOfRange {
        /// Frame whose bonus could not be resolved
        frame: usize,
    },
}
