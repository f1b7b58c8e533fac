//! Constants and limits for ten-pin bowling

/// Pins standing at the start of every fresh rack
pub const PIN_COUNT: u8 = 10;

/// Scoring frames in a regulation game
pub const FRAMES_PER_GAME: usize = 10;

/// Throws allowed in frames one through nine
pub const MAX_FRAME_THROWS: usize = 2;

/// Throws allowed in the final frame (two plus one bonus)
pub const MAX_FINAL_FRAME_THROWS: usize = 3;

/// Raw records accepted before normalization: ten frames plus up to two
/// trailing bonus records in the flattened legacy notation
pub const MAX_RAW_RECORDS: usize = FRAMES_PER_GAME + 2;

/// Total score of a perfect game (twelve strikes)
pub const PERFECT_SCORE: u16 = 300;

/// Bonus throws owed after a strike
pub const STRIKE_BONUS_THROWS: u8 = 2;

/// Bonus throws owed after a spare
pub const SPARE_BONUS_THROWS: u8 = 1;
