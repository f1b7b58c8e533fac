//! Throw-symbol decoding and raw scorecard normalization
//!
//! Scorecards arrive as ordered records of throw tokens, one record per
//! frame. Legacy flattened notation writes the final frame's bonus throws as
//! trailing records; [`decode_game`] folds those into the tenth frame so the
//! rest of the crate only ever sees a ten-frame [`Game`].

use crate::constants::{FRAMES_PER_GAME, MAX_RAW_RECORDS, PIN_COUNT};
use crate::error::ScoreError;
use crate::types::{Frame, Game};
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::debug;

/// Decode a single throw token into a pin count
///
/// Recognized tokens:
/// - `X` — strike, all ten pins
/// - `F`, `-` — fault or gutter, zero pins
/// - `/` — spare: whatever pins the preceding throw in the frame left
///   standing (`prev` is that throw; a spare with no preceding throw is
///   invalid)
/// - decimal numbers `0`..=`10`
pub fn decode_symbol(token: &str, prev: Option<u8>) -> Result<u8, ScoreError> {
    match token {
        "X" => Ok(PIN_COUNT),
        "F" | "-" => Ok(0),
        "/" => match prev {
            Some(first) => Ok(PIN_COUNT - first.min(PIN_COUNT)),
            None => Err(ScoreError::InvalidSymbol(token.to_string())),
        },
        _ => match token.parse::<u8>() {
            Ok(pins) if pins <= PIN_COUNT => Ok(pins),
            _ => Err(ScoreError::InvalidSymbol(token.to_string())),
        },
    }
}

/// Decode one frame record, threading spare context between its throws
pub fn decode_record<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<u8>, ScoreError> {
    let mut throws = Vec::with_capacity(tokens.len());
    let mut prev = None;

    for token in tokens {
        let pins = decode_symbol(token.as_ref(), prev)?;
        throws.push(pins);
        prev = Some(pins);
    }

    Ok(throws)
}

/// Decode and normalize a raw record stream into a validated [`Game`]
///
/// Accepts ten to twelve records. Records beyond the tenth are the final
/// frame's bonus throws in the flattened legacy notation; their throws are
/// appended to frame ten. The assembled game is validated once here, at the
/// boundary.
pub fn decode_game<S: AsRef<str>>(records: &[Vec<S>]) -> Result<Game, ScoreError> {
    if records.len() < FRAMES_PER_GAME || records.len() > MAX_RAW_RECORDS {
        return Err(ScoreError::MalformedGame {
            frame: records.len(),
            reason: format!(
                "expected {} to {} records, got {}",
                FRAMES_PER_GAME,
                MAX_RAW_RECORDS,
                records.len()
            ),
        });
    }

    let mut frames: Vec<Frame> = records[..FRAMES_PER_GAME - 1]
        .iter()
        .map(|record| decode_record(record).map(Frame::new))
        .collect::<Result<_, _>>()?;

    // The final frame and any trailing bonus records decode as one throw
    // sequence, so spare context threads across the legacy record split
    let final_tokens: Vec<&str> = records[FRAMES_PER_GAME - 1..]
        .iter()
        .flat_map(|record| record.iter().map(|token| token.as_ref()))
        .collect();
    frames.push(Frame::new(decode_record(&final_tokens)?));

    #[cfg(feature = "logging")]
    debug!(
        records = records.len(),
        final_frame_throws = frames[FRAMES_PER_GAME - 1].throws.len(),
        "normalized raw scorecard"
    );

    Game::new(frames)
}
