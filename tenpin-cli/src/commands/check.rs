use anyhow::Result;
use colored::*;
use tenpin_core::decoder::decode_game;
use tenpin_core::ScoreError;
use tracing::{info, warn};

use super::read_records;

pub fn execute(input: &str) -> Result<()> {
    info!("Checking scorecard: {}", input);

    let records = read_records(input)?;

    println!("\n=== Check Results ===");
    println!("Raw records:        {}", records.len());

    match decode_game(&records) {
        Ok(game) => {
            let strikes = game.frames.iter().filter(|f| f.is_strike()).count();
            let spares = game.frames.iter().filter(|f| f.is_spare()).count();

            println!("Frames:             {}", game.frames.len());
            println!("Strikes:            {}", strikes);
            println!("Spares:             {}", spares);
            println!("\n{} Scorecard is a valid ten-frame game", "✓".green());
        }
        Err(ScoreError::MalformedGame { frame, reason }) => {
            warn!("Malformed scorecard at frame {}: {}", frame, reason);
            println!("\n{} Malformed game at frame {}: {}", "✗".red(), frame, reason);
        }
        Err(e) => {
            warn!("Invalid scorecard: {}", e);
            println!("\n{} {}", "✗".red(), e);
        }
    }

    Ok(())
}
