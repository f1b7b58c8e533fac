use anyhow::{Context, Result};
use colored::*;
use tenpin_core::decoder::decode_game;
use tracing::info;

use super::{read_records, StrategyKind};

pub fn execute(input: &str, strategy: StrategyKind, json: bool) -> Result<()> {
    info!("Scoring scorecard: {}", input);

    let records = read_records(input)?;
    let game = decode_game(&records).context("Scorecard failed validation")?;
    let card = strategy
        .score(&game)
        .context("Failed to score validated game")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        println!("Final score: {}", card.total.to_string().green());
    }

    Ok(())
}
