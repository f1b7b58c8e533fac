use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs;
use tenpin_core::decoder::decode_game;
use tenpin_core::types::{Frame, FrameKind};
use tracing::info;

use super::{read_records, StrategyKind};

#[derive(Serialize, Deserialize)]
pub struct CardRow {
    pub frame: usize,
    pub marks: String,
    pub kind: FrameKind,
    pub value: u16,
    pub running: u16,
}

pub fn execute(input: &str, strategy: StrategyKind, output: Option<&str>) -> Result<()> {
    info!("Rendering scorecard: {}", input);

    let records = read_records(input)?;
    let game = decode_game(&records).context("Scorecard failed validation")?;
    let card = strategy
        .score(&game)
        .context("Failed to score validated game")?;

    // Convert to JSON-friendly rows
    let rows: Vec<CardRow> = game
        .frames
        .iter()
        .zip(card.frames.iter())
        .enumerate()
        .map(|(i, (frame, score))| CardRow {
            frame: i + 1,
            marks: format_marks(frame),
            kind: score.kind,
            value: score.value,
            running: score.running,
        })
        .collect();

    println!("\n=== Scorecard ===");
    for row in &rows {
        let marks = format!("{:<6}", row.marks);
        let marks = match row.kind {
            FrameKind::Strike => marks.green(),
            FrameKind::Spare => marks.yellow(),
            FrameKind::Open => marks.normal(),
        };

        println!(
            "Frame {:>2}:  {}  value {:>2}   running {:>3}",
            row.frame, marks, row.value, row.running
        );
    }

    println!("\nFinal score: {}", card.total.to_string().green());

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&rows).context("Failed to serialize card rows")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write output file: {}", path))?;

        info!("Scorecard written to: {}", path);
    }

    Ok(())
}

/// Render a frame's throws in traditional notation
fn format_marks(frame: &Frame) -> String {
    let mut marks = Vec::with_capacity(frame.throws.len());
    let mut prev: Option<u8> = None;

    for (i, &t) in frame.throws.iter().enumerate() {
        let fresh_rack = i == 0 || prev == Some(10);
        let mark = if t == 10 && fresh_rack {
            "X".to_string()
        } else if !fresh_rack && prev.unwrap_or(0) + t == 10 {
            "/".to_string()
        } else if t == 0 {
            "-".to_string()
        } else {
            t.to_string()
        };
        marks.push(mark);
        prev = Some(t);
    }

    marks.join(" ")
}
