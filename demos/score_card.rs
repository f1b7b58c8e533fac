//! Basic scoring example

use tenpin_core::decoder::decode_game;
use tenpin_core::score_game;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Tenpin Scoring Example\n");

    // The classic mixed card: strikes, spares, a fault, and a loaded
    // tenth frame
    let records: Vec<Vec<&str>> = vec![
        vec!["X"],
        vec!["7", "/"],
        vec!["9", "-"],
        vec!["X"],
        vec!["-", "8"],
        vec!["8", "/"],
        vec!["F", "6"],
        vec!["X"],
        vec!["X"],
        vec!["X", "8", "1"],
    ];

    let game = decode_game(&records)?;
    let card = score_game(&game)?;

    for (i, frame) in card.frames.iter().enumerate() {
        println!(
            "Frame {:>2}: {:>2} pins  (running {:>3})  {:?}",
            i + 1,
            frame.value,
            frame.running,
            frame.kind
        );
    }

    println!("\nFinal score: {}", card.total);

    Ok(())
}
