//! Live scoreboard example: frames arrive one at a time

use tenpin_core::running::ScoreTally;
use tenpin_core::types::Frame;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Tenpin Live Tally Example\n");

    let frames = vec![
        vec![10],
        vec![10],
        vec![9, 1],
        vec![5, 3],
        vec![10],
        vec![0, 0],
        vec![8, 2],
        vec![10],
        vec![6, 3],
        vec![7, 3, 10],
    ];

    let mut tally = ScoreTally::new();

    for (i, throws) in frames.into_iter().enumerate() {
        tally.push_frame(&Frame::new(throws))?;

        // Only frames no longer awaiting bonus pins have final values
        let running = tally.running();
        println!(
            "After frame {:>2}: {} of {} frames resolved, board shows {:?}",
            i + 1,
            tally.resolved_frames(),
            tally.len(),
            running
        );
    }

    let card = tally.into_scorecard()?;
    println!("\nFinal score: {}", card.total);

    Ok(())
}
