mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::StrategyKind;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tenpin")]
#[command(about = "Tenpin - Scorekeeper for ten-pin bowling", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a game and print the total
    Score {
        /// Input scorecard JSON file, or - for stdin
        #[arg(short, long)]
        input: String,

        /// Scoring formulation to use
        #[arg(long, value_enum, default_value = "lookahead")]
        strategy: StrategyKind,

        /// Emit the full scorecard as JSON instead of a plain total
        #[arg(long)]
        json: bool,
    },

    /// Render the per-frame card with marks and running totals
    Card {
        /// Input scorecard JSON file, or - for stdin
        #[arg(short, long)]
        input: String,

        /// Scoring formulation to use
        #[arg(long, value_enum, default_value = "lookahead")]
        strategy: StrategyKind,

        /// Optional output JSON file for the scorecard
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a scorecard without scoring it
    Check {
        /// Input scorecard JSON file, or - for stdin
        #[arg(short, long)]
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Score {
            input,
            strategy,
            json,
        } => commands::score::execute(&input, strategy, json),

        Commands::Card {
            input,
            strategy,
            output,
        } => commands::card::execute(&input, strategy, output.as_deref()),

        Commands::Check { input } => commands::check::execute(&input),
    }
}
