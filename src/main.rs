//! Letter Boxed Solver - CLI
//!
//! Solves NYT Letter Boxed puzzles by greedily chaining dictionary words
//! until every letter on the square is covered.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letterboxed::{
    commands::{run_play, solve_puzzle},
    core::Layout,
    output::{print_playable_words, print_solve_report},
    solver::filter_playable,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "letterboxed",
    about = "Letter Boxed puzzle solver using greedy word chaining",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the word list file (one word per line)
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): solve, flag rejected words, re-solve
    Play,

    /// Solve a layout and print the word chain
    Solve {
        /// The layout as four comma-separated sides, e.g. 'tip,rac,oem,sfn'
        layout: String,

        /// Show playable-word counts and per-word coverage
        #[arg(short, long)]
        verbose: bool,
    },

    /// List every dictionary word playable on a layout
    Words {
        /// The layout as four comma-separated sides
        layout: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let mut dictionary = load_dictionary(&cli.wordlist)?;
            run_play(&mut dictionary).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { layout, verbose } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let layout = Layout::parse(&layout)?;
            let report = solve_puzzle(&layout, &dictionary)?;
            print_solve_report(&report, verbose);
            Ok(())
        }
        Commands::Words { layout } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let layout = Layout::parse(&layout)?;
            let playable = filter_playable(&layout, dictionary.words());
            print_playable_words(&layout, &playable);
            Ok(())
        }
    }
}

fn load_dictionary(path: &str) -> Result<Dictionary> {
    Dictionary::load(path).with_context(|| format!("Failed to load word list from '{path}'"))
}
