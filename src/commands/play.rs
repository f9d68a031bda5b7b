//! Interactive solver loop
//!
//! Mirrors how the puzzle is actually played against the NYT checker: solve,
//! try the chain, and when the site rejects a word, flag it so it is removed
//! from the dictionary and the puzzle re-solved without it.

use crate::core::Layout;
use crate::output::{format_chain, print_solve_failure};
use crate::solver::find_solution;
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive solve/retry loop
///
/// # Errors
///
/// Returns an error on I/O failures reading input or persisting the
/// dictionary, or when the puzzle becomes unsolvable.
pub fn run_play(dictionary: &mut Dictionary) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Letter Boxed Solver - Interactive               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Dictionary: {} words\n", dictionary.len());

    let layout = prompt_layout()?;

    loop {
        let solution = match find_solution(&layout, dictionary.words()) {
            Ok(solution) => solution,
            Err(error) => {
                print_solve_failure(&layout, &error);
                return Err(error.to_string());
            }
        };

        println!(
            "\nTo solve:\n  {}\n",
            format_chain(&solution).bright_green().bold()
        );

        let choice = get_user_input("Press Enter to exit, or '1' if a word was rejected")?;
        if choice != "1" {
            println!("\nThanks for using the solver!\n");
            return Ok(());
        }

        println!();
        for (index, word) in solution.iter().enumerate() {
            println!("  {}: {}", index + 1, word.text().to_uppercase());
        }

        let picked = get_user_input("Which word is the issue? Enter the number")?;
        let Some(word) = picked
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| solution.get(n))
        else {
            println!("{}", "❌ Not a valid word number".red());
            continue;
        };

        let removed = word.text().to_string();
        dictionary.remove(&removed);
        dictionary
            .persist()
            .map_err(|e| format!("Failed to update the word list: {e}"))?;
        println!(
            "\n✂️  Removed {} from the dictionary, re-solving...",
            removed.to_uppercase().bright_yellow()
        );
    }
}

/// Prompt until the user enters a parseable layout
fn prompt_layout() -> Result<Layout, String> {
    loop {
        let input = get_user_input("Enter the puzzle layout (ex: 'abc,def,ghi,jkl')")?;
        match Layout::parse(&input) {
            Ok(layout) => return Ok(layout),
            Err(error) => println!("{}", format!("❌ {error}").red()),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
