//! Display functions for command results

use crate::commands::SolveReport;
use crate::core::{Layout, Word};
use crate::solver::SolveError;
use colored::Colorize;

/// Join a word chain as `WORD1 -> WORD2 -> ...`
#[must_use]
pub fn format_chain(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Print a solved puzzle
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Layout: {}", report.layout.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!(
            "\nPlayable words: {} of {} in the dictionary",
            report.playable_count, report.dictionary_count
        );
        for word in &report.solution {
            println!(
                "  {} covers {}",
                word.text().to_uppercase().bright_white().bold(),
                word.letters()
                    .intersection(report.layout.letter_pool())
                    .to_string()
                    .green()
            );
        }
    }

    println!(
        "\nTo solve:\n  {}",
        format_chain(&report.solution).bright_green().bold()
    );
    println!(
        "\n{}",
        format!(
            "✅ Covered all {} letters in {} words",
            report.layout.letter_pool().len(),
            report.solution.len()
        )
        .green()
    );
}

/// Print a failed solve attempt
pub fn print_solve_failure(layout: &Layout, error: &SolveError) {
    println!("\nLayout: {}", layout.to_string().bright_yellow());
    println!("{}", format!("❌ {error}").red().bold());
}

/// Print the playable-word list for a layout
pub fn print_playable_words(layout: &Layout, playable: &[Word]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Playable words for {}: {}",
        layout.to_string().bright_yellow().bold(),
        playable.len().to_string().bright_white()
    );
    println!("{}", "─".repeat(60).cyan());

    for word in playable {
        println!("  {word}");
    }
}
