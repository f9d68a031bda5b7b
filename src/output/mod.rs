//! Terminal output formatting

mod display;

pub use display::{format_chain, print_playable_words, print_solve_failure, print_solve_report};
