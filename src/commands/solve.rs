//! One-shot puzzle solving
//!
//! Solves a single layout against the dictionary and reports the chain.

use crate::core::{Layout, Word};
use crate::solver::{SolveError, filter_playable, solve};
use crate::wordlists::Dictionary;

/// Result of solving one layout
pub struct SolveReport {
    pub layout: Layout,
    pub solution: Vec<Word>,
    pub playable_count: usize,
    pub dictionary_count: usize,
}

/// Solve `layout` against `dictionary`
///
/// # Errors
///
/// Returns `SolveError` if the layout admits no playable words, if the
/// chain reaches a letter nothing starts with, or if the chain fails to
/// cover the pool within the iteration cap.
pub fn solve_puzzle(layout: &Layout, dictionary: &Dictionary) -> Result<SolveReport, SolveError> {
    let playable = filter_playable(layout, dictionary.words());
    if playable.is_empty() {
        return Err(SolveError::NoPlayableWords);
    }

    let solution = solve(&playable, layout.letter_pool())?;

    Ok(SolveReport {
        layout: layout.clone(),
        solution,
        playable_count: playable.len(),
        dictionary_count: dictionary.len(),
    })
}
