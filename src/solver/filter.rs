//! Layout filter
//!
//! Reduces a dictionary to the words that can actually be traced on a given
//! layout: every letter on the square, and no two consecutive letters drawn
//! from the same side.

use crate::core::{Layout, Word};

/// Filter a dictionary down to the words playable on `layout`
///
/// A word is playable when all of its letters appear on the square and every
/// adjacent letter pair crosses between sides. The result is sorted
/// lexicographically and deduplicated, so downstream tie-breaks are stable
/// regardless of the dictionary's order.
#[must_use]
pub fn filter_playable(layout: &Layout, dictionary: &[Word]) -> Vec<Word> {
    let pool = layout.letter_pool();

    let mut playable: Vec<Word> = dictionary
        .iter()
        .filter(|word| pool.is_superset(word.letters()) && is_traceable(layout, word))
        .cloned()
        .collect();

    playable.sort_unstable();
    playable.dedup();
    playable
}

/// Whether every adjacent letter pair of `word` crosses between sides
fn is_traceable(layout: &Layout, word: &Word) -> bool {
    word.bytes()
        .windows(2)
        .all(|pair| layout.next_options(pair[0]).contains(pair[1]))
}
