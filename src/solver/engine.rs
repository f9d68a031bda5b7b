//! Greedy chain solver
//!
//! Chains playable words until every letter of the pool has been used. Each
//! pick prefers an outright finish (one word covering everything left), then
//! a pick that a single follow-up word can finish, then the word covering
//! the most uncovered letters. The chain is a heuristic, not a minimal one.

use super::filter::filter_playable;
use crate::core::{Layout, LetterSet, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Upper bound on chain length, as a multiple of the letter pool size
///
/// A productive pick covers at least one new letter, so twice the pool size
/// leaves room for the occasional bridge word that covers nothing new.
const ITERATION_FACTOR: usize = 2;

/// Error type for failed solve attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The layout filter left nothing to chain
    NoPlayableWords,
    /// No playable word starts with the letter the chain requires
    NoWordStartsWith(u8),
    /// The chain exceeded the iteration cap without covering the pool
    IterationLimit(usize),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPlayableWords => {
                write!(f, "No playable words exist for this layout")
            }
            Self::NoWordStartsWith(letter) => {
                write!(f, "No playable word starts with '{}'", *letter as char)
            }
            Self::IterationLimit(cap) => {
                write!(f, "No covering chain found within {cap} words")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Filter the dictionary for `layout` and chain the survivors into a solution
///
/// # Errors
/// Returns `SolveError::NoPlayableWords` if the filter leaves nothing, and
/// the chaining errors of [`solve`] otherwise.
pub fn find_solution(layout: &Layout, dictionary: &[Word]) -> Result<Vec<Word>, SolveError> {
    let playable = filter_playable(layout, dictionary);
    if playable.is_empty() {
        return Err(SolveError::NoPlayableWords);
    }
    solve(&playable, layout.letter_pool())
}

/// Chain `playable` words until `letter_pool` is fully covered
///
/// `playable` is expected in the sorted order `filter_playable` produces;
/// all tie-breaks below resolve in that order.
///
/// # Errors
/// Returns `SolveError` when the chain reaches a letter no word starts
/// with, or when the iteration cap is exceeded.
pub fn solve(playable: &[Word], letter_pool: LetterSet) -> Result<Vec<Word>, SolveError> {
    let by_first = index_by_first_letter(playable);

    let cap = letter_pool.len().max(1) * ITERATION_FACTOR;
    let mut chain: Vec<Word> = Vec::new();
    let mut unused = letter_pool;
    let mut starting_letter: Option<u8> = None;

    for _ in 0..cap {
        if unused.is_empty() {
            return Ok(chain);
        }

        let (word, remainder) = select_next(playable, &by_first, unused, starting_letter)?;
        starting_letter = Some(word.last_letter());
        unused = remainder;
        chain.push(word.clone());
    }

    if unused.is_empty() {
        Ok(chain)
    } else {
        Err(SolveError::IterationLimit(cap))
    }
}

/// Group candidate words by their first letter
fn index_by_first_letter(words: &[Word]) -> FxHashMap<u8, Vec<&Word>> {
    let mut index: FxHashMap<u8, Vec<&Word>> = FxHashMap::default();
    for word in words {
        index.entry(word.first_letter()).or_default().push(word);
    }
    index
}

/// Pick the next word of the chain
///
/// Checks, in order: a single word finishing the puzzle; a word some
/// follow-up can finish after; the word covering the most unused letters
/// (ties go to the shorter word, then the lexicographically first).
fn select_next<'a>(
    candidates: &'a [Word],
    by_first: &FxHashMap<u8, Vec<&'a Word>>,
    unused: LetterSet,
    starting_letter: Option<u8>,
) -> Result<(&'a Word, LetterSet), SolveError> {
    let choices: Vec<&'a Word> = match starting_letter {
        None => candidates.iter().collect(),
        Some(letter) => by_first
            .get(&letter)
            .cloned()
            .ok_or(SolveError::NoWordStartsWith(letter))?,
    };

    let Some((&head, rest)) = choices.split_first() else {
        // An indexed bucket is never empty; this guards the unconstrained
        // case with an empty candidate list.
        return Err(SolveError::NoPlayableWords);
    };

    // One word left that covers everything: done.
    for &word in &choices {
        if word.letters().is_superset(unused) {
            return Ok((word, LetterSet::EMPTY));
        }
    }

    // A word whose leftovers some chainable follow-up covers entirely:
    // taking it guarantees a finish next turn.
    for &word in &choices {
        let remainder = unused.difference(word.letters());
        let finishers = by_first.get(&word.last_letter());
        if finishers.is_some_and(|words| {
            words
                .iter()
                .any(|follow| follow.letters().is_superset(remainder))
        }) {
            return Ok((word, remainder));
        }
    }

    // Otherwise grab the word that covers the most uncovered letters.
    let mut best = head;
    let mut best_coverage = head.letters().intersection(unused).len();
    for &word in rest {
        let coverage = word.letters().intersection(unused).len();
        if coverage > best_coverage || (coverage == best_coverage && word.len() < best.len()) {
            best = word;
            best_coverage = coverage;
        }
    }

    Ok((best, unused.difference(best.letters())))
}
