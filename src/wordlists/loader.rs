//! Word list loading utilities
//!
//! Provides functions to load word lists from files or in-memory slices.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a line-oriented word list file
///
/// Keeps lowercase alphabetic words of at least three letters, trims
/// whitespace, and drops duplicates (case-insensitively). The result is
/// sorted, so callers see one canonical order however the file is arranged.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letterboxed::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert a slice of strings to a sorted, deduplicated Word vector
///
/// Invalid entries (too short, non-alphabetic) are skipped.
///
/// # Examples
/// ```
/// use letterboxed::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["face", "ab", "KILN", "face"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a, I: Iterator<Item = &'a str>>(lines: I) -> Vec<Word> {
    let unique: FxHashSet<Word> = lines.filter_map(|line| Word::new(line).ok()).collect();

    let mut words: Vec<Word> = unique.into_iter().collect();
    words.sort_unstable();
    words
}
