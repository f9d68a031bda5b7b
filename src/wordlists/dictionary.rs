//! File-backed dictionary
//!
//! The solver reads the dictionary once per attempt; between attempts the
//! user may flag a word the puzzle rejected, which removes it here and
//! rewrites the backing file so the word never comes back.

use super::loader;
use crate::core::Word;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A deduplicated, sorted word list with an optional backing file
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    path: Option<PathBuf>,
}

impl Dictionary {
    /// Load a dictionary from a word list file
    ///
    /// One word per line; entries shorter than three letters or containing
    /// anything but letters are skipped.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let words = loader::load_from_file(&path)?;
        Ok(Self {
            words,
            path: Some(path.as_ref().to_path_buf()),
        })
    }

    /// Build an in-memory dictionary with no backing file
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        let mut words = words;
        words.sort_unstable();
        words.dedup();
        Self { words, path: None }
    }

    /// The words, sorted lexicographically
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Remove a word from the in-memory list
    ///
    /// Returns whether the word was present. Case-insensitive. Call
    /// [`persist`](Self::persist) afterwards to make the removal stick
    /// across reloads.
    pub fn remove(&mut self, word: &str) -> bool {
        let target = word.trim().to_lowercase();
        let before = self.words.len();
        self.words.retain(|w| w.text() != target);
        self.words.len() != before
    }

    /// Rewrite the backing file to match the in-memory list
    ///
    /// No-op for dictionaries without a backing file.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be written.
    pub fn persist(&self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut content = String::with_capacity(self.words.len() * 8);
        for word in &self.words {
            let _ = writeln!(content, "{word}");
        }
        fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn dictionary(texts: &[&str]) -> Dictionary {
        Dictionary::from_words(texts.iter().map(|t| Word::new(*t).unwrap()).collect())
    }

    #[test]
    fn from_words_sorts_and_dedups() {
        let dict = dictionary(&["kiln", "face", "face", "ebdk"]);
        let texts: Vec<&str> = dict.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ebdk", "face", "kiln"]);
    }

    #[test]
    fn remove_drops_the_word() {
        let mut dict = dictionary(&["face", "kiln"]);

        assert!(dict.remove("face"));
        assert_eq!(dict.len(), 1);
        assert!(dict.words().iter().all(|w| w.text() != "face"));

        // Removing again reports absence.
        assert!(!dict.remove("face"));
    }

    #[test]
    fn remove_is_case_insensitive() {
        let mut dict = dictionary(&["face"]);
        assert!(dict.remove("FACE"));
        assert!(dict.is_empty());
    }

    #[test]
    fn persist_without_backing_file_is_a_noop() {
        let dict = dictionary(&["face"]);
        assert!(dict.persist().is_ok());
    }

    #[test]
    fn load_persist_round_trips_a_removal() {
        let path = env::temp_dir().join("letterboxed_dictionary_roundtrip.txt");
        fs::write(&path, "face\nkiln\nebdk\n").unwrap();

        let mut dict = Dictionary::load(&path).unwrap();
        assert_eq!(dict.len(), 3);

        dict.remove("kiln");
        dict.persist().unwrap();

        let reloaded = Dictionary::load(&path).unwrap();
        let texts: Vec<&str> = reloaded.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ebdk", "face"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_skips_invalid_lines() {
        let path = env::temp_dir().join("letterboxed_dictionary_invalid.txt");
        fs::write(&path, "face\nab\n123\n\n  kiln  \n").unwrap();

        let dict = Dictionary::load(&path).unwrap();
        let texts: Vec<&str> = dict.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["face", "kiln"]);

        let _ = fs::remove_file(&path);
    }
}
