//! Dictionary word representation
//!
//! A Word stores a lowercase candidate word along with its letter set and
//! first/last letters, which the filter and solver consult constantly.

use super::letters::LetterSet;
use std::fmt;

/// Minimum playable word length
pub const MIN_WORD_LEN: usize = 3;

/// A candidate dictionary word
///
/// Normalized to lowercase at construction; caches the letter set used for
/// coverage math and the first/last letters used for chaining.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterSet,
    first: u8,
    last: u8,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    TooShort(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "Word must be at least {MIN_WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is under 3
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use letterboxed::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("ab").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() < MIN_WORD_LEN {
            return Err(WordError::TooShort(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let bytes = text.as_bytes();
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        let letters = LetterSet::from_word(&text);

        Ok(Self {
            text,
            letters,
            first,
            last,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the word in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; construction rejects words under 3 letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The set of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// First letter, for chain constraints
    #[inline]
    #[must_use]
    pub const fn first_letter(&self) -> u8 {
        self.first
    }

    /// Last letter, for chain constraints
    #[inline]
    #[must_use]
    pub const fn last_letter(&self) -> u8 {
        self.last
    }

    /// The word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.text.cmp(&other.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("importance").unwrap();
        assert_eq!(word.text(), "importance");
        assert_eq!(word.len(), 10);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  crane\n").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_too_short() {
        assert!(matches!(Word::new("ab"), Err(WordError::TooShort(2))));
        assert!(matches!(Word::new(""), Err(WordError::TooShort(0))));
        assert!(Word::new("cat").is_ok()); // 3 letters is the floor
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cra3ne").is_err()); // Number
        assert!(Word::new("cr ane").is_err()); // Inner space
        assert!(Word::new("cran!").is_err()); // Punctuation
        assert!(Word::new("crâne").is_err()); // Non-ASCII
    }

    #[test]
    fn word_chain_letters() {
        let word = Word::new("importance").unwrap();
        assert_eq!(word.first_letter(), b'i');
        assert_eq!(word.last_letter(), b'e');
    }

    #[test]
    fn word_letter_set() {
        let word = Word::new("banana").unwrap();
        assert_eq!(word.letters(), LetterSet::from_word("abn"));
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words = vec![
            Word::new("kilj").unwrap(),
            Word::new("ebdk").unwrap(),
            Word::new("face").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ebdk", "face", "kilj"]);
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }
}
