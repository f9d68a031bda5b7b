//! Letter set arithmetic
//!
//! Coverage tracking works on sets of lowercase ASCII letters. A 32-bit
//! bitmask (bit 0 = 'a' .. bit 25 = 'z') keeps the union/difference math in
//! the solver loop to single instructions.

use std::fmt;

/// A set of lowercase ASCII letters backed by a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Bit position for a letter
    ///
    /// Callers guarantee `letter` is in `b'a'..=b'z'`; `Word` and `Layout`
    /// validate their input before building sets.
    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }

    /// Build a set from the letters of a lowercase string
    #[must_use]
    pub fn from_word(text: &str) -> Self {
        text.bytes().fold(Self::EMPTY, |set, b| set.with(b))
    }

    /// Return this set with one letter added
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | Self::bit(letter))
    }

    /// Whether the set contains a letter
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Union of two sets
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters in `self` but not in `other`
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Letters in both sets
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Whether every letter of `other` is in `self`
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of letters in the set
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_word_collects_distinct_letters() {
        let set = LetterSet::from_word("banana");
        assert_eq!(set.len(), 3);
        assert!(set.contains(b'b'));
        assert!(set.contains(b'a'));
        assert!(set.contains(b'n'));
        assert!(!set.contains(b'z'));
    }

    #[test]
    fn union_and_difference() {
        let abc = LetterSet::from_word("abc");
        let bcd = LetterSet::from_word("bcd");

        assert_eq!(abc.union(bcd), LetterSet::from_word("abcd"));
        assert_eq!(abc.difference(bcd), LetterSet::from_word("a"));
        assert_eq!(bcd.difference(abc), LetterSet::from_word("d"));
        assert_eq!(abc.intersection(bcd), LetterSet::from_word("bc"));
    }

    #[test]
    fn superset_checks() {
        let pool = LetterSet::from_word("abcdefghijkl");
        let word = LetterSet::from_word("face");

        assert!(pool.is_superset(word));
        assert!(!word.is_superset(pool));
        assert!(pool.is_superset(LetterSet::EMPTY));
        assert!(LetterSet::EMPTY.is_superset(LetterSet::EMPTY));
    }

    #[test]
    fn empty_set() {
        assert!(LetterSet::EMPTY.is_empty());
        assert_eq!(LetterSet::EMPTY.len(), 0);
        assert!(!LetterSet::from_word("a").is_empty());
    }

    #[test]
    fn iter_is_alphabetical() {
        let set = LetterSet::from_word("zebra");
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, vec![b'a', b'b', b'e', b'r', b'z']);
    }

    #[test]
    fn display_renders_sorted_letters() {
        let set = LetterSet::from_word("cab");
        assert_eq!(set.to_string(), "abc");
    }
}
