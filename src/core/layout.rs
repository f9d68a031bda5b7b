//! Puzzle layout
//!
//! A Letter Boxed puzzle is a square with four sides of three letters each.
//! Consecutive letters of a played word must come from different sides, so
//! the layout's main job is answering "which letters may follow this one?".

use super::letters::LetterSet;
use std::fmt;

/// Number of sides on the square
pub const SIDE_COUNT: usize = 4;

/// Letters per side
pub const SIDE_LEN: usize = 3;

/// One side of the square: three letters in display order plus their set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Side {
    letters: [u8; SIDE_LEN],
    set: LetterSet,
}

impl Side {
    /// Whether the side holds a letter
    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: u8) -> bool {
        self.set.contains(letter)
    }

    /// The side's letters as a set
    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.set
    }

    /// The side's letters in display order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; SIDE_LEN] {
        &self.letters
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// The full puzzle: four sides, twelve letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    sides: [Side; SIDE_COUNT],
    pool: LetterSet,
}

/// Error type for unparseable layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    WrongSideCount(usize),
    WrongSideLength { side: String, len: usize },
    InvalidLetter { side: String, letter: char },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongSideCount(count) => {
                write!(f, "Layout must have exactly {SIDE_COUNT} sides, got {count}")
            }
            Self::WrongSideLength { side, len } => {
                write!(f, "Side '{side}' must have exactly {SIDE_LEN} letters, got {len}")
            }
            Self::InvalidLetter { side, letter } => {
                write!(f, "Side '{side}' contains invalid letter '{letter}'")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

impl Layout {
    /// Parse a layout from its comma-separated form
    ///
    /// Sides are separated by commas and hold three letters each;
    /// whitespace around sides is ignored and letters are lowercased.
    ///
    /// # Errors
    /// Returns `LayoutError` if the input does not split into exactly four
    /// sides of three ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use letterboxed::core::Layout;
    ///
    /// let layout = Layout::parse("abc,def,ghi,jkl").unwrap();
    /// assert_eq!(layout.letter_pool().len(), 12);
    ///
    /// assert!(Layout::parse("abc,def").is_err());
    /// assert!(Layout::parse("abc,def,ghi,jk9").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, LayoutError> {
        let groups: Vec<&str> = input.split(',').map(str::trim).collect();

        if groups.len() != SIDE_COUNT {
            return Err(LayoutError::WrongSideCount(groups.len()));
        }

        let mut sides = [Side {
            letters: [0; SIDE_LEN],
            set: LetterSet::EMPTY,
        }; SIDE_COUNT];

        for (side, group) in sides.iter_mut().zip(&groups) {
            *side = Self::parse_side(group)?;
        }

        let pool = sides
            .iter()
            .fold(LetterSet::EMPTY, |pool, side| pool.union(side.set));

        Ok(Self { sides, pool })
    }

    fn parse_side(group: &str) -> Result<Side, LayoutError> {
        let count = group.chars().count();
        if count != SIDE_LEN {
            return Err(LayoutError::WrongSideLength {
                side: group.to_string(),
                len: count,
            });
        }

        let mut letters = [0_u8; SIDE_LEN];
        for (slot, ch) in letters.iter_mut().zip(group.chars()) {
            let lower = ch.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(LayoutError::InvalidLetter {
                    side: group.to_string(),
                    letter: ch,
                });
            }
            *slot = lower as u8;
        }

        Ok(Side {
            letters,
            set: LetterSet::from_iter(letters),
        })
    }

    /// The four sides of the square
    #[inline]
    #[must_use]
    pub const fn sides(&self) -> &[Side; SIDE_COUNT] {
        &self.sides
    }

    /// All letters appearing on the square
    ///
    /// This is the set a solution must cover.
    #[inline]
    #[must_use]
    pub const fn letter_pool(&self) -> LetterSet {
        self.pool
    }

    /// Whether the square holds a letter at all
    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: u8) -> bool {
        self.pool.contains(letter)
    }

    /// Letters that may legally follow `letter` within a word
    ///
    /// Union of every side that does NOT contain `letter`. A letter that
    /// appears on more than one side excludes all of those sides, which can
    /// reject words that are playable on one occurrence; this conservative
    /// rule is intentional.
    #[must_use]
    pub fn next_options(&self, letter: u8) -> LetterSet {
        self.sides
            .iter()
            .filter(|side| !side.contains(letter))
            .fold(LetterSet::EMPTY, |options, side| options.union(side.set))
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.sides[0], self.sides[1], self.sides[2], self.sides[3]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_layout() {
        let layout = Layout::parse("abc,def,ghi,jkl").unwrap();
        assert_eq!(layout.letter_pool(), LetterSet::from_word("abcdefghijkl"));
        assert_eq!(layout.sides()[1].letters(), &[b'd', b'e', b'f']);
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let layout = Layout::parse(" ABC , def , GHI , jkl ").unwrap();
        assert_eq!(layout.to_string(), "abc,def,ghi,jkl");
    }

    #[test]
    fn parse_wrong_side_count() {
        assert!(matches!(
            Layout::parse("abc,def,ghi"),
            Err(LayoutError::WrongSideCount(3))
        ));
        assert!(matches!(
            Layout::parse("abc,def,ghi,jkl,mno"),
            Err(LayoutError::WrongSideCount(5))
        ));
        assert!(matches!(
            Layout::parse(""),
            Err(LayoutError::WrongSideCount(1))
        ));
    }

    #[test]
    fn parse_wrong_side_length() {
        assert!(matches!(
            Layout::parse("abcd,efg,hij,klm"),
            Err(LayoutError::WrongSideLength { len: 4, .. })
        ));
        assert!(matches!(
            Layout::parse("ab,cde,fgh,ijk"),
            Err(LayoutError::WrongSideLength { len: 2, .. })
        ));
    }

    #[test]
    fn parse_invalid_letter() {
        assert!(matches!(
            Layout::parse("abc,def,ghi,jk9"),
            Err(LayoutError::InvalidLetter { letter: '9', .. })
        ));
        assert!(Layout::parse("abc,d!f,ghi,jkl").is_err());
    }

    #[test]
    fn next_options_excludes_own_side() {
        let layout = Layout::parse("abc,def,ghi,jkl").unwrap();
        let options = layout.next_options(b'a');

        assert!(!options.contains(b'a'));
        assert!(!options.contains(b'b'));
        assert!(!options.contains(b'c'));
        assert_eq!(options, LetterSet::from_word("defghijkl"));
    }

    #[test]
    fn next_options_duplicate_letter_excludes_both_sides() {
        // 'a' appears on sides 0 and 1, so letters from both are excluded.
        let layout = Layout::parse("abc,adf,ghi,jkl").unwrap();
        let options = layout.next_options(b'a');

        assert_eq!(options, LetterSet::from_word("ghijkl"));
    }

    #[test]
    fn next_options_for_letter_off_the_square() {
        let layout = Layout::parse("abc,def,ghi,jkl").unwrap();
        // A letter on no side excludes nothing.
        assert_eq!(layout.next_options(b'z'), layout.letter_pool());
    }

    #[test]
    fn contains_checks_pool() {
        let layout = Layout::parse("abc,def,ghi,jkl").unwrap();
        assert!(layout.contains(b'a'));
        assert!(layout.contains(b'l'));
        assert!(!layout.contains(b'z'));
    }
}
