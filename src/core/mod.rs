//! Core domain types for Letter Boxed
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod layout;
mod letters;
mod word;

pub use layout::{Layout, LayoutError, SIDE_COUNT, SIDE_LEN, Side};
pub use letters::LetterSet;
pub use word::{MIN_WORD_LEN, Word, WordError};
