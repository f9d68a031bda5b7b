//! Word lists for Letter Boxed solving
//!
//! A file-backed dictionary plus the loading helpers it is built from.

mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;
