//! Letter Boxed Solver
//!
//! A solver for the NYT Letter Boxed puzzle: four sides of three letters each,
//! chain dictionary words (each starting with the previous word's last letter)
//! until every letter on the square has been used.
//!
//! # Quick Start
//!
//! ```rust
//! use letterboxed::core::{Layout, Word};
//! use letterboxed::solver::find_solution;
//!
//! let layout = Layout::parse("tip,rac,oem,sfn").unwrap();
//! let dictionary = vec![
//!     Word::new("importance").unwrap(),
//!     Word::new("efts").unwrap(),
//! ];
//!
//! let solution = find_solution(&layout, &dictionary).unwrap();
//! assert_eq!(solution.len(), 2);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
