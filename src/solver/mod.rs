//! Letter Boxed solving algorithms
//!
//! The filter strips a dictionary down to words traceable on a layout; the
//! engine chains them greedily until the letter pool is covered.

mod engine;
mod filter;

pub use engine::{SolveError, find_solution, solve};
pub use filter::filter_playable;
