//! Command implementations

pub mod play;
pub mod solve;

pub use play::run_play;
pub use solve::{SolveReport, solve_puzzle};
