//! Search module for the computer opponent
//!
//! Contains:
//! - Candidate move generation (empty cells next to a side's checkers)
//! - Depth-limited minimax with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
pub use movegen::available_moves;
