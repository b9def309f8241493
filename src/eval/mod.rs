//! Evaluation module for placement positions
//!
//! - Line measurement (run length through a checker on one axis)
//! - Heuristic grading (signed sum over both sides' checkers)

pub mod heuristic;
pub mod line;

pub use heuristic::{grade, side_total};
pub use line::{line_length, run_length};
