//! Pente placement engine
//!
//! A computer opponent for a five-in-a-row game on an 8x8 board:
//! - Human (player) against computer
//! - Each side places checkers, at most 32 each
//! - 5 or more in a row on any line wins (overlines allowed)
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Occupancy grid with per-side checker registries
//! - [`eval`]: Run length measurement and position grading
//! - [`rules`]: Win and end-of-game detection
//! - [`search`]: Candidate generation and alpha-beta search
//! - [`engine`]: Computer move selection integrating all components
//! - [`ui`]: egui front end running the turn loop
//!
//! # Quick Start
//!
//! ```
//! use pente::{Board, Engine, Pos, Side};
//!
//! let mut board = Board::new();
//! let engine = Engine::default();
//!
//! board.place(Side::Player, Pos::new(3, 3));
//!
//! // Computer responds
//! if let Some(pos) = engine.choose_move(&board, &mut rand::thread_rng()).best_move {
//!     board.place(Side::Computer, pos);
//!     println!("Computer plays at ({}, {})", pos.x, pos.y);
//! }
//! assert!(!pente::rules::is_game_over(&board));
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{AnchorMode, Board, Cell, Pos, Side, BOARD_SIZE, MAX_CHECKERS};
pub use engine::{Engine, EngineConfig, MoveKind, MoveResult};
pub use error::GameError;
