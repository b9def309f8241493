//! GUI module for the Pente game
//!
//! This module provides a native Rust GUI using egui/eframe. It owns the
//! turn loop: the human clicks to place, the computer answers on a worker
//! thread.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::PenteApp;
pub use game_state::{AiState, GameResult, GameState, MoveTimer};
