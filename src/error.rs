//! Errors reported to the human at the input boundary

use thiserror::Error;

use crate::board::Pos;

/// Reasons a human placement is rejected.
///
/// The engine itself never fails; these only cover input the turn loop
/// must refuse before calling `Board::place`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("({x}, {y}) is off the board")]
    OutOfBounds { x: i32, y: i32 },
    #[error("cell ({}, {}) is occupied, try different coordinates", .0.x, .0.y)]
    Occupied(Pos),
    #[error("game is over")]
    GameOver,
    #[error("not your turn")]
    NotYourTurn,
    #[error("computer is thinking")]
    ComputerThinking,
}
