//! Candidate move generation
//!
//! A candidate is any empty cell touching (8-way) a registered checker of
//! the side to move. Candidates come out in registry order, then neighbour
//! direction order. A cell shared by two checkers is listed once per checker.

use crate::board::{Board, Pos, Side, NEIGHBOR_DIRS};

/// Generate the candidate placements for `side`
#[must_use]
pub fn available_moves(board: &Board, side: Side) -> Vec<Pos> {
    let checkers = board.record(side).checkers();
    let mut moves = Vec::with_capacity(checkers.len() * NEIGHBOR_DIRS.len());

    for &pos in checkers {
        for &dir in &NEIGHBOR_DIRS {
            if let Some(next) = pos.offset(dir) {
                if !board.is_occupied(next) {
                    moves.push(next);
                }
            }
        }
    }

    moves
}
