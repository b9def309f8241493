//! Heuristic grading of board positions
//!
//! The grade is a single signed number shared by both sides: the player
//! maximizes it, the computer minimizes it. Each checker contributes the
//! length of the run through it on every line axis.

use crate::board::{Board, Side, LINE_ORIENTATIONS};

use super::line::line_length;

/// Sum of run lengths through every registered checker of `side`
#[must_use]
pub fn side_total(board: &Board, side: Side) -> i32 {
    board
        .record(side)
        .checkers()
        .iter()
        .map(|&pos| {
            LINE_ORIENTATIONS
                .iter()
                .map(|&orientation| line_length(board, pos, orientation))
                .sum::<i32>()
        })
        .sum()
}

/// Grade the position.
///
/// Returns:
/// - Positive values when the player's lines dominate
/// - Negative values when the computer's lines dominate
/// - 0 on an empty board
#[must_use]
pub fn grade(board: &Board) -> i32 {
    side_total(board, Side::Player) - side_total(board, Side::Computer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_empty_board_is_zero() {
        assert_eq!(grade(&Board::new()), 0);
    }

    #[test]
    fn test_player_only_is_positive() {
        let mut board = Board::new();
        board.place(Side::Player, Pos::new(3, 3));
        assert_eq!(grade(&board), 4);

        board.place(Side::Player, Pos::new(4, 3));
        // Two checkers: 3 lonely axes + one shared run of 2, each
        assert_eq!(grade(&board), 2 * (3 + 2));
        assert!(grade(&board) > 0);
    }

    #[test]
    fn test_computer_only_is_negative() {
        let mut board = Board::new();
        board.place(Side::Computer, Pos::new(0, 0));
        board.place(Side::Computer, Pos::new(7, 7));
        assert_eq!(grade(&board), -8);
    }

    #[test]
    fn test_mirror_position_cancels() {
        let mut board = Board::new();
        board.place(Side::Player, Pos::new(1, 1));
        board.place(Side::Player, Pos::new(2, 1));
        board.place(Side::Computer, Pos::new(1, 5));
        board.place(Side::Computer, Pos::new(2, 5));
        assert_eq!(grade(&board), 0);
    }

    #[test]
    fn test_longer_runs_grade_higher() {
        let mut spread = Board::new();
        spread.place(Side::Player, Pos::new(0, 0));
        spread.place(Side::Player, Pos::new(3, 3));
        spread.place(Side::Player, Pos::new(6, 0));

        let mut line = Board::new();
        for x in 2..5 {
            line.place(Side::Player, Pos::new(x, 3));
        }

        assert!(grade(&line) > grade(&spread));
    }

    #[test]
    fn test_only_registered_checkers_contribute() {
        let mut board = Board::new();
        board.place(Side::Player, Pos::new(3, 3));
        let base = grade(&board);
        // A grid-only neighbour lengthens the registered checker's run
        // but adds no terms of its own.
        board.mark(Side::Player, Pos::new(4, 3));
        assert_eq!(grade(&board), base + 1);
        board.clear(Pos::new(4, 3));
        assert_eq!(grade(&board), base);
    }
}
