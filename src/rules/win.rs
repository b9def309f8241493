//! Win condition checking
//!
//! A side wins with five or more of its checkers in a row on any line axis.
//! Overlines count. The game also stops, without a winner, once a side runs
//! out of checkers or the board fills up.

use crate::board::{Board, Pos, Side, LINE_ORIENTATIONS, WIN_LENGTH};
use crate::eval::line_length;

/// Check if any registered checker of `side` sits on a winning run
#[must_use]
pub fn has_won(board: &Board, side: Side) -> bool {
    board.record(side).checkers().iter().any(|&pos| {
        LINE_ORIENTATIONS
            .iter()
            .any(|&orientation| line_length(board, pos, orientation) >= WIN_LENGTH)
    })
}

/// Check if either side has won
#[inline]
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    has_won(board, Side::Player) || has_won(board, Side::Computer)
}

/// The winning side, player checked first
#[must_use]
pub fn winner(board: &Board) -> Option<Side> {
    [Side::Player, Side::Computer]
        .into_iter()
        .find(|&side| has_won(board, side))
}

/// No more placements possible: a side has used all its checkers or the board is full
#[must_use]
pub fn is_exhausted(board: &Board) -> bool {
    board.record(Side::Player).is_exhausted()
        || board.record(Side::Computer).is_exhausted()
        || board.is_full()
}

/// Find the cells of a winning run for `side`.
///
/// Returns every cell of the run (at least five) ordered along the line,
/// or None if the side has not won.
#[must_use]
pub fn find_winning_line(board: &Board, side: Side) -> Option<Vec<Pos>> {
    for &pos in board.record(side).checkers() {
        for &orientation in &LINE_ORIENTATIONS {
            if line_length(board, pos, orientation) < WIN_LENGTH {
                continue;
            }

            // Back up to the start of the run, then collect forwards
            let mut start = pos;
            while let Some(prev) = start.offset(-orientation) {
                if board.get(prev) != side.cell() {
                    break;
                }
                start = prev;
            }

            let mut line = vec![start];
            let mut cur = start;
            while let Some(next) = cur.offset(orientation) {
                if board.get(next) != side.cell() {
                    break;
                }
                line.push(next);
                cur = next;
            }
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for x in 0..5 {
            board.place(Side::Player, Pos::new(x, 4));
        }
        assert!(has_won(&board, Side::Player));
        assert!(!has_won(&board, Side::Computer));
        assert!(is_game_over(&board));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for y in 2..7 {
            board.place(Side::Computer, Pos::new(6, y));
        }
        assert!(has_won(&board, Side::Computer));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(Side::Player, Pos::new(i + 1, 6 - i));
        }
        assert!(has_won(&board, Side::Player));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for x in 0..4 {
            board.place(Side::Player, Pos::new(x, 0));
        }
        for y in 2..6 {
            board.place(Side::Player, Pos::new(7, y));
        }
        assert!(!has_won(&board, Side::Player));
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for x in 1..7 {
            board.place(Side::Computer, Pos::new(x, 3));
        }
        assert!(has_won(&board, Side::Computer));
        assert_eq!(find_winning_line(&board, Side::Computer).map(|l| l.len()), Some(6));
    }

    #[test]
    fn test_diagonal_four_then_fifth() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place(Side::Computer, Pos::new(i, i));
        }
        assert!(!has_won(&board, Side::Computer));

        board.place(Side::Computer, Pos::new(4, 4));
        assert!(has_won(&board, Side::Computer));
        assert_eq!(winner(&board), Some(Side::Computer));
    }

    #[test]
    fn test_mixed_line_not_win() {
        let mut board = Board::new();
        for x in 0..4 {
            board.place(Side::Player, Pos::new(x, 2));
        }
        board.place(Side::Computer, Pos::new(4, 2));
        assert!(!is_game_over(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winning_line_is_ordered() {
        let mut board = Board::new();
        // Placed out of order on purpose
        for y in [5, 3, 1, 4, 2] {
            board.place(Side::Player, Pos::new(2, y));
        }
        let line = find_winning_line(&board, Side::Player).unwrap();
        let ys: Vec<u8> = line.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![1, 2, 3, 4, 5]);
        assert!(line.iter().all(|p| p.x == 2));
    }

    #[test]
    fn test_no_winning_line_without_win() {
        let mut board = Board::new();
        board.place(Side::Player, Pos::new(0, 0));
        assert_eq!(find_winning_line(&board, Side::Player), None);
    }

    #[test]
    fn test_exhausted_when_supply_runs_out() {
        let mut board = Board::new();
        assert!(!is_exhausted(&board));
        for pos in Pos::all().take(32) {
            board.place(Side::Computer, pos);
        }
        assert!(is_exhausted(&board));
    }
}
