//! Contiguous run measurement along a line

use crate::board::{Board, Dir, Pos};

/// Length of the run starting at `pos` and walking along `dir`.
///
/// The occupant of `pos` is the reference; the walk continues while the next
/// cell holds the same occupant and stops at the board edge. The origin cell
/// counts, so the result is at least 1.
#[must_use]
pub fn run_length(board: &Board, pos: Pos, dir: Dir) -> i32 {
    let reference = board.get(pos);
    let mut len = 1;
    let mut cur = pos;
    while let Some(next) = cur.offset(dir) {
        if board.get(next) != reference {
            break;
        }
        len += 1;
        cur = next;
    }
    len
}

/// Length of the same-side run through `pos` along the whole axis of `orientation`
#[inline]
#[must_use]
pub fn line_length(board: &Board, pos: Pos, orientation: Dir) -> i32 {
    run_length(board, pos, orientation) + run_length(board, pos, -orientation) - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Side, LINE_ORIENTATIONS};

    #[test]
    fn test_single_piece_is_one_everywhere() {
        let mut board = Board::new();
        let pos = Pos::new(4, 4);
        board.place(Side::Player, pos);
        for orientation in LINE_ORIENTATIONS {
            assert_eq!(line_length(&board, pos, orientation), 1);
        }
    }

    #[test]
    fn test_run_length_counts_one_way() {
        let mut board = Board::new();
        for x in 2..5 {
            board.place(Side::Computer, Pos::new(x, 6));
        }
        let right = Dir::new(1, 0);
        assert_eq!(run_length(&board, Pos::new(2, 6), right), 3);
        assert_eq!(run_length(&board, Pos::new(2, 6), -right), 1);
        assert_eq!(run_length(&board, Pos::new(4, 6), -right), 3);
    }

    #[test]
    fn test_collinear_pieces_every_member_sees_full_length() {
        for (i, orientation) in LINE_ORIENTATIONS.iter().enumerate() {
            let mut board = Board::new();
            // Start far enough in that all 4 cells stay on the board
            let start = if orientation.dy < 0 { Pos::new(1, 6) } else { Pos::new(1, 1) };
            let mut line = vec![start];
            for _ in 1..4 {
                let next = line.last().unwrap().offset(*orientation).unwrap();
                line.push(next);
            }
            for &pos in &line {
                board.place(Side::Player, pos);
            }
            for &pos in &line {
                assert_eq!(line_length(&board, pos, *orientation), 4, "orientation {}", i);
            }
        }
    }

    #[test]
    fn test_other_side_breaks_run() {
        let mut board = Board::new();
        board.place(Side::Player, Pos::new(0, 0));
        board.place(Side::Player, Pos::new(1, 0));
        board.place(Side::Computer, Pos::new(2, 0));
        board.place(Side::Player, Pos::new(3, 0));
        assert_eq!(line_length(&board, Pos::new(0, 0), Dir::new(1, 0)), 2);
        assert_eq!(line_length(&board, Pos::new(3, 0), Dir::new(1, 0)), 1);
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut board = Board::new();
        board.place(Side::Player, Pos::new(0, 3));
        board.place(Side::Player, Pos::new(0, 5));
        assert_eq!(line_length(&board, Pos::new(0, 3), Dir::new(0, 1)), 1);
    }

    #[test]
    fn test_run_stops_at_edge() {
        let mut board = Board::new();
        for x in 0..8 {
            board.place(Side::Computer, Pos::new(x, 7));
        }
        assert_eq!(line_length(&board, Pos::new(0, 7), Dir::new(1, 0)), 8);
        assert_eq!(run_length(&board, Pos::new(7, 7), Dir::new(1, 0)), 1);
        assert_eq!(run_length(&board, Pos::new(7, 7), Dir::new(1, 1)), 1);
    }
}
