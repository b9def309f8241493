//! Depth-limited minimax with alpha-beta pruning
//!
//! This module implements the placement search for the computer opponent.
//! The grade is shared by both sides, so there is no negamax sign flip: the
//! player maximizes and the computer minimizes.
//!
//! # Features
//!
//! - Fixed depth, no time limit (the branching factor stays small because
//!   only cells next to existing checkers are candidates)
//! - Speculative placements go through a `Trial` guard, so every exit path
//!   (including a cutoff) leaves the board as it was
//! - Static grade as the fallback when the side to move has no candidates
//!
//! # Example
//!
//! ```
//! use pente::board::{AnchorMode, Board, Pos, Side};
//! use pente::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(Side::Player, Pos::new(3, 3));
//! board.place(Side::Computer, Pos::new(4, 4));
//!
//! let mut searcher = Searcher::new(3, AnchorMode::Registered);
//! let result = searcher.search(&mut board, Side::Computer);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.x, best_move.y);
//! }
//! ```

use crate::board::{AnchorMode, Board, Pos, Side};
use crate::eval::grade;

use super::movegen::available_moves;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = i32::MAX;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Branches abandoned after `beta < alpha`
    pub cutoffs: u64,
    /// Nodes graded at the depth limit
    pub leaves: u64,
    /// Nodes graded early because the side to move had no candidates
    pub fallbacks: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, None when the side to move had no candidates
    pub best_move: Option<Pos>,
    /// Minimax value of the root
    pub score: i32,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Placement searcher.
pub struct Searcher {
    max_depth: u8,
    anchors: AnchorMode,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(max_depth: u8, anchors: AnchorMode) -> Self {
        Self {
            max_depth,
            anchors,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Search from the root for `side` with a full window.
    ///
    /// The board is borrowed mutably for speculative placements and is
    /// identical to its input state when this returns.
    pub fn search(&mut self, board: &mut Board, side: Side) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let (score, best_move) = self.alpha_beta(board, side, 0, -INF, INF);

        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
            stats: self.stats,
        }
    }

    /// Evaluate one node: returns its minimax value and the move that achieved it.
    ///
    /// `depth` counts plies already played from the root. Ties go to the
    /// later candidate.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        side: Side,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        if depth >= self.max_depth {
            self.stats.leaves += 1;
            return (grade(board), None);
        }

        // A side out of checkers cannot place, even speculatively
        let moves = if board.record(side).is_exhausted() {
            Vec::new()
        } else {
            available_moves(board, side)
        };
        if moves.is_empty() {
            self.stats.fallbacks += 1;
            return (grade(board), None);
        }

        let maximizing = side == Side::Player;
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in moves {
            let score = {
                let mut trial = board.trial(side, mov, self.anchors);
                self.alpha_beta(&mut trial, side.opponent(), depth + 1, alpha, beta).0
            };

            let improves = if maximizing {
                score >= best_score
            } else {
                score <= best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mov);
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }

            if beta < alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_score, best_move)
    }
}
