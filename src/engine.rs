//! Computer move selection
//!
//! This module wraps the search in the decisions the turn loop needs:
//!
//! 1. **Opening**: the computer's first checker goes on a random empty cell
//!    next to the player's checkers (searching an almost empty board only
//!    produces a degenerate tie)
//! 2. **Alpha-Beta**: depth-limited minimax over the computer's candidates
//! 3. **Fallback**: if the computer's checkers are all boxed in, a random
//!    cell next to the player, then the first empty cell
//!
//! # Example
//!
//! ```
//! use pente::{Board, Engine, EngineConfig, Pos, Side};
//!
//! let mut board = Board::new();
//! board.place(Side::Player, Pos::new(3, 3));
//!
//! let engine = Engine::new(EngineConfig::default());
//! let result = engine.choose_move(&board, &mut rand::thread_rng());
//! println!("Best move: {:?}", result.best_move);
//! println!("Kind: {:?}", result.kind);
//! println!("Time: {}ms", result.time_ms);
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Instant;

use crate::board::{AnchorMode, Board, Pos, Side};
use crate::eval::grade;
use crate::search::{available_moves, Searcher};

/// Depth used by the default configuration
pub const DEFAULT_DEPTH: u8 = 3;

/// Which step of move selection produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Random first move next to the player
    Opening,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Search found nothing, picked a free cell instead
    Fallback,
}

/// Result of a move choice with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen cell, None only when the board is full
    pub best_move: Option<Pos>,
    /// Search value (static grade for opening/fallback moves)
    pub score: i32,
    /// Step that produced the move
    pub kind: MoveKind,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn quick(pos: Option<Pos>, score: i32, kind: MoveKind, start: Instant) -> Self {
        Self {
            best_move: pos,
            score,
            kind,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: 0,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched before grading
    pub max_depth: u8,
    /// How speculative checkers are written during search
    pub anchors: AnchorMode,
    /// Play the first computer checker at random instead of searching
    pub random_opening: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            anchors: AnchorMode::Registered,
            random_opening: true,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

/// Computer opponent.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pick the computer's next placement.
    ///
    /// `board` is not modified; the search runs on a scratch copy. The
    /// caller applies the move with `Board::place(Side::Computer, pos)`.
    pub fn choose_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> MoveResult {
        let start = Instant::now();

        // 0. Opening move next to the player
        if self.config.random_opening && board.record(Side::Computer).is_empty() {
            if let Some(pos) = self.opening_move(board, rng) {
                return MoveResult::quick(Some(pos), grade(board), MoveKind::Opening, start);
            }
        }

        // 1. Alpha-beta search
        let mut scratch = board.clone();
        let mut searcher = Searcher::new(self.config.max_depth, self.config.anchors);
        let result = searcher.search(&mut scratch, Side::Computer);
        if let Some(pos) = result.best_move {
            return MoveResult {
                best_move: Some(pos),
                score: result.score,
                kind: MoveKind::AlphaBeta,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: result.nodes,
            };
        }

        // 2. Nothing reachable from our checkers
        let pos = self.fallback_move(board, rng);
        MoveResult {
            nodes: result.nodes,
            ..MoveResult::quick(pos, result.score, MoveKind::Fallback, start)
        }
    }

    /// Uniform pick among the cells next to the player's checkers
    pub fn opening_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Pos> {
        available_moves(board, Side::Player).choose(rng).copied()
    }

    fn fallback_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Pos> {
        self.opening_move(board, rng)
            .or_else(|| Pos::all().find(|&pos| !board.is_occupied(pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_opening_is_next_to_player() {
        let mut board = Board::new();
        board.place(Side::Player, Pos::new(3, 3));
        let candidates = available_moves(&board, Side::Player);

        let engine = Engine::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let result = engine.choose_move(&board, &mut rng);
            assert_eq!(result.kind, MoveKind::Opening);
            assert!(candidates.contains(&result.best_move.unwrap()));
        }
    }

    #[test]
    fn test_opening_covers_all_neighbors() {
        let mut board = Board::new();
        board.place(Side::Player, Pos::new(3, 3));

        let engine = Engine::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..400 {
            seen.insert(engine.opening_move(&board, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_searches_after_opening() {
        let mut board = Board::new();
        board.place(Side::Player, Pos::new(3, 3));
        board.place(Side::Computer, Pos::new(4, 4));
        board.place(Side::Player, Pos::new(3, 4));
        let before = board.clone();

        let engine = Engine::default();
        let result = engine.choose_move(&board, &mut StdRng::seed_from_u64(3));

        assert_eq!(result.kind, MoveKind::AlphaBeta);
        assert!(result.nodes > 0);
        let pos = result.best_move.unwrap();
        assert!(!board.is_occupied(pos));
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_matches_searcher() {
        let mut board = Board::new();
        board.place(Side::Player, Pos::new(2, 2));
        board.place(Side::Player, Pos::new(3, 2));
        board.place(Side::Computer, Pos::new(2, 3));

        let engine = Engine::new(EngineConfig::default());
        let result = engine.choose_move(&board, &mut StdRng::seed_from_u64(4));

        let mut searcher = Searcher::new(DEFAULT_DEPTH, AnchorMode::Registered);
        let direct = searcher.search(&mut board.clone(), Side::Computer);
        assert_eq!(result.best_move, direct.best_move);
        assert_eq!(result.score, direct.score);
    }

    #[test]
    fn test_no_random_opening_searches_from_start() {
        let mut board = Board::new();
        board.place(Side::Player, Pos::new(3, 3));

        let config = EngineConfig {
            random_opening: false,
            ..EngineConfig::default()
        };
        let engine = Engine::new(config);
        // Computer has no checkers, so the search has no candidates
        let result = engine.choose_move(&board, &mut StdRng::seed_from_u64(5));
        assert_eq!(result.kind, MoveKind::Fallback);
        assert!(available_moves(&board, Side::Player).contains(&result.best_move.unwrap()));
    }

    #[test]
    fn test_boxed_in_computer_falls_back() {
        let mut board = Board::new();
        board.place(Side::Computer, Pos::new(0, 0));
        board.place(Side::Player, Pos::new(1, 0));
        board.place(Side::Player, Pos::new(0, 1));
        board.place(Side::Player, Pos::new(1, 1));

        let engine = Engine::default();
        let result = engine.choose_move(&board, &mut StdRng::seed_from_u64(6));
        assert_eq!(result.kind, MoveKind::Fallback);
        let pos = result.best_move.unwrap();
        assert!(!board.is_occupied(pos));
        assert!(available_moves(&board, Side::Player).contains(&pos));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for (i, pos) in Pos::all().enumerate() {
            let side = if i % 2 == 0 { Side::Player } else { Side::Computer };
            board.place(side, pos);
        }
        let engine = Engine::default();
        let result = engine.choose_move(&board, &mut StdRng::seed_from_u64(7));
        assert_eq!(result.best_move, None);
        assert_eq!(result.kind, MoveKind::Fallback);
    }

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.anchors, AnchorMode::Registered);
        assert!(config.random_opening);
        assert_eq!(EngineConfig::with_depth(2).max_depth, 2);
    }
}
