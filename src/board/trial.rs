//! Scoped speculative placement used by the search

use std::ops::{Deref, DerefMut};

use super::{Board, Pos, Side};

/// How a speculative checker is written to the board during search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorMode {
    /// Full `place`/`remove`: the trial checker is registered, so move
    /// generation and grading at deeper plies see it.
    #[default]
    Registered,
    /// Grid write only, reverted with `clear`. Registries stay stale, so the
    /// trial checker never anchors new candidate moves.
    GridOnly,
}

/// A checker placed for the lifetime of the guard.
///
/// The cell is restored when the guard is dropped, whichever way the scope
/// is left. Access the board through the guard while it lives.
pub struct Trial<'a> {
    board: &'a mut Board,
    pos: Pos,
    mode: AnchorMode,
}

impl Board {
    /// Speculatively occupy `pos` for `side` until the returned guard drops.
    ///
    /// # Panics
    ///
    /// If the cell is already occupied.
    pub fn trial(&mut self, side: Side, pos: Pos, mode: AnchorMode) -> Trial<'_> {
        match mode {
            AnchorMode::Registered => self.place(side, pos),
            AnchorMode::GridOnly => {
                assert!(!self.is_occupied(pos), "trial on occupied cell ({}, {})", pos.x, pos.y);
                self.mark(side, pos);
            }
        }
        Trial { board: self, pos, mode }
    }
}

impl Trial<'_> {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        match self.mode {
            AnchorMode::Registered => self.board.remove(self.pos),
            AnchorMode::GridOnly => self.board.clear(self.pos),
        }
    }
}
