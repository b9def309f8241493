//! Per-side checker registry

use super::{Pos, Side, MAX_CHECKERS};

/// Checkers placed by one side, in placement order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideRecord {
    side: Side,
    checkers: Vec<Pos>,
    /// Capture counter. Nothing in placement play awards points, so it stays at 0.
    score: u32,
}

impl SideRecord {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            checkers: Vec::with_capacity(MAX_CHECKERS),
            score: 0,
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn checkers(&self) -> &[Pos] {
        &self.checkers
    }

    #[inline]
    pub fn placed_count(&self) -> usize {
        self.checkers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.checkers.contains(&pos)
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// True once the side has used up its supply of checkers
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.checkers.len() >= MAX_CHECKERS
    }

    pub(super) fn register(&mut self, pos: Pos) {
        assert!(
            !self.is_exhausted(),
            "{:?} has no checkers left to place",
            self.side
        );
        self.checkers.push(pos);
    }

    /// Drop `pos` from the registry, shifting later checkers down.
    /// Returns false if it was not registered.
    pub(super) fn unregister(&mut self, pos: Pos) -> bool {
        match self.checkers.iter().position(|&p| p == pos) {
            Some(idx) => {
                self.checkers.remove(idx);
                true
            }
            None => false,
        }
    }
}
