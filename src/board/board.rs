//! Board structure with per-side checker registries

use std::fmt;

use super::record::SideRecord;
use super::{Cell, Pos, Side, BOARD_SIZE};

/// Game board: the occupancy grid plus one registry per side.
///
/// Every occupied cell is registered to exactly one side and every empty cell
/// to none. `place` and `remove` keep that in sync; `clear` is the one
/// grid-only write and is reserved for undoing grid-only trials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    player: SideRecord,
    computer: SideRecord,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            player: SideRecord::new(Side::Player),
            computer: SideRecord::new(Side::Computer),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get occupancy at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.y as usize][pos.x as usize]
    }

    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        !self.get(pos).is_empty()
    }

    /// Place a checker for `side`.
    ///
    /// # Panics
    ///
    /// If the cell is already occupied or the side has no checkers left.
    pub fn place(&mut self, side: Side, pos: Pos) {
        assert!(
            !self.is_occupied(pos),
            "cannot place {:?} at ({}, {}): cell is occupied",
            side,
            pos.x,
            pos.y
        );
        self.record_mut(side).register(pos);
        self.set(pos, side.cell());
    }

    /// Remove the checker at `pos` from the board and from its owner's registry.
    ///
    /// # Panics
    ///
    /// If the cell is empty.
    pub fn remove(&mut self, pos: Pos) {
        let owner = match self.get(pos).side() {
            Some(side) => side,
            None => panic!("cannot remove from ({}, {}): cell is empty", pos.x, pos.y),
        };
        let registered = self.record_mut(owner).unregister(pos);
        debug_assert!(registered, "occupied cell missing from {:?} registry", owner);
        self.set(pos, Cell::Empty);
    }

    /// Empty a cell without touching the registries.
    ///
    /// Only valid for cells written by a grid-only trial.
    pub(crate) fn clear(&mut self, pos: Pos) {
        debug_assert!(
            !self.player.contains(pos) && !self.computer.contains(pos),
            "clearing a registered checker at ({}, {})",
            pos.x,
            pos.y
        );
        self.set(pos, Cell::Empty);
    }

    /// Occupy a cell without touching the registries
    pub(crate) fn mark(&mut self, side: Side, pos: Pos) {
        debug_assert!(!self.is_occupied(pos));
        self.set(pos, side.cell());
    }

    #[inline]
    fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.y as usize][pos.x as usize] = cell;
    }

    /// Registry for a side
    #[inline]
    pub fn record(&self, side: Side) -> &SideRecord {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    #[inline]
    fn record_mut(&mut self, side: Side) -> &mut SideRecord {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    /// Total checkers on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.player.placed_count() + self.computer.placed_count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.player.is_empty() && self.computer.is_empty()
    }

    /// True when no empty cell is left
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {}", x)?;
        }
        writeln!(f)?;

        for (y, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", y)?;
            for cell in row {
                let ch = match cell {
                    Cell::Player => 'O',
                    Cell::Computer => 'X',
                    Cell::Empty => '.',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
