//! Board representation for Pente placement play

pub mod board;
pub mod record;
pub mod trial;


// Re-exports
pub use board::Board;
pub use record::SideRecord;
pub use trial::{AnchorMode, Trial};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Most checkers one side can ever place
pub const MAX_CHECKERS: usize = 32;

/// Run length that wins the game (longer runs win too)
pub const WIN_LENGTH: i32 = 5;

/// The two competing parties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Occupancy marker this side leaves on the grid
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Side::Player => Cell::Player,
            Side::Computer => Cell::Computer,
        }
    }
}

/// Occupancy of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player,
    Computer,
}

impl Cell {
    /// Owner of the cell, `None` when empty
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Player => Some(Side::Player),
            Cell::Computer => Some(Side::Computer),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Position on the board.
///
/// `x` grows to the right, `y` grows downwards. The "no position" sentinel is
/// `Option::<Pos>::None`, so it can never collide with a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    /// Build a position from signed coordinates, `None` when off the board
    #[inline]
    pub fn checked(x: i32, y: i32) -> Option<Self> {
        if Self::is_valid(x, y) {
            Some(Self { x: x as u8, y: y as u8 })
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// Step one cell in `dir`; `None` when the step leaves the board
    #[inline]
    pub fn offset(self, dir: Dir) -> Option<Self> {
        Self::checked(self.x as i32 + dir.dx as i32, self.y as i32 + dir.dy as i32)
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    /// Every cell of the board in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

/// Unit step between neighbouring cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dir {
    pub dx: i8,
    pub dy: i8,
}

impl Dir {
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    /// Same axis, opposite way
    #[inline]
    pub const fn reversed(self) -> Self {
        Self { dx: -self.dx, dy: -self.dy }
    }
}

impl std::ops::Neg for Dir {
    type Output = Dir;

    fn neg(self) -> Dir {
        self.reversed()
    }
}

/// All 8 neighbour directions, in move generation order
pub const NEIGHBOR_DIRS: [Dir; 8] = [
    Dir::new(0, 1),   // down
    Dir::new(1, 0),   // right
    Dir::new(-1, 0),  // left
    Dir::new(0, -1),  // up
    Dir::new(1, 1),   // down-right
    Dir::new(-1, 1),  // down-left
    Dir::new(-1, -1), // up-left
    Dir::new(1, -1),  // up-right
];

/// One direction per undirected line axis
pub const LINE_ORIENTATIONS: [Dir; 4] = [
    Dir::new(1, 0),  // Horizontal
    Dir::new(1, 1),  // Diagonal
    Dir::new(0, 1),  // Vertical
    Dir::new(1, -1), // Anti-diagonal
];
