//! Game rules for placement play
//!
//! Five or more in a row wins; the game is drawn once no more
//! placements are possible.

pub mod win;

pub use win::{find_winning_line, has_won, is_exhausted, is_game_over, winner};
