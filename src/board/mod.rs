//! Board representation and match-state types.
//!
//! Contains the core data structures for cells, paths, rosettes, player
//! pieces, and the overall match state.

pub mod cell;
pub mod state;

pub use cell::{
    cell_at, Cell, Player, ALL_CELLS, BOARD_LAYOUT, CELL_COUNT, LAYOUT_SLOTS, PATH_LEN,
    PIECES_PER_PLAYER, PLAYER1_PATH, PLAYER2_PATH,
};
pub use state::{GameState, Occupant, Phase, PlayerState, EXITED, OFF_BOARD};
