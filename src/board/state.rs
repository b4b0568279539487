//! Match state representation.
//!
//! Holds the complete snapshot of one match: whose turn it is, the dice,
//! the turn phase, both players' piece positions, and the derived occupancy
//! map. The occupancy map is always rebuilt from the piece arrays, never
//! patched in place, so it cannot drift from them.

use serde::{Deserialize, Serialize};

use super::cell::{cell_at, Cell, Player, CELL_COUNT, PATH_LEN, PIECES_PER_PLAYER};
use crate::movegen::BlockReason;

/// Piece marker: still off the board, waiting to enter.
pub const OFF_BOARD: i8 = -1;

/// Piece marker: traversed the full path and borne off.
pub const EXITED: i8 = -2;

/// The phase within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for the active player to roll the dice.
    Roll,
    /// Waiting for the active player to pick a piece.
    Move,
}

/// One player's pieces and bear-off count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    /// Position of each piece: `OFF_BOARD`, `EXITED`, or a path index 0..14.
    pub pieces: [i8; PIECES_PER_PLAYER],
    /// Number of pieces borne off; 7 wins the match.
    pub completed: u8,
}

impl PlayerState {
    /// All pieces waiting to enter.
    pub fn new() -> Self {
        PlayerState {
            pieces: [OFF_BOARD; PIECES_PER_PLAYER],
            completed: 0,
        }
    }

}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState::new()
    }
}

/// An on-board piece, as seen through the occupancy map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub player: Player,
    pub piece_index: usize,
}

/// Complete state of one match.
///
/// Mutated only by the engine's transition operations; everything derived
/// (`occupancy`, `valid_moves`, `move_diagnostics`) is recomputed wholesale
/// when the underlying piece arrays change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub current_player: Player,
    /// Last roll, 0..=4. Zero outside the move phase.
    pub dice_result: u8,
    pub phase: Phase,
    pub winner: Option<Player>,
    /// Indexed by `Player::index()`.
    pub players: [PlayerState; 2],
    /// Occupant per cell, indexed by `Cell as usize`.
    pub occupancy: [Option<Occupant>; CELL_COUNT],
    /// Piece indices with a legal move this turn. Roll-scoped cache.
    pub valid_moves: Vec<usize>,
    /// Why each blocked piece cannot move this turn. Roll-scoped cache.
    pub move_diagnostics: [Option<BlockReason>; PIECES_PER_PLAYER],
    /// Human-readable description of the last event. Advisory only.
    pub last_action: String,
}

impl GameState {
    /// A fresh match: all pieces waiting, player 1 to roll.
    pub fn new() -> Self {
        GameState {
            current_player: Player::One,
            dice_result: 0,
            phase: Phase::Roll,
            winner: None,
            players: [PlayerState::new(), PlayerState::new()],
            occupancy: [None; CELL_COUNT],
            valid_moves: Vec::new(),
            move_diagnostics: [None; PIECES_PER_PLAYER],
            last_action: String::from("Match started"),
        }
    }

    /// Borrows one player's state.
    pub fn player(&self, player: Player) -> &PlayerState {
        &self.players[player.index()]
    }

    /// Mutably borrows one player's state.
    pub fn player_mut(&mut self, player: Player) -> &mut PlayerState {
        &mut self.players[player.index()]
    }

    /// Returns the occupant of a cell, if any.
    pub fn occupant(&self, cell: Cell) -> Option<Occupant> {
        self.occupancy[cell as usize]
    }

    /// Rebuilds the occupancy map from both players' piece arrays.
    ///
    /// Off-board and exited pieces never appear; the move rules guarantee
    /// at most one piece per cell.
    pub fn rebuild_occupancy(&mut self) {
        self.occupancy = [None; CELL_COUNT];
        for player in [Player::One, Player::Two] {
            let pieces = self.player(player).pieces;
            for (piece_index, &pos) in pieces.iter().enumerate() {
                if (0..PATH_LEN as i8).contains(&pos) {
                    let cell = cell_at(player, pos as usize);
                    debug_assert!(self.occupancy[cell as usize].is_none());
                    self.occupancy[cell as usize] = Some(Occupant {
                        player,
                        piece_index,
                    });
                }
            }
        }
    }

    /// Hands the turn to the opponent: dice back to zero, phase back to
    /// roll, move caches dropped.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
        self.dice_result = 0;
        self.phase = Phase::Roll;
        self.clear_move_caches();
    }

    /// Drops the roll-scoped caches when the move phase is left.
    pub fn clear_move_caches(&mut self) {
        self.valid_moves.clear();
        self.move_diagnostics = [None; PIECES_PER_PLAYER];
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
