//! Move application.
//!
//! Applies a validated move to the match state: capture, bearing off, the
//! win check, and the rosette extra-turn rule, in that order. Destination
//! arithmetic is shared with validation through `movegen::destination` so
//! the two can never drift apart.

use crate::board::{cell_at, GameState, Phase, EXITED, OFF_BOARD, PATH_LEN, PIECES_PER_PLAYER};
use crate::movegen::destination;

/// What applying a move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEvent {
    /// The piece advanced to an empty or friendly-free cell.
    Advanced,
    /// An opponent piece was sent back to its owner's hand.
    Captured,
    /// The piece bore off the board.
    Scored,
    /// The move bore off the mover's seventh piece.
    Won,
}

/// Result of applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub event: MoveEvent,
    /// The mover landed on a rosette and keeps the turn. Never set
    /// together with `MoveEvent::Won`; the win check runs first.
    pub extra_turn: bool,
}

/// Applies a move the caller has already validated.
///
/// Performs the state mutation in full: piece placement or removal,
/// occupancy rebuild, win check, then the turn transition. Only the engine
/// facade calls this, after `movegen::validate_move` has accepted the
/// piece index.
pub fn apply_move(state: &mut GameState, piece_index: usize) -> MoveOutcome {
    let mover = state.current_player;
    let pos = state.player(mover).pieces[piece_index];
    let dest = destination(pos, state.dice_result);

    let mut event = MoveEvent::Advanced;

    if dest == PATH_LEN as i8 {
        state.player_mut(mover).pieces[piece_index] = EXITED;
        state.player_mut(mover).completed += 1;
        event = MoveEvent::Scored;
    } else {
        let cell = cell_at(mover, dest as usize);
        if let Some(occ) = state.occupant(cell) {
            if occ.player != mover {
                state.player_mut(occ.player).pieces[occ.piece_index] = OFF_BOARD;
                event = MoveEvent::Captured;
            }
        }
        state.player_mut(mover).pieces[piece_index] = dest;
    }

    state.rebuild_occupancy();

    if state.player(mover).completed == PIECES_PER_PLAYER as u8 {
        state.winner = Some(mover);
        state.clear_move_caches();
        return MoveOutcome {
            event: MoveEvent::Won,
            extra_turn: false,
        };
    }

    let extra_turn =
        dest < PATH_LEN as i8 && cell_at(mover, dest as usize).is_rosette();
    if extra_turn {
        state.phase = Phase::Roll;
        state.dice_result = 0;
        state.clear_move_caches();
    } else {
        state.switch_player();
    }

    MoveOutcome { event, extra_turn }
}
