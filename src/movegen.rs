//! Legal move computation.
//!
//! Decides which of the active player's pieces may move under the current
//! roll, explains why the blocked ones cannot, and hosts the bot's
//! uniform-random selection over the legal set.

use std::fmt;

use rand::Rng;

use crate::board::{cell_at, GameState, EXITED, OFF_BOARD, PATH_LEN, PIECES_PER_PLAYER};

/// Why a piece cannot move under the current roll.
///
/// Advisory output for clients; the rules engine itself only consumes the
/// boolean verdict of [`validate_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// The roll would carry the piece past the exit; bearing off needs the
    /// exact count.
    Overshoot,
    /// The destination already holds one of the mover's own pieces.
    SelfBlocked,
    /// The destination rosette holds an opponent piece, which is safe there.
    RosetteProtected,
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BlockReason::Overshoot => "needs the exact count to exit",
            BlockReason::SelfBlocked => "own piece on the target square",
            BlockReason::RosetteProtected => "opponent is protected by a rosette",
        };
        f.write_str(text)
    }
}

/// Computes the candidate destination for a piece position under a roll.
///
/// An off-board piece enters at `dice - 1`, so a roll of 1 enters at path
/// position 0; an on-board piece advances by the full roll. `PATH_LEN`
/// means bearing off.
pub fn destination(pos: i8, dice: u8) -> i8 {
    if pos == OFF_BOARD {
        dice as i8 - 1
    } else {
        pos + dice as i8
    }
}

/// Returns true if the active player may move `piece_index` under the
/// current roll.
pub fn validate_move(state: &GameState, piece_index: usize) -> bool {
    if piece_index >= PIECES_PER_PLAYER || state.dice_result == 0 {
        return false;
    }

    let mover = state.current_player;
    let pos = state.player(mover).pieces[piece_index];
    if pos == EXITED {
        return false;
    }

    let dest = destination(pos, state.dice_result);
    if dest == PATH_LEN as i8 {
        // Bearing off ignores occupancy.
        return true;
    }
    if dest > PATH_LEN as i8 {
        return false;
    }

    let cell = cell_at(mover, dest as usize);
    match state.occupant(cell) {
        Some(occ) if occ.player == mover => false,
        Some(_) if cell.is_rosette() => false,
        _ => true,
    }
}

/// Piece indices the active player may move, in piece-index order.
pub fn valid_moves(state: &GameState) -> Vec<usize> {
    (0..PIECES_PER_PLAYER)
        .filter(|&i| validate_move(state, i))
        .collect()
}

/// Returns true if the active player has at least one legal move.
pub fn has_valid_moves(state: &GameState) -> bool {
    (0..PIECES_PER_PLAYER).any(|i| validate_move(state, i))
}

/// Explains each blocked piece of the active player.
///
/// Exited pieces get no entry; pieces that can move get no entry.
pub fn move_diagnostics(state: &GameState) -> [Option<BlockReason>; PIECES_PER_PLAYER] {
    let mut reasons = [None; PIECES_PER_PLAYER];
    for (piece_index, reason) in reasons.iter_mut().enumerate() {
        *reason = block_reason(state, piece_index);
    }
    reasons
}

/// The reason `piece_index` cannot move, if it is blocked.
fn block_reason(state: &GameState, piece_index: usize) -> Option<BlockReason> {
    if state.dice_result == 0 || validate_move(state, piece_index) {
        return None;
    }

    let mover = state.current_player;
    let pos = state.player(mover).pieces[piece_index];
    if pos == EXITED {
        return None;
    }

    let dest = destination(pos, state.dice_result);
    if dest > PATH_LEN as i8 {
        return Some(BlockReason::Overshoot);
    }

    let cell = cell_at(mover, dest as usize);
    match state.occupant(cell) {
        Some(occ) if occ.player == mover => Some(BlockReason::SelfBlocked),
        Some(_) if cell.is_rosette() => Some(BlockReason::RosetteProtected),
        _ => None,
    }
}

/// Picks one legal move uniformly at random, or `None` if the active
/// player has no legal move.
///
/// This is the whole bot policy: no look-ahead, no capture or rosette
/// preference.
pub fn random_move(state: &GameState, rng: &mut impl Rng) -> Option<usize> {
    let moves = valid_moves(state);
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.gen_range(0..moves.len())])
    }
}
