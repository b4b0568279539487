//! Engine facade.
//!
//! One `GameEngine` per room: it owns the match state and the RNG, accepts
//! player intents, validates them against the rules, and hands back the
//! full snapshot the room broadcasts. Rejected intents never touch the
//! state.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::board::{GameState, Phase, PIECES_PER_PLAYER};
use crate::dice::{self, MAX_ROLL};
use crate::movegen;
use crate::protocol::Snapshot;
use crate::resolve::{self, MoveEvent};

/// Why an intent was rejected. The state is unchanged in every case.
///
/// These are caller-protocol errors (stale or malicious client messages);
/// the room layer is expected to drop the intent, not crash.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("dice can only be rolled in the roll phase")]
    NotRollPhase,

    #[error("no move is expected in the current phase")]
    NotMovePhase,

    #[error("the match is already decided")]
    GameFinished,

    #[error("piece {piece_index} has no legal move")]
    IllegalMove { piece_index: usize },
}

/// Authoritative engine for one room.
pub struct GameEngine {
    pub state: GameState,
    rng: SmallRng,
}

impl GameEngine {
    /// Creates an engine with an entropy-seeded RNG.
    pub fn new() -> Self {
        GameEngine::from_rng(SmallRng::from_entropy())
    }

    /// Creates an engine with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        GameEngine::from_rng(SmallRng::seed_from_u64(seed))
    }

    /// Creates an engine from an explicit RNG.
    pub fn from_rng(rng: SmallRng) -> Self {
        GameEngine {
            state: GameState::new(),
            rng,
        }
    }

    /// Rolls the dice for the active player.
    pub fn roll_dice(&mut self) -> Result<Snapshot, EngineError> {
        self.check_rollable()?;
        let roll = dice::roll(&mut self.rng);
        self.apply_roll(roll)
    }

    /// Applies a known roll for the active player.
    ///
    /// This is the deterministic half of `roll_dice`, also usable to replay
    /// a recorded game or script a scenario.
    pub fn apply_roll(&mut self, roll: u8) -> Result<Snapshot, EngineError> {
        self.check_rollable()?;
        debug_assert!(roll <= MAX_ROLL);

        let player = self.state.current_player.number();
        self.state.dice_result = roll;

        if roll == 0 {
            self.state.last_action = format!("Player {} rolled 0 and loses the turn", player);
            self.state.switch_player();
        } else if !movegen::has_valid_moves(&self.state) {
            self.state.last_action =
                format!("Player {} rolled {} but has no move", player, roll);
            self.state.switch_player();
        } else {
            self.state.phase = Phase::Move;
            self.state.valid_moves = movegen::valid_moves(&self.state);
            self.state.move_diagnostics = movegen::move_diagnostics(&self.state);
            self.state.last_action =
                format!("Player {} rolled {} - pick a piece", player, roll);
        }

        Ok(self.snapshot())
    }

    fn check_rollable(&self) -> Result<(), EngineError> {
        if self.state.winner.is_some() {
            return Err(EngineError::GameFinished);
        }
        if self.state.phase != Phase::Roll {
            return Err(EngineError::NotRollPhase);
        }
        Ok(())
    }

    /// Moves one of the active player's pieces.
    pub fn move_piece(&mut self, piece_index: usize) -> Result<Snapshot, EngineError> {
        if self.state.winner.is_some() {
            return Err(EngineError::GameFinished);
        }
        if self.state.phase != Phase::Move {
            return Err(EngineError::NotMovePhase);
        }
        if piece_index >= PIECES_PER_PLAYER || !movegen::validate_move(&self.state, piece_index) {
            return Err(EngineError::IllegalMove { piece_index });
        }

        let player = self.state.current_player.number();
        let outcome = resolve::apply_move(&mut self.state, piece_index);

        self.state.last_action = if outcome.extra_turn {
            format!("Rosette! Player {} rolls again", player)
        } else {
            match outcome.event {
                MoveEvent::Won => format!("Player {} wins!", player),
                MoveEvent::Captured => format!("Player {} captured a piece", player),
                MoveEvent::Scored => format!("Player {} bore a piece off", player),
                MoveEvent::Advanced => format!("Player {} moved", player),
            }
        };

        Ok(self.snapshot())
    }

    /// Current state as the broadcastable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.state)
    }

    /// Picks a move for the active player, uniformly among the legal ones.
    ///
    /// Returns `None` when no legal move exists, which the caller only
    /// sees if it asks outside the move phase.
    pub fn bot_move(&mut self) -> Option<usize> {
        movegen::random_move(&self.state, &mut self.rng)
    }

    /// Throws the match away and starts a fresh one.
    pub fn reset(&mut self) -> Snapshot {
        self.state = GameState::new();
        self.snapshot()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine::new()
    }
}
