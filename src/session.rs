//! Room ownership and the bot turn machine.
//!
//! A `RoomManager` owns one `GameEngine` per active room, keyed by room
//! id, with an explicit create/join/leave lifecycle: a room is torn down
//! when its last participant leaves or when the transport removes it
//! outright. `BotTurn` drives the bot's roll-then-move sequence as an
//! explicit state machine; the transport layer schedules the delay between
//! steps and re-checks room existence before each one.

use std::collections::HashMap;

use crate::board::{Phase, Player};
use crate::engine::GameEngine;
use crate::protocol::Snapshot;

/// How a room is being used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    /// One human against the built-in bot.
    Solo,
    /// Two humans; extra participants are spectators.
    Versus,
}

/// One active room: its engine plus participant accounting.
pub struct Room {
    pub engine: GameEngine,
    pub kind: RoomKind,
    participants: usize,
}

impl Room {
    fn new(kind: RoomKind) -> Self {
        Room {
            engine: GameEngine::new(),
            kind,
            participants: 0,
        }
    }

    /// The seat the bot plays in this room, if any. Solo rooms always give
    /// the bot seat two; the human is seat one.
    pub fn bot_player(&self) -> Option<Player> {
        match self.kind {
            RoomKind::Solo => Some(Player::Two),
            RoomKind::Versus => None,
        }
    }

    /// Players plus spectators currently connected.
    pub fn participant_count(&self) -> usize {
        self.participants
    }
}

/// Owns the engines for all active rooms.
///
/// The transport layer calls `join`/`leave` as sockets attach and detach;
/// the manager never reaps rooms on its own.
#[derive(Default)]
pub struct RoomManager {
    rooms: HashMap<String, Room>,
}

impl RoomManager {
    pub fn new() -> Self {
        RoomManager {
            rooms: HashMap::new(),
        }
    }

    /// Creates a room with a fresh match. Returns false if the id is taken.
    pub fn create_room(&mut self, id: &str, kind: RoomKind) -> bool {
        if self.rooms.contains_key(id) {
            return false;
        }
        self.rooms.insert(id.to_string(), Room::new(kind));
        true
    }

    /// Borrows a room.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Mutably borrows a room's engine.
    pub fn engine_mut(&mut self, id: &str) -> Option<&mut GameEngine> {
        self.rooms.get_mut(id).map(|room| &mut room.engine)
    }

    /// Registers a participant. Returns the new participant count, or
    /// `None` if the room does not exist.
    pub fn join(&mut self, id: &str) -> Option<usize> {
        let room = self.rooms.get_mut(id)?;
        room.participants += 1;
        Some(room.participants)
    }

    /// Deregisters a participant, tearing the room down when the last one
    /// leaves. Returns true if the room was removed.
    pub fn leave(&mut self, id: &str) -> bool {
        let empty = match self.rooms.get_mut(id) {
            Some(room) => {
                room.participants = room.participants.saturating_sub(1);
                room.participants == 0
            }
            None => return false,
        };
        if empty {
            self.rooms.remove(id);
        }
        empty
    }

    /// Removes a room regardless of participants.
    pub fn remove_room(&mut self, id: &str) -> bool {
        self.rooms.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// What one bot step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotStep {
    /// The bot rolled; broadcast this snapshot and schedule the next step.
    Rolled(Snapshot),
    /// The bot moved; broadcast this snapshot and schedule the next step.
    Moved(Snapshot),
    /// The turn is over (or was never the bot's); nothing to broadcast.
    Finished,
}

/// The bot's turn as an explicit state machine.
///
/// The original timed-callback chain becomes two suspension points: after
/// a roll and after a move. The caller invokes `step` once per scheduled
/// wakeup, re-reading the authoritative engine each time, and stops when
/// `Finished` comes back. Rosette extra turns and pass-the-turn rolls are
/// handled by the machine looping back to the roll state.
pub struct BotTurn {
    player: Player,
    state: BotTurnState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BotTurnState {
    AwaitRoll,
    AwaitMove,
    Finished,
}

impl BotTurn {
    /// A turn for the given bot seat, starting at the roll step.
    pub fn new(player: Player) -> Self {
        BotTurn {
            player,
            state: BotTurnState::AwaitRoll,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state == BotTurnState::Finished
    }

    /// Runs one step against the engine's current state.
    ///
    /// The engine may have changed since the last step (human reconnect,
    /// reset, a win); the machine bails out with `Finished` whenever the
    /// turn no longer belongs to its seat.
    pub fn step(&mut self, engine: &mut GameEngine) -> BotStep {
        if self.state == BotTurnState::Finished {
            return BotStep::Finished;
        }
        if engine.state.winner.is_some() || engine.state.current_player != self.player {
            self.state = BotTurnState::Finished;
            return BotStep::Finished;
        }

        match self.state {
            BotTurnState::AwaitRoll => match engine.roll_dice() {
                Ok(snapshot) => {
                    self.state = if engine.state.phase == Phase::Move {
                        BotTurnState::AwaitMove
                    } else {
                        // Zero roll or no moves: the engine already passed
                        // the turn, which the next step will observe.
                        BotTurnState::AwaitRoll
                    };
                    BotStep::Rolled(snapshot)
                }
                Err(_) => {
                    self.state = BotTurnState::Finished;
                    BotStep::Finished
                }
            },
            BotTurnState::AwaitMove => {
                let pick = match engine.bot_move() {
                    Some(pick) => pick,
                    None => {
                        self.state = BotTurnState::Finished;
                        return BotStep::Finished;
                    }
                };
                match engine.move_piece(pick) {
                    Ok(snapshot) => {
                        self.state = BotTurnState::AwaitRoll;
                        BotStep::Moved(snapshot)
                    }
                    Err(_) => {
                        self.state = BotTurnState::Finished;
                        BotStep::Finished
                    }
                }
            }
            BotTurnState::Finished => BotStep::Finished,
        }
    }

    /// Runs the machine to completion with no inter-step delay, returning
    /// every snapshot in order. Useful for tests and the harness; a real
    /// transport schedules `step` calls itself.
    pub fn run_to_completion(&mut self, engine: &mut GameEngine) -> Vec<Snapshot> {
        let mut snapshots = Vec::new();
        loop {
            match self.step(engine) {
                BotStep::Rolled(snap) | BotStep::Moved(snap) => snapshots.push(snap),
                BotStep::Finished => return snapshots,
            }
        }
    }
}
