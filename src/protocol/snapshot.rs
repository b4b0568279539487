//! The broadcast state snapshot.
//!
//! Every accepted intent produces one of these; the room layer serializes
//! it to JSON and sends it verbatim to every participant. Field names are
//! the wire contract and must not change: clients key on `currentPlayer`,
//! `diceResult`, `phase`, `winner`, `player1`/`player2`, `board`,
//! `validMoves`, `moveDiagnostics`, and `lastAction`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::{cell_at, GameState, Phase, Player, PATH_LEN, PIECES_PER_PLAYER};

/// One player's public state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// `-1` waiting, `0..13` on board, `-2` borne off.
    pub pieces: [i8; PIECES_PER_PLAYER],
    pub completed: u8,
}

/// An occupied cell in the broadcast board map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPiece {
    /// Owning seat, 1 or 2.
    pub player: u8,
    pub piece_index: usize,
}

/// Full match state in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub current_player: u8,
    pub dice_result: u8,
    pub phase: Phase,
    pub winner: Option<u8>,
    pub player1: PlayerSnapshot,
    pub player2: PlayerSnapshot,
    /// Cell id to occupant, only occupied cells present.
    pub board: BTreeMap<String, BoardPiece>,
    pub valid_moves: Vec<usize>,
    /// Piece index to the reason it cannot move.
    pub move_diagnostics: BTreeMap<usize, String>,
    pub last_action: String,
}

impl Snapshot {
    /// Projects the engine state into wire form.
    pub fn of(state: &GameState) -> Snapshot {
        let mut board = BTreeMap::new();
        for player in [Player::One, Player::Two] {
            for pos in 0..PATH_LEN {
                let cell = cell_at(player, pos);
                if let Some(occ) = state.occupant(cell) {
                    board.insert(
                        cell.id().to_string(),
                        BoardPiece {
                            player: occ.player.number(),
                            piece_index: occ.piece_index,
                        },
                    );
                }
            }
        }

        let move_diagnostics = state
            .move_diagnostics
            .iter()
            .enumerate()
            .filter_map(|(idx, reason)| reason.map(|r| (idx, r.to_string())))
            .collect();

        Snapshot {
            current_player: state.current_player.number(),
            dice_result: state.dice_result,
            phase: state.phase,
            winner: state.winner.map(Player::number),
            player1: PlayerSnapshot {
                pieces: state.player(Player::One).pieces,
                completed: state.player(Player::One).completed,
            },
            player2: PlayerSnapshot {
                pieces: state.player(Player::Two).pieces,
                completed: state.player(Player::Two).completed,
            },
            board,
            valid_moves: state.valid_moves.clone(),
            move_diagnostics,
            last_action: state.last_action.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::OFF_BOARD;
    use crate::movegen::BlockReason;
    use serde_json::Value;

    #[test]
    fn wire_field_names_are_stable() {
        let snap = Snapshot::of(&GameState::new());
        let json: Value = serde_json::to_value(&snap).unwrap();
        let object = json.as_object().unwrap();

        for field in [
            "currentPlayer",
            "diceResult",
            "phase",
            "winner",
            "player1",
            "player2",
            "board",
            "validMoves",
            "moveDiagnostics",
            "lastAction",
        ] {
            assert!(object.contains_key(field), "missing wire field {}", field);
        }
        assert_eq!(object.len(), 10, "unexpected extra wire fields");
        assert_eq!(json["phase"], "roll");
        assert_eq!(json["winner"], Value::Null);
        assert_eq!(json["player1"]["pieces"].as_array().unwrap().len(), 7);
        assert_eq!(json["player1"]["completed"], 0);
    }

    #[test]
    fn board_map_uses_cell_ids_and_camel_case_occupants() {
        let mut state = GameState::new();
        state.player_mut(Player::One).pieces[2] = 0;
        state.rebuild_occupancy();

        let json = serde_json::to_value(Snapshot::of(&state)).unwrap();
        assert_eq!(json["board"]["p1-1"]["player"], 1);
        assert_eq!(json["board"]["p1-1"]["pieceIndex"], 2);
        assert_eq!(json["board"].as_object().unwrap().len(), 1);
    }

    #[test]
    fn diagnostics_are_keyed_by_piece_index() {
        let mut state = GameState::new();
        state.move_diagnostics[3] = Some(BlockReason::Overshoot);

        let json = serde_json::to_value(Snapshot::of(&state)).unwrap();
        assert_eq!(
            json["moveDiagnostics"]["3"],
            BlockReason::Overshoot.to_string()
        );
    }

    #[test]
    fn empty_diagnostics_serialize_as_an_empty_object() {
        let json = serde_json::to_value(Snapshot::of(&GameState::new())).unwrap();
        assert!(json["moveDiagnostics"].as_object().unwrap().is_empty());
        assert!(json["board"].as_object().unwrap().is_empty());
        assert!(json["validMoves"].as_array().unwrap().is_empty());
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut state = GameState::new();
        state.player_mut(Player::One).pieces[0] = 5;
        state.player_mut(Player::Two).pieces[1] = 3;
        state.dice_result = 2;
        state.phase = Phase::Move;
        state.valid_moves = vec![0, 1];
        state.rebuild_occupancy();

        let snap = Snapshot::of(&state);
        let text = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn fresh_snapshot_matches_the_opening_position() {
        let snap = Snapshot::of(&GameState::new());
        assert_eq!(snap.current_player, 1);
        assert_eq!(snap.player1.pieces, [OFF_BOARD; PIECES_PER_PLAYER]);
        assert_eq!(snap.player2.pieces, [OFF_BOARD; PIECES_PER_PLAYER]);
        assert!(snap.board.is_empty());
    }
}
