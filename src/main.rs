//! Twenty-squares -- an authoritative Royal Game of Ur engine.
//!
//! This binary reads commands from stdin and writes one JSON state
//! snapshot per state-changing command to stdout. It drives a single
//! local room; a network transport would hold a `RoomManager` the same
//! way and broadcast the same snapshots.

use std::io::{self, BufRead, Write};

use twenty_squares::protocol::{parse_command, Command, Snapshot};
use twenty_squares::session::{BotTurn, RoomKind, RoomManager};

const ROOM_ID: &str = "local";

/// Runs the harness loop, reading commands from stdin and writing
/// snapshots to stdout. Rejected intents go to stderr and produce no
/// snapshot, mirroring how a room would drop a stale client message.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut rooms = RoomManager::new();
    rooms.create_room(ROOM_ID, RoomKind::Solo);
    rooms.join(ROOM_ID);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let engine = match rooms.engine_mut(ROOM_ID) {
            Some(e) => e,
            None => break,
        };

        match cmd {
            Command::Roll => match engine.roll_dice() {
                Ok(snapshot) => emit(&mut out, &snapshot),
                Err(e) => eprintln!("roll rejected: {}", e),
            },
            Command::Move { piece_index } => match engine.move_piece(piece_index) {
                Ok(snapshot) => emit(&mut out, &snapshot),
                Err(e) => eprintln!("move rejected: {}", e),
            },
            Command::State => {
                let snapshot = engine.snapshot();
                emit(&mut out, &snapshot);
            }
            Command::BotMove => {
                match engine.bot_move() {
                    Some(pick) => writeln!(out, "botmove {}", pick).unwrap(),
                    None => writeln!(out, "botmove none").unwrap(),
                }
                out.flush().unwrap();
            }
            Command::BotTurn => {
                let mut turn = BotTurn::new(engine.state.current_player);
                for snapshot in turn.run_to_completion(engine) {
                    emit(&mut out, &snapshot);
                }
            }
            Command::Reset => {
                let snapshot = engine.reset();
                emit(&mut out, &snapshot);
            }
            Command::Quit => break,
        }
    }
}

/// Writes one snapshot as a single JSON line.
fn emit<W: Write>(out: &mut W, snapshot: &Snapshot) {
    let json = serde_json::to_string(snapshot).expect("snapshot always serializes");
    writeln!(out, "{}", json).unwrap();
    out.flush().unwrap();
}
