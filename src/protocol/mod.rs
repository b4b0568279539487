//! Wire contract and harness protocol.
//!
//! This module owns the broadcast state snapshot (the JSON record every
//! room participant receives after each accepted intent) and the command
//! parser for the binary harness's stdin loop.

pub mod parser;
pub mod snapshot;

pub use parser::{parse_command, Command};
pub use snapshot::{BoardPiece, PlayerSnapshot, Snapshot};
