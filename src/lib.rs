//! Twenty-squares engine library.
//!
//! Exposes the board representation, move generation, resolution, engine
//! facade, wire protocol, and room-session modules for use by integration
//! tests and the binary entry point.

pub mod board;
pub mod dice;
pub mod engine;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod session;
