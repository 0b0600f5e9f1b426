//! Boundary entry points and wire envelopes for the game API.
//!
//! # Responsibility
//! - Define the JSON shapes consumed and produced by an HTTP shim.
//! - Enforce the guess length precondition before evaluation runs.
//!
//! # Invariants
//! - The secret word text only ever leaves this layer when a guess solves
//!   the puzzle.
//! - Length mismatches are rejected with the exact
//!   `{ "error": "Invalid word length" }` envelope and no state mutation.

pub mod game;

pub use game::{init_board, submit_guess, ApiError, GuessRequest, GuessResponse, InitResponse};
