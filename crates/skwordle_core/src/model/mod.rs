//! Domain model for the daily surname-guessing game.
//!
//! # Responsibility
//! - Define the canonical data structures used by core game logic.
//!
//! # Invariants
//! - Every word is identified by a stable `WordId` and a unique uppercase text.
//! - A daily assignment binds one calendar date to one word and never changes.

pub mod puzzle;
pub mod word;
