//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the word-store contracts consumed by game services.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Word::validate()` before persistence.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Date-uniqueness conflicts on assignments are resolved by converging on
//!   the durably stored row, never surfaced as errors.

pub mod puzzle_repo;
pub mod word_repo;
