//! Dictionary seeding from raw staff rosters.
//!
//! # Responsibility
//! - Turn raw roster entries ("Ing. Richard Černý, CSc.") into valid
//!   uppercase surname words and import them into the word store.
//!
//! # Invariants
//! - Seeding never overwrites or deletes existing words; duplicate surnames
//!   are counted, not errored.
//! - Imported words always satisfy `Word::validate()`.

pub mod roster;

pub use roster::{extract_surname, parse_roster_lines, seed_words, SeedReport};
