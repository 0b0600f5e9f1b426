//! Guess evaluation: normalization and the two-pass letter classifier.
//!
//! # Responsibility
//! - Fold guesses and secrets to a diacritic-free uppercase comparable form.
//! - Produce per-position Wordle-style verdicts with correct duplicate
//!   handling.
//!
//! # Invariants
//! - Evaluation is pure: no I/O, deterministic for given inputs.
//! - The exact-match pass completes over all positions before the presence
//!   pass consumes anything from the remaining-letter multiset.

pub mod evaluator;
pub mod normalize;

pub use evaluator::{evaluate, LetterMark};
pub use normalize::normalize_comparable;
