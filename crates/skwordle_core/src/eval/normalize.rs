//! Comparable-form folding for guess/secret text.
//!
//! # Responsibility
//! - Strip diacritics and fold case so `"Černý"` compares equal to `"CERNY"`.
//!
//! # Invariants
//! - Stored words are never mutated; folding happens on owned copies.
//! - Folding an already accent-free uppercase string is a no-op.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds text to the diacritic-free uppercase form used for comparison.
///
/// Accented letters decompose to their base letter plus combining marks
/// (NFD); the marks are dropped and the remainder uppercased, so `"Á"`
/// becomes `"A"` and `"č"` becomes `"C"`. Applied independently to both
/// sides of every comparison.
pub fn normalize_comparable(input: &str) -> String {
    input
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_uppercase)
        .collect()
}
