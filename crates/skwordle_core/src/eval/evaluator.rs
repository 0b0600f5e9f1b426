//! Two-pass per-character guess classifier.
//!
//! # Responsibility
//! - Tag every guess position as correct, present or absent against the
//!   day's secret word.
//!
//! # Invariants
//! - Pass one (exact positions) runs to completion before pass two starts,
//!   so the remaining-letter multiset already excludes every exact match.
//! - Pass two scans strictly left to right; among duplicate guess letters
//!   the leftmost one claims a remaining secret letter first.
//! - Output length always equals the guess character count.

use crate::eval::normalize::normalize_comparable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-position verdict for one guessed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterMark {
    /// Right letter in the right position.
    Correct,
    /// Letter occurs elsewhere in the secret and is still unclaimed.
    Present,
    /// Letter does not occur, or all its occurrences are already claimed.
    Absent,
}

/// Classifies a guess against the secret word.
///
/// Both inputs are folded to the comparable form first, so diacritics and
/// case never affect the verdict. The caller is responsible for rejecting
/// guesses whose character count differs from the secret's; this function
/// simply never matches positions the secret does not have.
pub fn evaluate(guess: &str, secret: &str) -> Vec<LetterMark> {
    let guess_chars: Vec<char> = normalize_comparable(guess).chars().collect();
    let secret_chars: Vec<char> = normalize_comparable(secret).chars().collect();

    let mut marks = vec![LetterMark::Absent; guess_chars.len()];

    // Pass one: exact positions. Each hit consumes the secret character at
    // that same position, tracked by value in the remaining multiset.
    let mut remaining: HashMap<char, u32> = HashMap::new();
    for (i, &secret_ch) in secret_chars.iter().enumerate() {
        if guess_chars.get(i) == Some(&secret_ch) {
            marks[i] = LetterMark::Correct;
        } else {
            *remaining.entry(secret_ch).or_insert(0) += 1;
        }
    }

    // Pass two: presence by value over the leftover positions.
    for (i, &guess_ch) in guess_chars.iter().enumerate() {
        if marks[i] == LetterMark::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&guess_ch) {
            if *count > 0 {
                *count -= 1;
                marks[i] = LetterMark::Present;
            }
        }
    }

    marks
}
