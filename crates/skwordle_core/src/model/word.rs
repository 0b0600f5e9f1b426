//! Word domain model.
//!
//! # Responsibility
//! - Define the dictionary entry shape shared by selector and evaluator.
//! - Enforce the letters-only, canonical-uppercase text contract.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another word.
//! - `text` is non-empty, contains only Unicode letters, and is uppercase.
//! - Words are immutable once created; the dictionary is append-only.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a dictionary word.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type WordId = Uuid;

/// One dictionary entry: a surname in canonical uppercase form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Stable global ID used by daily assignments to reference this word.
    pub uuid: WordId,
    /// Canonical uppercase surname, e.g. `"ČERNÝ"`.
    pub text: String,
}

/// Validation failures for word text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordValidationError {
    EmptyText,
    NonLetterCharacter(char),
    NotUppercase,
}

impl Display for WordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "word text must not be empty"),
            Self::NonLetterCharacter(ch) => {
                write!(f, "word text must contain only letters, found `{ch}`")
            }
            Self::NotUppercase => write!(f, "word text must be stored uppercase"),
        }
    }
}

impl Error for WordValidationError {}

impl Word {
    /// Creates a new word with a generated stable ID.
    ///
    /// The text is uppercased to the canonical storage form; the original
    /// casing of the input is not preserved.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates a word with a caller-provided stable ID.
    ///
    /// Used by storage read paths where identity already exists.
    pub fn with_id(uuid: WordId, text: impl AsRef<str>) -> Self {
        Self {
            uuid,
            text: text.as_ref().to_uppercase(),
        }
    }

    /// Checks the letters-only uppercase contract.
    ///
    /// # Errors
    /// - `EmptyText` when the text has no characters.
    /// - `NonLetterCharacter` on digits, whitespace or punctuation.
    /// - `NotUppercase` when any letter is stored in lowercase form.
    pub fn validate(&self) -> Result<(), WordValidationError> {
        if self.text.is_empty() {
            return Err(WordValidationError::EmptyText);
        }
        for ch in self.text.chars() {
            if !ch.is_alphabetic() {
                return Err(WordValidationError::NonLetterCharacter(ch));
            }
            if ch.is_lowercase() {
                return Err(WordValidationError::NotUppercase);
            }
        }
        Ok(())
    }

    /// Returns the length in Unicode characters, not bytes.
    ///
    /// This is the length exposed to players for grid drawing and the unit
    /// used by the guess length precondition.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
