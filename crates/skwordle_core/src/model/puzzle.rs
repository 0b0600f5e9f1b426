//! Daily assignment domain model.
//!
//! # Responsibility
//! - Bind one calendar date to the word every player guesses that day.
//!
//! # Invariants
//! - `date` has no time component and is unique across all assignments.
//! - `word_id` is a non-owning reference; the word's lifecycle is independent.
//! - Assignments are never mutated or deleted once created.

use crate::model::word::WordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The durable record binding one calendar date to one chosen secret word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAssignment {
    /// Puzzle date, date part only.
    pub date: NaiveDate,
    /// The word selected for this date.
    pub word_id: WordId,
}

impl DailyAssignment {
    pub fn new(date: NaiveDate, word_id: WordId) -> Self {
        Self { date, word_id }
    }
}
