//! Daily puzzle selection use-case.
//!
//! # Responsibility
//! - Resolve the secret word for a calendar date, creating the assignment
//!   lazily on the first request of that date.
//!
//! # Invariants
//! - Resolution is idempotent per date: every caller converges on the word
//!   of the first durably stored assignment.
//! - Selection is uniform over the full dictionary; previously used words
//!   are not excluded, so repeats across different days are possible.
//! - "Today" is an explicit parameter; this layer never reads the clock.

use crate::model::word::{Word, WordId};
use crate::repo::puzzle_repo::PuzzleRepository;
use crate::repo::word_repo::{RepoError, WordRepository};
use chrono::NaiveDate;
use log::{error, info};
use rand::seq::IndexedRandom;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PuzzleServiceResult<T> = Result<T, PuzzleServiceError>;

/// Failures of the puzzle selection use-case.
#[derive(Debug)]
pub enum PuzzleServiceError {
    /// The dictionary has no words; the service cannot produce a puzzle
    /// until the store is reseeded.
    DictionaryEmpty,
    /// A stored assignment references a word that no longer resolves.
    WordMissing(WordId),
    Repo(RepoError),
}

impl Display for PuzzleServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DictionaryEmpty => {
                write!(f, "no words available in the dictionary to generate a puzzle")
            }
            Self::WordMissing(id) => {
                write!(f, "daily assignment references missing word {id}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PuzzleServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::DictionaryEmpty | Self::WordMissing(_) => None,
        }
    }
}

impl From<RepoError> for PuzzleServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service resolving the secret word of a given date.
pub struct PuzzleService<W: WordRepository, P: PuzzleRepository> {
    words: W,
    puzzles: P,
}

impl<W: WordRepository, P: PuzzleRepository> PuzzleService<W, P> {
    /// Creates a service using the provided repository implementations.
    pub fn new(words: W, puzzles: P) -> Self {
        Self { words, puzzles }
    }

    /// Returns the secret word assigned to `today`, assigning one first if
    /// this is the first request for that date.
    ///
    /// # Contract
    /// - Existing assignment: read-only, returns its word.
    /// - No assignment: picks uniformly at random from the full dictionary
    ///   and persists the binding; a losing racer adopts the winner's word.
    ///
    /// # Errors
    /// - `DictionaryEmpty` when no words exist to choose from.
    /// - `WordMissing` when a stored assignment cannot be dereferenced.
    pub fn resolve_word_for(&self, today: NaiveDate) -> PuzzleServiceResult<Word> {
        if let Some(assignment) = self.puzzles.find_by_date(today)? {
            let word = self.dereference(assignment.word_id)?;
            info!(
                "event=puzzle_resolve module=service status=ok date={today} path=existing word_len={}",
                word.char_count()
            );
            return Ok(word);
        }

        let dictionary = self.words.list_words()?;
        let mut rng = rand::rng();
        let Some(chosen) = dictionary.choose(&mut rng) else {
            error!("event=puzzle_resolve module=service status=error date={today} error_code=dictionary_empty");
            return Err(PuzzleServiceError::DictionaryEmpty);
        };

        let durable = self.puzzles.create_assignment(today, chosen.uuid)?;
        let word = if durable.word_id == chosen.uuid {
            chosen.clone()
        } else {
            // Lost the first-request race; adopt the stored winner.
            self.dereference(durable.word_id)?
        };

        info!(
            "event=puzzle_resolve module=service status=ok date={today} path=assigned word_len={}",
            word.char_count()
        );
        Ok(word)
    }

    fn dereference(&self, word_id: WordId) -> PuzzleServiceResult<Word> {
        self.words
            .get_word(word_id)?
            .ok_or(PuzzleServiceError::WordMissing(word_id))
    }
}
