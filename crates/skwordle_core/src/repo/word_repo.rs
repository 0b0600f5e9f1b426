//! Word dictionary repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide read/seed APIs over the canonical `words` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Word::validate()` before SQL mutations.
//! - `text` uniqueness is enforced by the schema; duplicate inserts are
//!   reported, not errored.

use crate::db::DbError;
use crate::model::word::{Word, WordId, WordValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const WORD_SELECT_SQL: &str = "SELECT uuid, text FROM words";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for word-store persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(WordValidationError),
    Db(DbError),
    NotFound(WordId),
    InvalidData(String),
    NotReady(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "word not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::NotReady(message) => write!(f, "word store not ready: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) | Self::NotReady(_) => None,
        }
    }
}

impl From<WordValidationError> for RepoError {
    fn from(value: WordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the word dictionary.
pub trait WordRepository {
    /// Inserts one word unless its text already exists.
    ///
    /// Returns `true` when a row was inserted, `false` on a duplicate text.
    fn insert_word_if_absent(&self, word: &Word) -> RepoResult<bool>;
    /// Gets one word by stable ID.
    fn get_word(&self, id: WordId) -> RepoResult<Option<Word>>;
    /// Reads the full dictionary.
    fn list_words(&self) -> RepoResult<Vec<Word>>;
    /// Returns the number of dictionary entries.
    fn count_words(&self) -> RepoResult<u64>;
}

/// SQLite-backed word repository.
#[derive(Debug)]
pub struct SqliteWordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteWordRepository<'conn> {
    /// Builds a repository after verifying the `words` table is usable.
    ///
    /// # Errors
    /// - `NotReady` when the schema has not been migrated on this connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        probe_table(conn, "SELECT uuid, text, created_at FROM words LIMIT 0;")?;
        Ok(Self { conn })
    }
}

impl WordRepository for SqliteWordRepository<'_> {
    fn insert_word_if_absent(&self, word: &Word) -> RepoResult<bool> {
        word.validate()?;

        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO words (uuid, text) VALUES (?1, ?2);",
            params![word.uuid.to_string(), word.text.as_str()],
        )?;

        Ok(changed > 0)
    }

    fn get_word(&self, id: WordId) -> RepoResult<Option<Word>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{WORD_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_word_row(row)?));
        }

        Ok(None)
    }

    fn list_words(&self) -> RepoResult<Vec<Word>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{WORD_SELECT_SQL} ORDER BY text ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut words = Vec::new();

        while let Some(row) = rows.next()? {
            words.push(parse_word_row(row)?);
        }

        Ok(words)
    }

    fn count_words(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM words;", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

pub(crate) fn probe_table(conn: &Connection, probe_sql: &str) -> RepoResult<()> {
    conn.prepare(probe_sql)
        .map(|_| ())
        .map_err(|err| RepoError::NotReady(format!("schema probe failed: {err}")))
}

pub(crate) fn parse_uuid(value: &str, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}

fn parse_word_row(row: &Row<'_>) -> RepoResult<Word> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = parse_uuid(&uuid_text, "words.uuid")?;

    let word = Word {
        uuid,
        text: row.get("text")?,
    };
    word.validate()
        .map_err(|err| RepoError::InvalidData(format!("words.text `{}`: {err}", word.text)))?;
    Ok(word)
}
