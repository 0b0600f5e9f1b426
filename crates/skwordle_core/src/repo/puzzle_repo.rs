//! Daily puzzle repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist the append-only date-to-word assignment log.
//! - Own the race resolution for concurrent first-requests of a date.
//!
//! # Invariants
//! - At most one assignment row exists per `puzzle_date`.
//! - `create_assignment` converges on the durably stored row when the
//!   date-uniqueness constraint rejects a concurrent insert.
//! - Assignment rows are never updated or deleted.

use crate::model::puzzle::DailyAssignment;
use crate::model::word::WordId;
use crate::repo::word_repo::{parse_uuid, probe_table, RepoError, RepoResult};
use chrono::NaiveDate;
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

const PUZZLE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Repository interface for daily assignments.
pub trait PuzzleRepository {
    /// Looks up the assignment for a date, date part only.
    fn find_by_date(&self, date: NaiveDate) -> RepoResult<Option<DailyAssignment>>;
    /// Records an assignment for a date and returns the durable one.
    ///
    /// When a concurrent caller already inserted a row for the same date,
    /// the returned assignment is that existing row, not the rejected input.
    fn create_assignment(&self, date: NaiveDate, word_id: WordId) -> RepoResult<DailyAssignment>;
}

/// SQLite-backed daily puzzle repository.
#[derive(Debug)]
pub struct SqlitePuzzleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePuzzleRepository<'conn> {
    /// Builds a repository after verifying the `daily_puzzles` table is usable.
    ///
    /// # Errors
    /// - `NotReady` when the schema has not been migrated on this connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        probe_table(
            conn,
            "SELECT puzzle_date, word_uuid, created_at FROM daily_puzzles LIMIT 0;",
        )?;
        Ok(Self { conn })
    }
}

impl PuzzleRepository for SqlitePuzzleRepository<'_> {
    fn find_by_date(&self, date: NaiveDate) -> RepoResult<Option<DailyAssignment>> {
        let row = self
            .conn
            .query_row(
                "SELECT puzzle_date, word_uuid FROM daily_puzzles WHERE puzzle_date = ?1;",
                [format_puzzle_date(date)],
                parse_assignment_row,
            )
            .optional()?;

        match row {
            Some(parsed) => Ok(Some(parsed?)),
            None => Ok(None),
        }
    }

    fn create_assignment(&self, date: NaiveDate, word_id: WordId) -> RepoResult<DailyAssignment> {
        let date_text = format_puzzle_date(date);

        // INSERT OR IGNORE makes the date PK decide the race winner; a
        // rejected insert is a normal control path, not an error.
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO daily_puzzles (puzzle_date, word_uuid) VALUES (?1, ?2);",
            params![date_text.as_str(), word_id.to_string()],
        )?;

        if inserted > 0 {
            info!(
                "event=assignment_create module=repo status=ok date={date_text} word_id={word_id}"
            );
            return Ok(DailyAssignment::new(date, word_id));
        }

        info!("event=assignment_create module=repo status=converged date={date_text}");
        self.find_by_date(date)?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "assignment for {date_text} rejected as duplicate but not readable"
            ))
        })
    }
}

fn format_puzzle_date(date: NaiveDate) -> String {
    date.format(PUZZLE_DATE_FORMAT).to_string()
}

fn parse_assignment_row(row: &Row<'_>) -> rusqlite::Result<RepoResult<DailyAssignment>> {
    let date_text: String = row.get("puzzle_date")?;
    let word_uuid_text: String = row.get("word_uuid")?;
    Ok(build_assignment(&date_text, &word_uuid_text))
}

fn build_assignment(date_text: &str, word_uuid_text: &str) -> RepoResult<DailyAssignment> {
    let date = NaiveDate::parse_from_str(date_text, PUZZLE_DATE_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid date value `{date_text}` in daily_puzzles.puzzle_date"
        ))
    })?;
    let word_id = parse_uuid(word_uuid_text, "daily_puzzles.word_uuid")?;
    Ok(DailyAssignment::new(date, word_id))
}
