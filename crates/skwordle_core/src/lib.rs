//! Core domain logic for Skwordle, the daily surname-guessing game.
//! This crate is the single source of truth for business invariants.

pub mod api;
pub mod db;
pub mod eval;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use api::game::{
    init_board, submit_guess, ApiError, ApiResult, ErrorBody, GuessRequest, GuessResponse,
    InitResponse,
};
pub use eval::evaluator::{evaluate, LetterMark};
pub use eval::normalize::normalize_comparable;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::puzzle::DailyAssignment;
pub use model::word::{Word, WordId, WordValidationError};
pub use repo::puzzle_repo::{PuzzleRepository, SqlitePuzzleRepository};
pub use repo::word_repo::{RepoError, RepoResult, SqliteWordRepository, WordRepository};
pub use seed::roster::{extract_surname, parse_roster_lines, seed_words, SeedReport};
pub use service::puzzle_service::{PuzzleService, PuzzleServiceError, PuzzleServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
