//! Game board initialization and guess submission entry points.
//!
//! # Responsibility
//! - Resolve the day's puzzle and expose only its length to new boards.
//! - Validate, evaluate and answer player guesses.
//!
//! # Invariants
//! - `wordLength` counts Unicode characters, matching the length unit used
//!   by the guess precondition.
//! - `correctWord` is populated exactly when `solved` is true.

use crate::eval::evaluator::{evaluate, LetterMark};
use crate::repo::puzzle_repo::PuzzleRepository;
use crate::repo::word_repo::WordRepository;
use crate::service::puzzle_service::{PuzzleService, PuzzleServiceError};
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ApiResult<T> = Result<T, ApiError>;

/// Boundary failures, mapped to HTTP-equivalent status codes.
#[derive(Debug)]
pub enum ApiError {
    /// Guess character count differs from the secret's. User error.
    InvalidLength,
    Service(PuzzleServiceError),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "Invalid word length"),
            Self::Service(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            Self::InvalidLength => None,
        }
    }
}

impl From<PuzzleServiceError> for ApiError {
    fn from(value: PuzzleServiceError) -> Self {
        Self::Service(value)
    }
}

impl ApiError {
    /// HTTP-equivalent status code for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidLength => 400,
            Self::Service(PuzzleServiceError::DictionaryEmpty) => 503,
            Self::Service(_) => 500,
        }
    }

    /// Serializable `{ "error": ... }` body for this failure.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

/// Wire shape of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Response for board initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitResponse {
    /// Puzzle date as `YYYY-MM-DD`.
    pub date: String,
    /// Unicode character count of the secret word. Never the word itself.
    pub word_length: usize,
}

/// Request body of a guess submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRequest {
    pub guess: String,
}

/// Response for an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    /// One mark per guess character, aligned positionally.
    pub evaluation: Vec<LetterMark>,
    pub solved: bool,
    /// The stored secret text, only revealed on a solve.
    pub correct_word: Option<String>,
}

/// Resolves the puzzle of `today` and returns the board envelope.
///
/// Creates the day's assignment if this is the first request of the date.
pub fn init_board<W, P>(service: &PuzzleService<W, P>, today: NaiveDate) -> ApiResult<InitResponse>
where
    W: WordRepository,
    P: PuzzleRepository,
{
    let word = service.resolve_word_for(today)?;
    Ok(InitResponse {
        date: today.format("%Y-%m-%d").to_string(),
        word_length: word.char_count(),
    })
}

/// Validates and evaluates one guess against the puzzle of `today`.
///
/// # Errors
/// - `InvalidLength` when the guess character count differs from the
///   secret's; nothing is evaluated or mutated in that case.
pub fn submit_guess<W, P>(
    service: &PuzzleService<W, P>,
    today: NaiveDate,
    request: &GuessRequest,
) -> ApiResult<GuessResponse>
where
    W: WordRepository,
    P: PuzzleRepository,
{
    let secret = service.resolve_word_for(today)?;

    let guess_len = request.guess.chars().count();
    if guess_len != secret.char_count() {
        info!(
            "event=guess_reject module=api status=error date={today} error_code=invalid_length guess_len={guess_len} expected_len={}",
            secret.char_count()
        );
        return Err(ApiError::InvalidLength);
    }

    let evaluation = evaluate(&request.guess, &secret.text);
    let solved = evaluation.iter().all(|mark| *mark == LetterMark::Correct);

    info!(
        "event=guess_evaluate module=api status=ok date={today} guess_len={guess_len} solved={solved}"
    );

    Ok(GuessResponse {
        evaluation,
        solved,
        correct_word: solved.then(|| secret.text.clone()),
    })
}
