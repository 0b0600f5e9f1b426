//! Operator CLI for the Skwordle word store and daily puzzle.
//!
//! # Responsibility
//! - Seed the dictionary from a roster file.
//! - Resolve and play a day's puzzle from the terminal.
//!
//! # Invariants
//! - "Today" comes from the local clock only when `--date` is absent; core
//!   code never reads the clock.
//! - `init` and `guess` never print the secret word; `reveal` is the only
//!   subcommand that does.

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rusqlite::Connection;
use skwordle_core::db::open_db;
use skwordle_core::{
    init_board, init_logging, parse_roster_lines, seed_words, submit_guess, GuessRequest,
    LetterMark, PuzzleService, SqlitePuzzleRepository, SqliteWordRepository,
};
use std::path::PathBuf;

const ENV_DB: &str = "SKWORDLE_DB";
const ENV_LOG_DIR: &str = "SKWORDLE_LOG_DIR";
const ENV_LOG_LEVEL: &str = "SKWORDLE_LOG_LEVEL";

#[derive(Parser)]
#[command(name = "skwordle", about = "Daily surname-guessing game over a word store")]
struct Cli {
    /// Path to the SQLite word store. Falls back to SKWORDLE_DB.
    #[arg(long)]
    db: Option<PathBuf>,
    /// Absolute log directory. Falls back to SKWORDLE_LOG_DIR; logging is
    /// disabled when neither is set.
    #[arg(long)]
    log_dir: Option<String>,
    /// Log level. Falls back to SKWORDLE_LOG_LEVEL, then the build default.
    #[arg(long)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import surnames from a roster file (one raw name per line, `#` for
    /// comments).
    Seed {
        #[arg(long)]
        roster: PathBuf,
    },
    /// Print the board envelope for a date: puzzle date and word length.
    Init {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Submit a guess and render the verdict row.
    Guess {
        word: String,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Operator-only: print the stored secret word for a date.
    Reveal {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    // Missing .env files are fine; only load errors in an existing file matter.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging(&cli)?;

    let db_path = cli
        .db
        .clone()
        .or_else(|| std::env::var(ENV_DB).ok().map(PathBuf::from))
        .ok_or_else(|| anyhow!("no word store configured; pass --db or set {ENV_DB}"))?;
    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open word store at {}", db_path.display()))?;

    match &cli.command {
        Command::Seed { roster } => run_seed(&conn, roster),
        Command::Init { date } => run_init(&conn, resolve_date(*date)),
        Command::Guess { word, date } => run_guess(&conn, resolve_date(*date), word),
        Command::Reveal { date } => run_reveal(&conn, resolve_date(*date)),
    }
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let log_dir = cli
        .log_dir
        .clone()
        .or_else(|| std::env::var(ENV_LOG_DIR).ok());
    let Some(log_dir) = log_dir else {
        return Ok(());
    };

    let level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var(ENV_LOG_LEVEL).ok())
        .unwrap_or_else(|| skwordle_core::default_log_level().to_string());

    init_logging(&level, &log_dir).map_err(|message| anyhow!(message))
}

fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn build_service(
    conn: &Connection,
) -> Result<PuzzleService<SqliteWordRepository<'_>, SqlitePuzzleRepository<'_>>> {
    let words = SqliteWordRepository::try_new(conn)?;
    let puzzles = SqlitePuzzleRepository::try_new(conn)?;
    Ok(PuzzleService::new(words, puzzles))
}

fn run_seed(conn: &Connection, roster: &PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(roster)
        .with_context(|| format!("failed to read roster file {}", roster.display()))?;
    let entries = parse_roster_lines(&text);

    let repo = SqliteWordRepository::try_new(conn)?;
    let report = seed_words(&repo, &entries)?;

    println!(
        "imported {} words ({} duplicates, {} rejected) from {} entries",
        report.imported,
        report.duplicates,
        report.rejected,
        entries.len()
    );
    Ok(())
}

fn run_init(conn: &Connection, today: NaiveDate) -> Result<()> {
    let service = build_service(conn)?;
    let board = init_board(&service, today)?;
    println!("date: {}", board.date);
    println!("word length: {}", board.word_length);
    Ok(())
}

fn run_guess(conn: &Connection, today: NaiveDate, word: &str) -> Result<()> {
    let service = build_service(conn)?;
    let request = GuessRequest {
        guess: word.to_string(),
    };
    let response = submit_guess(&service, today, &request)?;

    println!("{}", render_marks(&response.evaluation));
    if response.solved {
        match response.correct_word {
            Some(correct) => println!("solved! the word was {correct}"),
            None => println!("solved!"),
        }
    } else {
        println!("not solved, keep guessing");
    }
    Ok(())
}

fn run_reveal(conn: &Connection, today: NaiveDate) -> Result<()> {
    let service = build_service(conn)?;
    let word = service.resolve_word_for(today)?;
    println!("secret word for {today}: {}", word.text);
    Ok(())
}

fn render_marks(marks: &[LetterMark]) -> String {
    marks
        .iter()
        .map(|mark| match mark {
            LetterMark::Correct => '🟩',
            LetterMark::Present => '🟨',
            LetterMark::Absent => '⬛',
        })
        .collect()
}
