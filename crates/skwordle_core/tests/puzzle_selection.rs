use chrono::NaiveDate;
use rusqlite::Connection;
use skwordle_core::db::open_db_in_memory;
use skwordle_core::{
    PuzzleService, PuzzleServiceError, SqlitePuzzleRepository, SqliteWordRepository, Word,
    WordRepository,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn service(conn: &Connection) -> PuzzleService<SqliteWordRepository<'_>, SqlitePuzzleRepository<'_>> {
    PuzzleService::new(
        SqliteWordRepository::try_new(conn).unwrap(),
        SqlitePuzzleRepository::try_new(conn).unwrap(),
    )
}

fn seed(conn: &Connection, names: &[&str]) -> Vec<Word> {
    let repo = SqliteWordRepository::try_new(conn).unwrap();
    names
        .iter()
        .map(|name| {
            let word = Word::new(*name);
            repo.insert_word_if_absent(&word).unwrap();
            word
        })
        .collect()
}

#[test]
fn resolving_the_same_date_twice_returns_the_same_word() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, &["Novák", "Černý", "Svoboda", "Jeřábek"]);
    let service = service(&conn);

    let day = date(2026, 8, 29);
    let first = service.resolve_word_for(day).unwrap();
    let second = service.resolve_word_for(day).unwrap();

    assert_eq!(first, second);
}

#[test]
fn each_date_gets_at_most_one_stored_assignment() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, &["Novák", "Černý", "Svoboda"]);
    let service = service(&conn);

    let day = date(2026, 8, 29);
    for _ in 0..5 {
        service.resolve_word_for(day).unwrap();
    }
    service.resolve_word_for(date(2026, 8, 30)).unwrap();

    let per_day: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM daily_puzzles WHERE puzzle_date = '2026-08-29';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(per_day, 1);

    let total: i64 = conn
        .query_row("SELECT COUNT(*) FROM daily_puzzles;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(total, 2);
}

#[test]
fn selection_always_comes_from_the_dictionary() {
    let conn = open_db_in_memory().unwrap();
    let seeded = seed(&conn, &["Novák", "Černý"]);
    let service = service(&conn);

    let word = service.resolve_word_for(date(2026, 8, 29)).unwrap();
    assert!(seeded.iter().any(|candidate| candidate.uuid == word.uuid));
}

#[test]
fn empty_dictionary_fails_with_dictionary_empty() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service.resolve_word_for(date(2026, 8, 29)).unwrap_err();
    assert!(matches!(err, PuzzleServiceError::DictionaryEmpty));
}

#[test]
fn existing_assignment_wins_even_after_dictionary_grows() {
    let conn = open_db_in_memory().unwrap();
    let seeded = seed(&conn, &["Novák"]);
    let service = service(&conn);

    let day = date(2026, 8, 29);
    let assigned = service.resolve_word_for(day).unwrap();
    assert_eq!(assigned.uuid, seeded[0].uuid);

    seed(&conn, &["Černý", "Svoboda", "Jeřábek"]);
    let resolved = service.resolve_word_for(day).unwrap();
    assert_eq!(resolved, assigned);
}

#[test]
fn pre_existing_stored_assignment_is_respected() {
    let conn = open_db_in_memory().unwrap();
    let seeded = seed(&conn, &["Novák", "Černý", "Svoboda"]);

    conn.execute(
        "INSERT INTO daily_puzzles (puzzle_date, word_uuid) VALUES ('2026-08-29', ?1);",
        [seeded[2].uuid.to_string()],
    )
    .unwrap();

    let service = service(&conn);
    let resolved = service.resolve_word_for(date(2026, 8, 29)).unwrap();
    assert_eq!(resolved.uuid, seeded[2].uuid);
    assert_eq!(resolved.text, "SVOBODA");
}

#[test]
fn assignment_referencing_missing_word_is_reported_as_corruption() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, &["Novák"]);

    conn.execute_batch(
        "PRAGMA foreign_keys = OFF;
         INSERT INTO daily_puzzles (puzzle_date, word_uuid)
         VALUES ('2026-08-29', '00000000-0000-0000-0000-000000000000');",
    )
    .unwrap();

    let service = service(&conn);
    let err = service.resolve_word_for(date(2026, 8, 29)).unwrap_err();
    assert!(matches!(err, PuzzleServiceError::WordMissing(_)));
}
