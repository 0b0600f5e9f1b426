use skwordle_core::db::open_db_in_memory;
use skwordle_core::{parse_roster_lines, seed_words, SqliteWordRepository, WordRepository};

const SAMPLE_ROSTER: &str = "\
# staff roster export
Bc. Daniel Adámek
Ing. Anna Bodnárová
Ing. Richard Černý, CSc.
Pavel Dočkal, DiS.
Mgr. et Mgr. Martin Janečka, Ph.D.
Doc. Ing. Vítězslav Jeřábek, CSc.
Adam Horyna

Ing. Jan Novotný, Ph.D.
";

#[test]
fn seeding_imports_cleaned_uppercase_surnames() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteWordRepository::try_new(&conn).unwrap();

    let entries = parse_roster_lines(SAMPLE_ROSTER);
    assert_eq!(entries.len(), 8);

    let report = seed_words(&repo, &entries).unwrap();
    assert_eq!(report.imported, 8);
    assert_eq!(report.duplicates, 0);
    assert_eq!(report.rejected, 0);

    let words = repo.list_words().unwrap();
    let texts: Vec<&str> = words.iter().map(|word| word.text.as_str()).collect();
    assert!(texts.contains(&"ADÁMEK"));
    assert!(texts.contains(&"ČERNÝ"));
    assert!(texts.contains(&"DOČKAL"));
    assert!(texts.contains(&"JANEČKA"));
    assert!(texts.contains(&"JEŘÁBEK"));
    assert!(texts.contains(&"HORYNA"));
    assert!(texts.contains(&"NOVOTNÝ"));

    assert!(words.iter().all(|word| word.validate().is_ok()));
}

#[test]
fn reseeding_counts_duplicates_instead_of_failing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteWordRepository::try_new(&conn).unwrap();

    let entries = parse_roster_lines(SAMPLE_ROSTER);
    seed_words(&repo, &entries).unwrap();
    let report = seed_words(&repo, &entries).unwrap();

    assert_eq!(report.imported, 0);
    assert_eq!(report.duplicates, 8);
    assert_eq!(repo.count_words().unwrap(), 8);
}

#[test]
fn unusable_entries_are_counted_as_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteWordRepository::try_new(&conn).unwrap();

    let report = seed_words(&repo, ["Ing. CSc.", "Kateřina Haasová"]).unwrap();
    assert_eq!(report.imported, 1);
    assert_eq!(report.rejected, 1);
}

#[test]
fn shared_surnames_collapse_to_one_word() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteWordRepository::try_new(&conn).unwrap();

    let report = seed_words(
        &repo,
        ["Ing. Dušan Kuchařík", "Mgr. Jan Kuchařík", "Bc. Martin Váňa"],
    )
    .unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.duplicates, 1);
}
