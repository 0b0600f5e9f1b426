//! Roster parsing and word-store seeding.
//!
//! # Responsibility
//! - Strip academic titles and punctuation from raw name strings to isolate
//!   the surname.
//! - Insert the resulting words with duplicate-ignore semantics.
//!
//! # Invariants
//! - With first name and surname both present, the surname is the second
//!   remaining token; a lone remaining token is taken as the surname.
//! - Extracted surnames contain only letters.

use crate::model::word::Word;
use crate::repo::word_repo::{RepoResult, WordRepository};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

// Czech academic titles seen before or after the name, with optional
// trailing dot and comma, plus the "et" joiner in double titles.
static TITLE_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:bc|ing|mgr|rndr|doc|ph\.?d|csc|dis|phdr|mudr|et)\.?,?$")
        .expect("title token pattern is valid")
});

/// Outcome counters of one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// New words inserted into the store.
    pub imported: usize,
    /// Surnames that already existed in the store.
    pub duplicates: usize,
    /// Entries with no extractable valid surname.
    pub rejected: usize,
}

/// Splits raw roster text into entries, dropping blanks and `#` comments.
pub fn parse_roster_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Isolates the surname from a raw roster entry.
///
/// Title tokens are dropped, punctuation is stripped from the remaining
/// tokens, and the surname is the second remaining token when at least two
/// remain (given-name surname order), otherwise the only one.
///
/// Returns `None` when nothing usable remains.
pub fn extract_surname(raw: &str) -> Option<String> {
    let name_tokens: Vec<String> = raw
        .split_whitespace()
        .filter(|token| !TITLE_TOKEN_RE.is_match(token))
        .map(|token| token.chars().filter(|ch| ch.is_alphabetic()).collect())
        .filter(|token: &String| !token.is_empty())
        .collect();

    match name_tokens.len() {
        0 => None,
        1 => Some(name_tokens[0].clone()),
        _ => Some(name_tokens[1].clone()),
    }
}

/// Imports surnames extracted from raw roster entries into the word store.
///
/// Each usable surname is uppercased, validated and inserted with
/// duplicate-ignore semantics. Entries without a valid surname are counted
/// as rejected and skipped.
pub fn seed_words<R, I, S>(repo: &R, raw_names: I) -> RepoResult<SeedReport>
where
    R: WordRepository,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = SeedReport::default();

    for raw in raw_names {
        let Some(surname) = extract_surname(raw.as_ref()) else {
            report.rejected += 1;
            continue;
        };

        let word = Word::new(surname);
        if word.validate().is_err() {
            report.rejected += 1;
            continue;
        }

        if repo.insert_word_if_absent(&word)? {
            report.imported += 1;
        } else {
            report.duplicates += 1;
        }
    }

    info!(
        "event=seed_words module=seed status=ok imported={} duplicates={} rejected={}",
        report.imported, report.duplicates, report.rejected
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{extract_surname, parse_roster_lines};

    #[test]
    fn strips_leading_titles() {
        assert_eq!(extract_surname("Ing. Anna Bodnárová").as_deref(), Some("Bodnárová"));
        assert_eq!(extract_surname("RNDr. Mgr. Petr Couf").as_deref(), Some("Couf"));
    }

    #[test]
    fn strips_trailing_titles_and_punctuation() {
        assert_eq!(
            extract_surname("Ing. Richard Černý, CSc.").as_deref(),
            Some("Černý")
        );
        assert_eq!(extract_surname("Pavel Dočkal, DiS.").as_deref(), Some("Dočkal"));
        assert_eq!(
            extract_surname("Ing. Jan Novotný, Ph.D.").as_deref(),
            Some("Novotný")
        );
    }

    #[test]
    fn handles_et_joined_double_titles() {
        assert_eq!(
            extract_surname("Mgr. et Mgr. Martin Janečka, Ph.D.").as_deref(),
            Some("Janečka")
        );
    }

    #[test]
    fn untitled_names_take_the_second_token() {
        assert_eq!(extract_surname("Adam Horyna").as_deref(), Some("Horyna"));
    }

    #[test]
    fn single_token_is_taken_as_surname() {
        assert_eq!(extract_surname("Mgr. Hehl").as_deref(), Some("Hehl"));
    }

    #[test]
    fn empty_and_title_only_entries_are_rejected() {
        assert_eq!(extract_surname(""), None);
        assert_eq!(extract_surname("Ing. CSc."), None);
    }

    #[test]
    fn roster_lines_skip_blanks_and_comments() {
        let lines = parse_roster_lines("# staff\n\nIng. Jana Exnerová\n  \nTomáš Klíma\n");
        assert_eq!(lines, vec!["Ing. Jana Exnerová", "Tomáš Klíma"]);
    }
}
