//! # Entry Cleaning & Verification
//!
//! Raw dictionary entries come from external word lists and may carry
//! semicolon-separated alternative spellings or stray punctuation. Cleaning
//! canonicalizes them to the allowed alphabet; verification reports entries
//! that would need cleaning, so bad data is caught before it ships.
//!
//! ## Canonical alphabet
//!
//! Uppercase Latin letters, spaces, periods, commas. Nothing else.
//! Semicolons never survive: only the first alternative does.

use crate::class::WordClass;

/// Returns true if `c` is allowed in a cleaned dictionary word.
#[inline]
#[must_use]
pub const fn is_allowed_char(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, ' ' | '.' | ',')
}

/// Returns true if `word` is already in canonical form.
#[must_use]
pub fn is_canonical(word: &str) -> bool {
    word.chars().all(is_allowed_char)
}

/// Cleans one raw entry to the canonical alphabet.
///
/// Keeps only the first semicolon-separated alternative, trims it, then
/// strips every character outside the allowed alphabet.
#[must_use]
pub fn clean_word(raw: &str) -> String {
    let first = raw.split(';').next().unwrap_or("").trim();
    first.chars().filter(|c| is_allowed_char(*c)).collect()
}

/// What is wrong with a raw entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueKind {
    /// The entry still contains a semicolon-separated alternative.
    SemicolonFound,
    /// The entry contains characters outside the canonical alphabet.
    ForbiddenCharacter,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SemicolonFound => f.write_str("semicolon found"),
            Self::ForbiddenCharacter => f.write_str("forbidden characters found"),
        }
    }
}

/// One verification finding: which entry of which class, and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    /// The class whose list contains the entry.
    pub class: WordClass,
    /// Zero-based index of the entry in its list.
    pub index: usize,
    /// The offending raw word.
    pub word: String,
    /// What is wrong with it.
    pub kind: IssueKind,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "issue in '{}' at entry {}: {} in \"{}\"",
            self.class, self.index, self.kind, self.word
        )
    }
}

/// Verifies a raw entry list against the canonical alphabet.
///
/// Returns one [`Issue`] per violation, in entry order. An entry with both
/// a semicolon and forbidden characters yields two issues, matching a
/// check-per-rule report.
#[must_use]
pub fn verify_entries(class: WordClass, words: &[String]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (index, word) in words.iter().enumerate() {
        if word.contains(';') {
            issues.push(Issue {
                class,
                index,
                word: word.clone(),
                kind: IssueKind::SemicolonFound,
            });
        }
        if !is_canonical(word) {
            issues.push(Issue {
                class,
                index,
                word: word.clone(),
                kind: IssueKind::ForbiddenCharacter,
            });
        }
    }
    issues
}
