//! # Lexicon Store
//!
//! Loads the six word-class lists, cleans them once, and exposes indexed
//! read-only access plus the combined "any class" list used by chaos mode.
//!
//! ## Load Pipeline
//!
//! raw JSON records -> clean to canonical alphabet -> lowercase -> store.
//! All of this happens exactly once; lookups afterwards are slice indexing.
//!
//! ## Combined List
//!
//! The combined list is the per-class lists concatenated in
//! [`WordClass::ALL`] order. That order is part of the reproducibility
//! contract: a chaos-mode draw maps to a word through it.

use serde::Deserialize;

use crate::class::{WordClass, CLASS_COUNT};
use crate::clean::clean_word;
use crate::error::{LexiconError, LexiconResult};

/// One record from a dictionary data file.
///
/// Auxiliary metadata fields in the data are ignored; only `word` matters
/// to generation.
#[derive(Clone, Debug, Deserialize)]
pub struct RawEntry {
    /// The raw word, possibly with semicolon alternatives.
    pub word: String,
}

/// Embedded dictionary data, compiled into the binary.
///
/// Indexed by [`WordClass::index`].
const EMBEDDED: [&str; CLASS_COUNT] = [
    include_str!("../data/adjectives.json"),
    include_str!("../data/adverbs.json"),
    include_str!("../data/nouns.json"),
    include_str!("../data/prepositions.json"),
    include_str!("../data/pronouns.json"),
    include_str!("../data/verbs.json"),
];

/// The read-only word store the generator draws from.
///
/// Construct once at startup; share by reference afterwards. Independent
/// generation calls may read it concurrently without coordination.
#[derive(Clone, Debug)]
pub struct Lexicon {
    /// Cleaned, lowercased lists, indexed by class.
    lists: [Vec<String>; CLASS_COUNT],
    /// Concatenation of all lists in class order.
    combined: Vec<String>,
}

impl Lexicon {
    /// Builds a lexicon from per-class raw entry lists.
    ///
    /// Entries are cleaned and lowercased here. Entries that clean down to
    /// nothing are dropped with a warning rather than leaving empty words
    /// in the draw space.
    ///
    /// # Errors
    ///
    /// [`LexiconError::EmptyClass`] if any class has no usable entries.
    pub fn from_raw(raw: [Vec<RawEntry>; CLASS_COUNT]) -> LexiconResult<Self> {
        let mut lists: [Vec<String>; CLASS_COUNT] = Default::default();

        for class in WordClass::ALL {
            let entries = &raw[class.index()];
            let mut list = Vec::with_capacity(entries.len());
            for entry in entries {
                let cleaned = clean_word(&entry.word).to_lowercase();
                if cleaned.is_empty() {
                    tracing::warn!("dropping entry in '{}': cleaned to empty", class);
                    continue;
                }
                list.push(cleaned);
            }
            if list.is_empty() {
                return Err(LexiconError::EmptyClass(class));
            }
            lists[class.index()] = list;
        }

        let combined = lists.iter().flatten().cloned().collect();
        Ok(Self { lists, combined })
    }

    /// Loads the lexicon from the embedded dictionary data.
    ///
    /// # Errors
    ///
    /// [`LexiconError::MalformedData`] if a data file fails to parse,
    /// [`LexiconError::EmptyClass`] if a class list ends up empty.
    pub fn embedded() -> LexiconResult<Self> {
        let raw = load_embedded_raw()?;
        let lexicon = Self::from_raw(raw)?;
        tracing::info!(
            words = lexicon.combined.len(),
            "lexicon loaded from embedded data"
        );
        Ok(lexicon)
    }

    /// Words of one class, in stable list order.
    #[inline]
    #[must_use]
    pub fn words(&self, class: WordClass) -> &[String] {
        &self.lists[class.index()]
    }

    /// Number of words in one class.
    #[inline]
    #[must_use]
    pub fn len(&self, class: WordClass) -> usize {
        self.lists[class.index()].len()
    }

    /// Always false: construction rejects empty classes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    /// Word at `index` within one class list.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; callers derive indices from the
    /// list length they just read, so a bad index is a caller bug.
    #[inline]
    #[must_use]
    pub fn word_at(&self, class: WordClass, index: usize) -> &str {
        &self.lists[class.index()][index]
    }

    /// The combined "any class" list.
    #[inline]
    #[must_use]
    pub fn combined(&self) -> &[String] {
        &self.combined
    }
}

/// Parses the embedded data files into raw entry lists.
///
/// # Errors
///
/// [`LexiconError::MalformedData`] if a file is not valid JSON.
pub fn load_embedded_raw() -> LexiconResult<[Vec<RawEntry>; CLASS_COUNT]> {
    let mut raw: [Vec<RawEntry>; CLASS_COUNT] = Default::default();
    for class in WordClass::ALL {
        raw[class.index()] = serde_json::from_str(EMBEDDED[class.index()])
            .map_err(|source| LexiconError::MalformedData { class, source })?;
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::is_canonical;

    fn entries(words: &[&str]) -> Vec<RawEntry> {
        words
            .iter()
            .map(|w| RawEntry {
                word: (*w).to_string(),
            })
            .collect()
    }

    fn tiny_raw() -> [Vec<RawEntry>; CLASS_COUNT] {
        [
            entries(&["ANCIENT", "SILENT"]),
            entries(&["SLOWLY"]),
            entries(&["HEXAGON", "GALLERY", "LAMP"]),
            entries(&["WITHIN"]),
            entries(&["SOMEONE"]),
            entries(&["WANDERS", "SLEEPS"]),
        ]
    }

    #[test]
    fn test_lists_are_cleaned_and_lowercased() {
        let lexicon = Lexicon::from_raw(tiny_raw()).unwrap();
        assert_eq!(lexicon.words(WordClass::Adjective), ["ancient", "silent"]);
        assert_eq!(lexicon.word_at(WordClass::Noun, 2), "lamp");
    }

    #[test]
    fn test_combined_is_concatenation_in_class_order() {
        let lexicon = Lexicon::from_raw(tiny_raw()).unwrap();
        let expected = [
            "ancient", "silent", "slowly", "hexagon", "gallery", "lamp", "within", "someone",
            "wanders", "sleeps",
        ];
        assert_eq!(lexicon.combined(), expected);
    }

    #[test]
    fn test_semicolon_alternatives_do_not_survive() {
        let mut raw = tiny_raw();
        raw[WordClass::Noun.index()] = entries(&["MIRROR;GLASS"]);
        let lexicon = Lexicon::from_raw(raw).unwrap();
        assert_eq!(lexicon.words(WordClass::Noun), ["mirror"]);
    }

    #[test]
    fn test_empty_class_fails_fast() {
        let mut raw = tiny_raw();
        raw[WordClass::Verb.index()] = Vec::new();
        let err = Lexicon::from_raw(raw).unwrap_err();
        assert!(matches!(err, LexiconError::EmptyClass(WordClass::Verb)));
    }

    #[test]
    fn test_entries_cleaning_to_nothing_are_dropped() {
        let mut raw = tiny_raw();
        raw[WordClass::Adverb.index()] = entries(&["123", "SLOWLY"]);
        let lexicon = Lexicon::from_raw(raw).unwrap();
        assert_eq!(lexicon.words(WordClass::Adverb), ["slowly"]);
    }

    #[test]
    fn test_embedded_data_loads() {
        let lexicon = Lexicon::embedded().unwrap();
        for class in WordClass::ALL {
            assert!(lexicon.len(class) > 0, "class '{class}' should not be empty");
        }
        let total: usize = WordClass::ALL.iter().map(|c| lexicon.len(*c)).sum();
        assert_eq!(lexicon.combined().len(), total);
    }

    #[test]
    fn test_embedded_data_is_already_canonical() {
        let raw = load_embedded_raw().unwrap();
        for class in WordClass::ALL {
            for entry in &raw[class.index()] {
                assert!(
                    is_canonical(&entry.word),
                    "embedded entry \"{}\" in '{class}' is not canonical",
                    entry.word
                );
            }
        }
    }

    #[test]
    fn test_embedded_words_stay_in_cleaned_alphabet_lowercased() {
        let lexicon = Lexicon::embedded().unwrap();
        for word in lexicon.combined() {
            assert!(
                word.chars()
                    .all(|c| c.is_ascii_lowercase() || matches!(c, ' ' | '.' | ',')),
                "word \"{word}\" escaped the canonical alphabet"
            );
        }
    }
}
