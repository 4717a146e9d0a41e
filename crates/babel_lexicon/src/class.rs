//! # Word Classes
//!
//! The six-class alphabet sentence templates are written in.
//!
//! The declaration order here is load-bearing: the combined "any class"
//! list is the concatenation of the per-class lists in this order, and
//! chaos-mode draws index into that combined list.

use serde::{Deserialize, Serialize};

/// One of the six word classes a dictionary entry can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum WordClass {
    /// Adjectives ("ancient", "infinite").
    Adjective = 0,
    /// Adverbs ("slowly", "forever").
    Adverb = 1,
    /// Nouns ("hexagon", "gallery").
    Noun = 2,
    /// Prepositions ("within", "toward").
    Preposition = 3,
    /// Pronouns ("someone", "nothing").
    Pronoun = 4,
    /// Verbs ("wanders", "deciphers").
    Verb = 5,
}

/// Number of word classes.
pub const CLASS_COUNT: usize = 6;

impl WordClass {
    /// All classes, in combined-list concatenation order.
    pub const ALL: [Self; CLASS_COUNT] = [
        Self::Adjective,
        Self::Adverb,
        Self::Noun,
        Self::Preposition,
        Self::Pronoun,
        Self::Verb,
    ];

    /// Short tag used in template notation and data file naming.
    #[inline]
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Adjective => "adj",
            Self::Adverb => "adv",
            Self::Noun => "noun",
            Self::Preposition => "prep",
            Self::Pronoun => "pron",
            Self::Verb => "verb",
        }
    }

    /// Name of the dictionary data file this class is loaded from.
    #[inline]
    #[must_use]
    pub const fn data_file(self) -> &'static str {
        match self {
            Self::Adjective => "adjectives.json",
            Self::Adverb => "adverbs.json",
            Self::Noun => "nouns.json",
            Self::Preposition => "prepositions.json",
            Self::Pronoun => "pronouns.json",
            Self::Verb => "verbs.json",
        }
    }

    /// Converts from u8. Values past the last class saturate to `Verb`.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Adjective,
            1 => Self::Adverb,
            2 => Self::Noun,
            3 => Self::Preposition,
            4 => Self::Pronoun,
            _ => Self::Verb,
        }
    }

    /// Index of this class in [`WordClass::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for WordClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
