//! # Lexicon Error Types
//!
//! All errors that can occur while loading or verifying dictionaries.

use thiserror::Error;

use crate::class::WordClass;

/// Errors that can occur in the lexicon.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A word class list is empty after cleaning.
    ///
    /// Fatal precondition: an empty list would make index selection divide
    /// by zero during generation, so loading fails fast instead.
    #[error("dictionary for class '{0}' is empty after cleaning")]
    EmptyClass(WordClass),

    /// A dictionary data file failed to parse.
    #[error("malformed dictionary data for class '{class}': {source}")]
    MalformedData {
        /// The class whose data file was being parsed.
        class: WordClass,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Verification found entries violating the canonical alphabet.
    #[error("dictionary for class '{class}' failed verification: {issues} issue(s)")]
    VerificationFailed {
        /// The class that failed.
        class: WordClass,
        /// Number of offending entries.
        issues: usize,
    },
}

/// Result type for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;
