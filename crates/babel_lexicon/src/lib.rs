//! # BABEL Lexicon
//!
//! Word-class dictionaries for deterministic page generation.
//!
//! ## Design Principles
//!
//! 1. **Load once**: dictionaries are cleaned and lowercased at load time,
//!    never per lookup
//! 2. **Read-only**: a loaded [`Lexicon`] is never mutated; generation
//!    borrows it
//! 3. **Stable order**: list order decides which word an RNG draw lands on,
//!    so it is part of the reproducibility contract
//!
//! ## Core Components
//!
//! - `WordClass`: the six-class alphabet used by sentence templates
//! - `clean`: canonicalization and verification of raw entries
//! - `Lexicon`: the store the generator draws words from
//!
//! ## Example
//!
//! ```rust,ignore
//! use babel_lexicon::{Lexicon, WordClass};
//!
//! let lexicon = Lexicon::embedded()?;
//! assert!(lexicon.len(WordClass::Noun) > 0);
//! let word = lexicon.word_at(WordClass::Noun, 0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod class;
pub mod clean;
pub mod error;
pub mod store;

pub use class::WordClass;
pub use clean::{clean_word, is_canonical, verify_entries, Issue, IssueKind};
pub use error::{LexiconError, LexiconResult};
pub use store::{load_embedded_raw, Lexicon, RawEntry};
