//! # BABEL Sonics
//!
//! Turns generated page text into a musical score, one note per character.
//!
//! ## Design Principles
//!
//! 1. **Pure**: scoring maps (text, settings) to note events; it owns no
//!    audio device, reads no clock
//! 2. **Deterministic**: the same page under the same settings always
//!    yields the same score
//! 3. **Caller-owned state**: playback position lives in a [`Session`]
//!    value constructed per listening session, not in a process-wide
//!    singleton
//!
//! ## Mapping
//!
//! Each character indexes a 10-note pentatonic scale by its code point
//! modulo the scale length. Whitespace becomes a rest with a longer gap,
//! which is what gives word boundaries their phrasing.
//!
//! ## Example
//!
//! ```rust,ignore
//! use babel_sonics::{Session, Settings};
//!
//! let mut session = Session::new("Some page text.", Settings::default());
//! while let Some(event) = session.next_event() {
//!     // hand the event to an actual synthesizer
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod mood;
pub mod score;

pub use mood::{Mood, Waveform, SCALE_LEN};
pub use score::{score, Note, NoteEvent, Session, Settings};
