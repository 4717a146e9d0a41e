//! # BABEL Engine
//!
//! Deterministic page generation for an infinite library.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the same coordinate always produces the same page
//! 2. **Pure**: generation is a bounded, side-effect-free computation over
//!    a read-only lexicon
//! 3. **Frozen draw order**: sentence-count, template, and word draws come
//!    from one shared stream in a fixed order; reordering them breaks every
//!    previously shared token
//!
//! ## Core Components
//!
//! - `SeededRng`: string-seeded f64 stream in [0, 1)
//! - `Coordinate`: the (hex, wall, shelf, vol, page) address, its share
//!   token codec, and navigation arithmetic
//! - `TEMPLATES`: the fixed sentence-shape catalog
//! - `PageGenerator`: draws words from a lexicon to assemble page text
//!
//! ## Example
//!
//! ```rust,ignore
//! use babel_engine::{Coordinate, PageGenerator};
//! use babel_lexicon::Lexicon;
//!
//! let lexicon = Lexicon::embedded()?;
//! let generator = PageGenerator::new(&lexicon);
//! let coord = Coordinate::decode("0-1-1-1-1").unwrap_or_default();
//! let text = generator.generate(&coord, true);
//! assert_eq!(text, generator.generate(&coord, true));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coord;
pub mod generator;
pub mod rng;
pub mod templates;

pub use coord::{Coordinate, PAGE_MAX, SHELF_MAX, VOL_MAX, WALL_MAX};
pub use generator::{generate_page, PageGenerator};
pub use rng::SeededRng;
pub use templates::{TEMPLATES, TEMPLATE_COUNT};
