//! # Page Generator
//!
//! Assembles full page text from a coordinate and a lexicon.
//!
//! ## Draw Protocol (frozen)
//!
//! All draws come from a single stream seeded by the coordinate:
//!
//! 1. one draw: sentence count in [20, 29]
//! 2. per sentence, coherent mode: one draw for the template index, then
//!    one draw per template slot for the word
//! 3. per sentence, chaos mode: one draw for the word count in [3, 12],
//!    then one draw per word against the combined list
//!
//! Downstream draws depend on upstream consumption count, so this ordering
//! is a protocol, not an implementation detail. Reordering or batching
//! draws invalidates every previously shared token.

use babel_lexicon::Lexicon;

use crate::coord::Coordinate;
use crate::rng::SeededRng;
use crate::templates::TEMPLATES;

/// Minimum sentences per page.
const SENTENCE_BASE: usize = 20;
/// Sentence count spread: one draw adds [0, 10) sentences.
const SENTENCE_SPAN: usize = 10;
/// Minimum words per chaos-mode sentence.
const CHAOS_WORDS_BASE: usize = 3;
/// Chaos word count spread: one draw adds [0, 10) words.
const CHAOS_WORDS_SPAN: usize = 10;

/// Generates page text from coordinates.
///
/// Borrows a loaded [`Lexicon`]; generation is pure and bounded, so
/// independent generators over the same lexicon may run in parallel
/// without coordination.
pub struct PageGenerator<'a> {
    /// The read-only word store.
    lexicon: &'a Lexicon,
}

impl<'a> PageGenerator<'a> {
    /// Creates a generator over a loaded lexicon.
    #[inline]
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Generates the page text for a coordinate.
    ///
    /// `coherent` selects template-shaped sentences; otherwise sentences
    /// are raw word streams of random length (chaos mode). The output is
    /// fully determined by the coordinate and the flag: calling this twice
    /// yields byte-identical strings.
    ///
    /// Bounds are not re-validated here. An out-of-domain coordinate still
    /// produces a deterministic page, just one outside the canonical
    /// addressing scheme.
    #[must_use]
    pub fn generate(&self, coordinate: &Coordinate, coherent: bool) -> String {
        let seed = coordinate.seed();
        let mut rng = SeededRng::from_seed(&seed);

        let sentence_count = SENTENCE_BASE + rng.next_index(SENTENCE_SPAN);
        tracing::debug!(%seed, sentence_count, coherent, "generating page");

        let mut sentences = Vec::with_capacity(sentence_count);
        for _ in 0..sentence_count {
            let sentence = if coherent {
                self.coherent_sentence(&mut rng)
            } else {
                self.chaos_sentence(&mut rng)
            };
            sentences.push(finish_sentence(&sentence));
        }

        sentences.join(" ")
    }

    /// One template-shaped sentence: a template draw, then a word draw per slot.
    fn coherent_sentence(&self, rng: &mut SeededRng) -> String {
        let template = TEMPLATES[rng.next_index(TEMPLATES.len())];
        let words: Vec<&str> = template
            .iter()
            .map(|class| {
                let index = rng.next_index(self.lexicon.len(*class));
                self.lexicon.word_at(*class, index)
            })
            .collect();
        words.join(" ")
    }

    /// One raw word stream: a length draw, then word draws against the
    /// combined list.
    fn chaos_sentence(&self, rng: &mut SeededRng) -> String {
        let combined = self.lexicon.combined();
        let length = CHAOS_WORDS_BASE + rng.next_index(CHAOS_WORDS_SPAN);
        let words: Vec<&str> = (0..length)
            .map(|_| combined[rng.next_index(combined.len())].as_str())
            .collect();
        words.join(" ")
    }
}

/// Convenience entry point for presentation layers that hold loose fields
/// instead of a [`Coordinate`].
///
/// Clamps the integer fields through `Coordinate` construction, then
/// generates as [`PageGenerator::generate`] does.
#[must_use]
pub fn generate_page(
    lexicon: &Lexicon,
    hex: &str,
    wall: u32,
    shelf: u32,
    vol: u32,
    page: u32,
    coherent: bool,
) -> String {
    let coordinate = Coordinate::new(hex, wall, shelf, vol, page);
    PageGenerator::new(lexicon).generate(&coordinate, coherent)
}

/// Capitalizes the first character and appends the terminal period.
fn finish_sentence(body: &str) -> String {
    let mut chars = body.chars();
    let mut out = String::with_capacity(body.len() + 1);
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
    }
    out.push('.');
    out
}
