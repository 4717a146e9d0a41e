//! # Sentence Template Catalog
//!
//! The fixed, ordered list of sentence shapes coherent mode draws from.
//!
//! Both the catalog order and each template's slot order are part of the
//! reproducibility contract: a template draw maps an RNG value to a catalog
//! index, and every slot consumes one word draw in sequence.

use babel_lexicon::WordClass;

use WordClass::{Adjective, Adverb, Noun, Preposition, Pronoun, Verb};

/// Number of sentence templates in the catalog.
pub const TEMPLATE_COUNT: usize = 8;

/// The sentence-shape catalog.
///
/// Each template is an ordered sequence of word-class slots. Unknown slots
/// are unrepresentable: a slot is a [`WordClass`], so an inconsistent
/// catalog cannot compile.
pub const TEMPLATES: [&[WordClass]; TEMPLATE_COUNT] = [
    &[Pronoun, Verb, Adjective, Noun, Preposition, Adjective, Noun],
    &[Adjective, Noun, Verb, Adverb],
    &[Pronoun, Verb, Adverb, Preposition, Adjective, Noun],
    &[Adjective, Noun, Verb, Pronoun],
    &[Pronoun, Verb, Noun, Preposition, Noun],
    &[Adjective, Adjective, Noun, Verb, Adverb],
    &[Noun, Verb, Adjective, Noun],
    &[Pronoun, Adverb, Verb, Adjective, Noun],
];
