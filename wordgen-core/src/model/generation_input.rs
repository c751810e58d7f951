use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WordGenError;
use crate::language::Language;

/// Smallest batch a request may ask for.
pub const MIN_COUNT: usize = 10;

/// Largest batch a request may ask for.
pub const MAX_COUNT: usize = 100;

/// Batch size when the request does not say.
pub const DEFAULT_COUNT: usize = 45;

/// Strategy used to produce the words of a request.
///
/// # Variants
/// - `Words`: real words picked from the built-in list.
/// - `Model`: words synthesized by the language's trigram model,
///   padded with real words when the model under-produces.
/// - `Syllable`: pseudo-words glued from random syllables.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
	#[default]
	Words,
	Model,
	Syllable,
}

impl FromStr for GeneratorKind {
	type Err = WordGenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"words" => Ok(GeneratorKind::Words),
			"model" => Ok(GeneratorKind::Model),
			"syllable" => Ok(GeneratorKind::Syllable),
			other => Err(WordGenError::InvalidInput(format!(
				"Generator '{}' must be 'words', 'model' or 'syllable'",
				other
			))),
		}
	}
}

/// Input parameters of one generation request.
///
/// # Invariants
/// - `count` is always within `MIN_COUNT..=MAX_COUNT`
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationInput {
	/// How words are produced.
	pub kind: GeneratorKind,

	/// Language of the words.
	pub lang: Language,

	/// Number of words to return.
	count: usize,
}

impl GenerationInput {
	/// Creates an input, clamping `count` into the accepted range.
	pub fn new(kind: GeneratorKind, lang: Language, count: usize) -> Self {
		let mut input = Self { kind, lang, count: DEFAULT_COUNT };
		input.set_count(count);
		input
	}

	/// Returns the number of words to produce.
	pub fn count(&self) -> usize {
		self.count
	}

	/// Sets the number of words, clamped to `MIN_COUNT..=MAX_COUNT`.
	pub fn set_count(&mut self, count: usize) {
		self.count = count.clamp(MIN_COUNT, MAX_COUNT);
	}
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self::new(GeneratorKind::default(), Language::default(), DEFAULT_COUNT)
	}
}
