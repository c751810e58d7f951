use std::collections::{BTreeMap, HashSet};

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::State;
use super::symbol::{normalize_word, symbols_of, Context, Symbol};
use crate::error::{Result, WordGenError};

/// Smoothing constant used when the caller has no preference.
pub const DEFAULT_SMOOTHING: f64 = 0.5;

/// Walks attempted per word before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

/// Shortest accepted word, in characters.
pub const MIN_WORD_LEN: usize = 2;

/// Longest accepted word, in characters. Walks are cut at this length.
pub const MAX_WORD_LEN: usize = 14;

/// Batch generation calls the single-word sampler at most `count * BATCH_ATTEMPT_FACTOR` times.
pub const BATCH_ATTEMPT_FACTOR: usize = 20;

/// Character-level trigram model: two symbols of context predict the next.
///
/// # Responsibilities
/// - Learn smoothed next-symbol distributions from a word corpus
/// - Synthesize new words by random walk
/// - Encode to and decode from a compact byte blob
///
/// # Invariants
/// - Built once, read-only afterwards; safe to share across threads
/// - Every context is reachable from `(Start, Start)` and holds a valid `State`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TrigramModel {
	/// Mapping from a context to the distribution of the following symbol.
	/// Ordered so that encoding is deterministic.
	states: BTreeMap<Context, State>,
}

impl TrigramModel {
	/// Trains a model on a corpus of raw words.
	///
	/// Each word is normalized; words left empty contribute nothing.
	/// Never fails: an empty corpus yields an empty model.
	///
	/// # Notes
	/// - A negative or NaN `smoothing` is treated as `0.0`.
	pub fn train<I, S>(words: I, smoothing: f64) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let smoothing = if smoothing >= 0.0 {
			smoothing
		} else {
			warn!("Smoothing {} is not a non-negative number, using 0.0", smoothing);
			0.0
		};

		let mut counts: BTreeMap<Context, BTreeMap<Symbol, usize>> = BTreeMap::new();
		let mut used = 0usize;
		for word in words {
			let word = normalize_word(word.as_ref());
			if word.is_empty() {
				continue;
			}
			used += 1;

			for window in symbols_of(&word).windows(3) {
				let next = counts.entry(Context(window[0], window[1])).or_default();
				*next.entry(window[2]).or_insert(0) += 1;
			}
		}

		let states: BTreeMap<Context, State> = counts
			.iter()
			.map(|(context, next)| (*context, State::from_counts(next, smoothing)))
			.collect();

		debug!("Trained on {} words, {} contexts", used, states.len());
		Self { states }
	}

	/// Number of contexts in the model.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// `true` when training saw no usable word.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Returns the distribution following `context`, if it was observed.
	pub fn state(&self, context: &Context) -> Option<&State> {
		self.states.get(context)
	}

	/// Iterates over every context and its distribution, in context order.
	pub fn states(&self) -> impl Iterator<Item = (&Context, &State)> {
		self.states.iter()
	}

	/// Generates one word using the thread-local random generator.
	///
	/// See [`TrigramModel::generate_one_with`].
	pub fn generate_one(&self, max_attempts: usize) -> Option<String> {
		self.generate_one_with(&mut rand::rng(), max_attempts)
	}

	/// Generates one word, retrying up to `max_attempts` walks.
	///
	/// Returns `None` when no walk produced a word of
	/// `MIN_WORD_LEN..=MAX_WORD_LEN` characters. This is an expected outcome
	/// for sparse or empty models, not an error. A `max_attempts` of 0 is
	/// treated as 1.
	pub fn generate_one_with<R: Rng>(&self, rng: &mut R, max_attempts: usize) -> Option<String> {
		(0..max_attempts.max(1)).find_map(|_| self.walk(rng))
	}

	/// Single random walk from `(Start, Start)`.
	///
	/// Returns `None` if the walk reached an unknown context or finished
	/// with a word outside the length bounds.
	fn walk<R: Rng>(&self, rng: &mut R) -> Option<String> {
		let mut word = String::new();
		let mut length = 0usize;
		let mut context = Context::INITIAL;

		loop {
			// Unknown context: the partial word is discarded
			let next = self.states.get(&context)?.sample(rng)?;
			match next {
				Symbol::End => break,
				Symbol::Char(c) => {
					word.push(c);
					length += 1;
					if length >= MAX_WORD_LEN {
						break;
					}
				}
				// Never stored as a next symbol
				Symbol::Start => return None,
			}
			context = context.advance(next);
		}

		(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&length).then_some(word)
	}

	/// Generates up to `count` distinct words using the thread-local random generator.
	///
	/// See [`TrigramModel::generate_many_with`].
	pub fn generate_many(&self, count: usize) -> Vec<String> {
		self.generate_many_with(&mut rand::rng(), count)
	}

	/// Generates up to `count` distinct words.
	///
	/// # Behavior
	/// - Calls the single-word sampler with `DEFAULT_MAX_ATTEMPTS`.
	/// - Keeps a word only if it was not produced before (exact match).
	/// - Stops after `count * BATCH_ATTEMPT_FACTOR` calls.
	///
	/// A result shorter than `count` is a normal outcome; padding it is the
	/// caller's decision.
	pub fn generate_many_with<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<String> {
		let mut words = Vec::with_capacity(count);
		let mut seen = HashSet::with_capacity(count);
		let max_total_attempts = count.saturating_mul(BATCH_ATTEMPT_FACTOR);

		let mut attempts = 0;
		while words.len() < count && attempts < max_total_attempts {
			attempts += 1;
			if let Some(word) = self.generate_one_with(rng, DEFAULT_MAX_ATTEMPTS) {
				if seen.insert(word.clone()) {
					words.push(word);
				}
			}
		}

		debug!("Generated {}/{} words in {} attempts", words.len(), count, attempts);
		words
	}

	/// Encodes the model with `postcard`.
	///
	/// Deterministic: equal models always encode to equal bytes.
	///
	/// # Errors
	/// Returns `WordGenError::Encode` if `postcard` rejects the model. Models
	/// built by [`TrigramModel::train`] always encode.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		postcard::to_stdvec(self).map_err(|e| WordGenError::Encode(e.to_string()))
	}

	/// Decodes a model previously produced by [`TrigramModel::to_bytes`].
	///
	/// # Errors
	/// Returns `WordGenError::CorruptModel` if the bytes do not decode, carry
	/// trailing data, or describe a structurally invalid model.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		let (model, rest): (Self, &[u8]) = postcard::take_from_bytes(bytes)?;
		if !rest.is_empty() {
			return Err(WordGenError::CorruptModel(format!("{} trailing bytes", rest.len())));
		}
		model.validate()?;
		Ok(model)
	}

	fn validate(&self) -> Result<()> {
		for (context, state) in &self.states {
			if !context.is_reachable() {
				return Err(WordGenError::CorruptModel(format!("unreachable context {:?}", context)));
			}
			state
				.validate()
				.map_err(|e| WordGenError::CorruptModel(format!("context {:?}: {}", context, e)))?;
		}
		Ok(())
	}
}
