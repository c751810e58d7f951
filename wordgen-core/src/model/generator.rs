use std::collections::BTreeMap;
use std::path::Path;

use log::{info, warn};
use rand::Rng;

use crate::error::{Result, WordGenError};
use crate::io;
use crate::language::Language;
use crate::model::generation_input::{GenerationInput, GeneratorKind};
use crate::model::trigram_model::{TrigramModel, DEFAULT_SMOOTHING};
use crate::vocabulary::{self, MAX_SYLLABLES, MIN_SYLLABLES};

/// High-level generator holding one trigram model per language.
///
/// # Responsibilities
/// - Load each language's model from disk, or train and persist it
/// - Dispatch a request to the real-word, model or syllable strategy
/// - Pad short model output with real words
///
/// Once built the generator is read-only, so any number of requests can
/// share it without locking.
#[derive(Debug, Default)]
pub struct Generator {
	models: BTreeMap<Language, TrigramModel>,
}

impl Generator {
	/// Prepares a model for every supported language from `data_dir`.
	///
	/// # Behavior
	/// - Loads `data_dir/<model file>` when present.
	/// - Otherwise, or if the file is corrupt, trains on the built-in
	///   vocabulary and saves the result. A failed save is only logged.
	///
	/// # Errors
	/// Returns an error if a model file exists but cannot be read.
	pub fn warm<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
		let mut models = BTreeMap::new();
		for lang in Language::ALL {
			let path = io::model_path(&data_dir, lang);
			let loaded = match io::load_model(&path) {
				Ok(model) => model,
				Err(WordGenError::CorruptModel(e)) => {
					warn!("Ignoring corrupt model {}: {}", path.display(), e);
					None
				}
				Err(e) => return Err(e),
			};

			let model = match loaded {
				Some(model) => {
					info!("Loaded {} model from {} ({} contexts)", lang, path.display(), model.len());
					model
				}
				None => {
					let model = TrigramModel::train(vocabulary::real_words(lang), DEFAULT_SMOOTHING);
					info!("Trained {} model on built-in words ({} contexts)", lang, model.len());
					if let Err(e) = io::save_model(&model, &path) {
						warn!("Failed to save {} model to {}: {}", lang, path.display(), e);
					}
					model
				}
			};
			models.insert(lang, model);
		}
		Ok(Self { models })
	}

	/// Builds a generator from models prepared by the caller.
	pub fn from_models<I: IntoIterator<Item = (Language, TrigramModel)>>(models: I) -> Self {
		Self { models: models.into_iter().collect() }
	}

	/// Returns the model of `lang`, if one is loaded.
	pub fn model(&self, lang: Language) -> Option<&TrigramModel> {
		self.models.get(&lang)
	}

	/// Languages with a loaded model, in order.
	pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
		self.models.keys().copied()
	}

	/// Produces exactly `input.count()` words with the requested strategy.
	///
	/// # Notes
	/// - `Model` output is padded with real words when the model yields
	///   fewer distinct words than requested. A language without a model
	///   is served entirely from real words.
	pub fn generate<R: Rng>(&self, rng: &mut R, input: &GenerationInput) -> Vec<String> {
		let count = input.count();
		match input.kind {
			GeneratorKind::Words => vocabulary::generate_real_words(rng, count, input.lang),
			GeneratorKind::Syllable => {
				vocabulary::generate_syllable_words(rng, count, MIN_SYLLABLES, MAX_SYLLABLES, input.lang)
			}
			GeneratorKind::Model => {
				let mut words = match self.models.get(&input.lang) {
					Some(model) => model.generate_many_with(rng, count),
					None => Vec::new(),
				};
				if words.len() < count {
					let missing = count - words.len();
					words.extend(vocabulary::generate_real_words(rng, missing, input.lang));
				}
				words.truncate(count);
				words
			}
		}
	}
}
