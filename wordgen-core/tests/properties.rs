use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use wordgen_core::model::symbol::normalize_word;
use wordgen_core::model::trigram_model::{MAX_WORD_LEN, MIN_WORD_LEN};
use wordgen_core::{TrigramModel, WordGenError};

fn corpus() -> impl Strategy<Value = Vec<String>> {
	proptest::collection::vec("[a-zA-Zа-яА-ЯёЁ0-9 '\\-]{0,24}", 0..24)
}

fn smoothing() -> impl Strategy<Value = f64> {
	prop_oneof![
		0.0f64..4.0,
		4.0f64..1e6,
		1e6f64..f64::MAX,
		Just(f64::MIN_POSITIVE),
		Just(f64::MAX),
		Just(f64::INFINITY),
	]
}

proptest! {
	#[test]
	fn normalization_is_idempotent(raw in "[a-zA-Zа-яА-ЯёЁ0-9 '!_\\-]{0,32}") {
		let once = normalize_word(&raw);
		prop_assert_eq!(normalize_word(&once), once.clone());
		prop_assert!(once.chars().all(|c| c.is_alphabetic() && !c.is_uppercase()));
	}

	#[test]
	fn probabilities_are_positive_and_bounded(words in corpus(), smoothing in smoothing()) {
		let model = TrigramModel::train(&words, smoothing);
		for (_, state) in model.states() {
			prop_assert!(!state.is_empty());
			for (_, p) in state.transitions() {
				prop_assert!(p > 0.0 && p <= 1.0);
			}
		}
	}

	#[test]
	fn accepted_words_respect_length_bounds(words in corpus(), seed in any::<u64>()) {
		let model = TrigramModel::train(&words, 0.5);
		let mut rng = StdRng::seed_from_u64(seed);
		for _ in 0..20 {
			if let Some(word) = model.generate_one_with(&mut rng, 10) {
				let len = word.chars().count();
				prop_assert!((MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len));
			}
		}
	}

	#[test]
	fn batches_are_unique_and_bounded(words in corpus(), count in 0usize..30, seed in any::<u64>()) {
		let model = TrigramModel::train(&words, 0.5);
		let batch = model.generate_many_with(&mut StdRng::seed_from_u64(seed), count);
		prop_assert!(batch.len() <= count);
		let unique: HashSet<&String> = batch.iter().collect();
		prop_assert_eq!(unique.len(), batch.len());
	}

	#[test]
	fn persistence_round_trips(words in corpus(), smoothing in smoothing()) {
		let model = TrigramModel::train(&words, smoothing);
		let bytes = model.to_bytes().unwrap();
		let restored = TrigramModel::from_bytes(&bytes).unwrap();
		prop_assert_eq!(restored.to_bytes().unwrap(), bytes);
	}

	#[test]
	fn truncated_models_are_rejected(words in proptest::collection::vec("[a-z]{1,8}", 1..8), cut in 0.0f64..1.0) {
		let bytes = TrigramModel::train(&words, 0.5).to_bytes().unwrap();
		let end = ((bytes.len() as f64) * cut) as usize;
		let result = TrigramModel::from_bytes(&bytes[..end.min(bytes.len() - 1)]);
		prop_assert!(matches!(result, Err(WordGenError::CorruptModel(_))));
	}
}

#[test]
fn empty_model_never_generates() {
	let model = TrigramModel::train(Vec::<&str>::new(), 0.5);
	assert!(model.is_empty());
	for _ in 0..100 {
		assert_eq!(model.generate_one(50), None);
	}
}

#[test]
fn ant_bat_scenario() {
	let model = TrigramModel::train(["ant", "ant", "bat"], 0.5);
	let mut produced = 0;
	for _ in 0..1000 {
		if let Some(word) = model.generate_one(50) {
			produced += 1;
			assert!(word.chars().all(|c| matches!(c, 'a' | 'n' | 't' | 'b')), "{}", word);
		}
	}
	assert!(produced >= 990, "only {} words", produced);
}
