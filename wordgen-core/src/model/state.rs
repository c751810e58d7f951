use std::collections::BTreeMap;

use rand::Rng;

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Next-symbol distribution of a single context.
///
/// A `State` is a node of the Markov chain: every outgoing edge is a symbol
/// observed after the context during training, weighted by its smoothed
/// probability.
///
/// ## Invariants
/// - At least one transition
/// - Every probability is finite and in `(0, 1]`
/// - `Start` is never a next symbol
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct State {
	/// Smoothed probability of each observed next symbol.
	/// Example: { 'n' => 0.55, 't' => 0.18, End => 0.18 }
	transitions: BTreeMap<Symbol, f64>,
}

impl State {
	/// Converts raw transition counts into an additively smoothed distribution.
	///
	/// The normalization constant reserves one extra smoothed bucket for
	/// symbols never seen after this context:
	/// `total = sum(counts) + smoothing * (distinct + 1)`.
	/// No entry is emitted for that bucket, so the listed probabilities sum
	/// to slightly less than 1.
	///
	/// For `smoothing > 1` the fraction is evaluated divided through by
	/// `smoothing`, which keeps it finite up to `f64::INFINITY`, where every
	/// symbol gets `1 / (distinct + 1)`.
	pub fn from_counts(counts: &BTreeMap<Symbol, usize>, smoothing: f64) -> Self {
		let observed = counts.values().sum::<usize>() as f64;
		let buckets = (counts.len() + 1) as f64;

		let transitions = if smoothing > 1.0 {
			let total = observed / smoothing + buckets;
			counts
				.iter()
				.map(|(symbol, count)| (*symbol, (*count as f64 / smoothing + 1.0) / total))
				.collect()
		} else {
			let total = observed + smoothing * buckets;
			counts
				.iter()
				.map(|(symbol, count)| (*symbol, (*count as f64 + smoothing) / total))
				.collect()
		};

		Self { transitions }
	}

	/// Returns the probability listed for `symbol`, if it was observed.
	pub fn probability(&self, symbol: Symbol) -> Option<f64> {
		self.transitions.get(&symbol).copied()
	}

	/// Iterates over `(symbol, probability)` in symbol order.
	pub fn transitions(&self) -> impl Iterator<Item = (Symbol, f64)> + '_ {
		self.transitions.iter().map(|(symbol, p)| (*symbol, *p))
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Picks the next symbol using the probabilities as weights.
	///
	/// Weights do not need to sum to 1. This method performs:
	/// - an O(n) scan to compute the total weight
	/// - a cumulative subtraction to select a bucket
	///
	/// Returns `None` if the state has no transitions or no usable weight.
	pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<Symbol> {
		let total: f64 = self.transitions.values().sum();
		if !(total > 0.0 && total.is_finite()) {
			return None;
		}

		let mut r = rng.random_range(0.0..total);

		let mut fallback: Option<Symbol> = None;
		for (symbol, weight) in &self.transitions {
			if r < *weight {
				return Some(*symbol);
			}
			r -= weight;
			fallback = Some(*symbol);
		}

		// Floating point residue can leave `r` just above the last bucket.
		fallback
	}

	/// Checks the invariants of a state read back from storage.
	pub(crate) fn validate(&self) -> Result<(), String> {
		if self.transitions.is_empty() {
			return Err("state without transitions".to_owned());
		}
		for (symbol, p) in &self.transitions {
			if *symbol == Symbol::Start {
				return Err("start sentinel used as a next symbol".to_owned());
			}
			if !(p.is_finite() && *p > 0.0 && *p <= 1.0) {
				return Err(format!("probability {} out of range for {:?}", p, symbol));
			}
		}
		Ok(())
	}
}
