use serde::{Deserialize, Serialize};

/// A symbol of the training sequence.
///
/// Words are framed as `[Start, Start, c1, .., cn, End]`. The sentinels are
/// kept out of the character alphabet so that any Unicode letter can be
/// learned without colliding with a boundary marker.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
	/// No character yet. Used twice to seed the first real character.
	Start,
	/// A lower-cased alphabetic character.
	Char(char),
	/// The word has finished.
	End,
}

/// The two most recently seen symbols, used to predict the next one.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Context(pub Symbol, pub Symbol);

impl Context {
	/// Context every walk starts from.
	pub const INITIAL: Context = Context(Symbol::Start, Symbol::Start);

	/// Slides the window forward by one symbol.
	pub fn advance(self, next: Symbol) -> Context {
		Context(self.1, next)
	}

	/// Whether this context can occur in a sequence built by [`symbols_of`].
	///
	/// `End` never precedes anything and `Start` never follows a character.
	pub fn is_reachable(&self) -> bool {
		match (self.0, self.1) {
			(Symbol::End, _) | (_, Symbol::End) => false,
			(Symbol::Char(_), Symbol::Start) => false,
			_ => true,
		}
	}
}

/// Reduces a raw training string to lower-case alphabetic characters.
///
/// Total and idempotent: any input yields a (possibly empty) string, and
/// normalizing a normalized word returns it unchanged.
pub fn normalize_word(word: &str) -> String {
	word.to_lowercase()
		.chars()
		.filter(|c| c.is_alphabetic())
		.collect()
}

/// Frames an already normalized word with its boundary sentinels.
pub fn symbols_of(word: &str) -> Vec<Symbol> {
	let mut symbols = Vec::with_capacity(word.len() + 3);
	symbols.push(Symbol::Start);
	symbols.push(Symbol::Start);
	symbols.extend(word.chars().map(Symbol::Char));
	symbols.push(Symbol::End);
	symbols
}
