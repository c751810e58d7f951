use thiserror::Error;

/// Errors surfaced by the word generator core.
///
/// Training and sampling never fail; only the persistence boundary and
/// request parsing produce errors.
#[derive(Error, Debug)]
pub enum WordGenError {
	/// The supplied bytes do not decode into a valid trigram model.
	#[error("corrupt model: {0}")]
	CorruptModel(String),

	/// A model could not be encoded.
	#[error("encode error: {0}")]
	Encode(String),

	/// Propagated I/O error.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// A caller-supplied parameter could not be parsed.
	#[error("invalid input: {0}")]
	InvalidInput(String),
}

impl From<postcard::Error> for WordGenError {
	fn from(error: postcard::Error) -> Self {
		WordGenError::CorruptModel(error.to_string())
	}
}

pub type Result<T> = std::result::Result<T, WordGenError>;
