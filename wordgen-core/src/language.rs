use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WordGenError;

/// Natural language a model is trained for. One model file per language.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	#[default]
	Ru,
	En,
}

impl Language {
	pub const ALL: [Language; 2] = [Language::Ru, Language::En];

	/// Short code used in requests and file names.
	pub fn code(&self) -> &'static str {
		match self {
			Language::Ru => "ru",
			Language::En => "en",
		}
	}

	/// File name of the persisted model for this language.
	pub fn model_file_name(&self) -> &'static str {
		match self {
			Language::Ru => "word_gen_model.bin",
			Language::En => "word_gen_model_en.bin",
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl FromStr for Language {
	type Err = WordGenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"ru" => Ok(Language::Ru),
			"en" => Ok(Language::En),
			other => Err(WordGenError::InvalidInput(format!("Unknown language '{}', expected 'ru' or 'en'", other))),
		}
	}
}
