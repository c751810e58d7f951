use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::language::Language;
use crate::model::trigram_model::TrigramModel;

/// Resolves the directory holding model files.
///
/// - `base` defaults to the current working directory
/// - `base/instance` is used when it exists, `base` otherwise
pub fn resolve_data_dir(base: Option<&Path>) -> PathBuf {
	let base = match base {
		Some(path) => path.to_path_buf(),
		None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
	};

	let instance = base.join("instance");
	if instance.is_dir() { instance } else { base }
}

/// Path of the model file of `lang` inside `dir`.
///
/// Example:
/// `data/instance` + `En` → `data/instance/word_gen_model_en.bin`
pub fn model_path<P: AsRef<Path>>(dir: P, lang: Language) -> PathBuf {
	dir.as_ref().join(lang.model_file_name())
}

/// Writes a model to `path`, creating missing parent directories.
pub fn save_model<P: AsRef<Path>>(model: &TrigramModel, path: P) -> Result<()> {
	let path = path.as_ref();
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent)?;
		}
	}
	fs::write(path, model.to_bytes()?)?;
	debug!("Saved model with {} contexts to {}", model.len(), path.display());
	Ok(())
}

/// Reads a model from `path`.
///
/// # Returns
/// - `Ok(None)` if the file does not exist
/// - `Err(CorruptModel)` if the file does not hold a valid model
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Option<TrigramModel>> {
	let bytes = match fs::read(path.as_ref()) {
		Ok(bytes) => bytes,
		Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
		Err(e) => return Err(e.into()),
	};
	Ok(Some(TrigramModel::from_bytes(&bytes)?))
}

/// Reads a training word list, one word per line.
///
/// - Each line is trimmed and lower-cased
/// - Lines that are empty or contain a non-alphabetic character are dropped
pub fn read_word_list<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.map(|line| line.trim().to_lowercase())
		.filter(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::WordGenError;

	#[test]
	fn data_dir_prefers_instance() {
		let dir = tempfile::tempdir().unwrap();
		assert_eq!(resolve_data_dir(Some(dir.path())), dir.path());

		fs::create_dir(dir.path().join("instance")).unwrap();
		assert_eq!(resolve_data_dir(Some(dir.path())), dir.path().join("instance"));
	}

	#[test]
	fn model_paths_differ_per_language() {
		let ru = model_path("data", Language::Ru);
		let en = model_path("data", Language::En);
		assert_eq!(ru, Path::new("data").join("word_gen_model.bin"));
		assert_ne!(ru, en);
	}

	#[test]
	fn save_then_load() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("model.bin");
		let model = TrigramModel::train(["stone", "storm", "story"], 0.5);

		save_model(&model, &path).unwrap();
		assert_eq!(load_model(&path).unwrap(), Some(model));
	}

	#[test]
	fn missing_model_is_none() {
		let dir = tempfile::tempdir().unwrap();
		assert_eq!(load_model(dir.path().join("absent.bin")).unwrap(), None);
	}

	#[test]
	fn corrupt_file_is_reported() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("model.bin");
		fs::write(&path, [0xFF; 32]).unwrap();
		assert!(matches!(load_model(&path), Err(WordGenError::CorruptModel(_))));
	}

	#[test]
	fn word_list_keeps_alphabetic_lines() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("words.txt");
		fs::write(&path, "Hello\n  world  \n\nfoo bar\nr2d2\nПривет\r\n").unwrap();
		assert_eq!(read_word_list(&path).unwrap(), vec!["hello", "world", "привет"]);
	}

	#[test]
	fn missing_word_list_is_io_error() {
		let dir = tempfile::tempdir().unwrap();
		assert!(matches!(read_word_list(dir.path().join("none.txt")), Err(WordGenError::Io(_))));
	}
}
