//! Character-level trigram word generator.
//!
//! This crate learns which character tends to follow each pair of
//! characters in a word list and synthesizes new, pronounceable
//! pseudo-words from those statistics:
//! - Training with additive smoothing
//! - Bounded random-walk sampling, single and batched
//! - Compact model persistence
//! - Per-language model management with real-word and syllable fallbacks
//!
//! ```
//! use wordgen_core::model::trigram_model::TrigramModel;
//!
//! let model = TrigramModel::train(["ant", "ant", "bat"], 0.5);
//! let word = model.generate_one(50).unwrap();
//! assert!(word == "ant" || word == "bat");
//!
//! let restored = TrigramModel::from_bytes(&model.to_bytes().unwrap()).unwrap();
//! assert_eq!(restored, model);
//! ```

/// Trigram models and generation logic.
pub mod model;

/// Supported natural languages.
pub mod language;

/// Built-in real words and syllables.
pub mod vocabulary;

/// Error type shared by the crate.
pub mod error;

/// Model files and word lists on disk.
pub mod io;

pub use error::{Result, WordGenError};
pub use language::Language;
pub use model::trigram_model::TrigramModel;
