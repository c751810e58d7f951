//! Trigram word generation.
//!
//! - Boundary symbols and word normalization (`symbol`)
//! - Per-context smoothed distributions (`state`)
//! - The trainable, persistable trigram model (`TrigramModel`)
//! - Request configuration (`GenerationInput`)
//! - A per-language generator with fallbacks (`Generator`)

/// Word framing symbols, contexts and normalization.
pub mod symbol;

/// Next-symbol distribution of one context.
///
/// Converts counts into smoothed probabilities and samples from them.
pub mod state;

/// Character trigram model.
///
/// Training, random-walk sampling, batch de-duplication and
/// byte encoding.
pub mod trigram_model;

/// Request parameters: strategy, language and word count.
pub mod generation_input;

/// One model per language, warmed once and shared read-only.
pub mod generator;
