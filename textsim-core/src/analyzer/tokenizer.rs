//! Tokenizer Module
//!
//! Splits text into the word tokens both similarity metrics operate on. It is
//! the second stage of the pipeline: raw text goes through the
//! [`TextNormalizer`] first, and the resulting `[a-z0-9 ]` string is cut on
//! its single-space separators.
//!
//! ## Two Entry Points
//!
//! - [`Tokenizer::tokenize`] takes **raw** text and returns an owned,
//!   materialized `Vec<String>`. This is what the similarity engine uses.
//! - [`Tokenizer::for_each_token`] takes **already normalized** text and emits
//!   borrowed slices through a callback, with no allocation. The corpus and
//!   the bench binary use it on reusable buffers.
//!
//! ```rust
//! use textsim_core::analyzer::tokenizer::tokenize;
//!
//! assert_eq!(tokenize("Hello, hello world!"), ["hello", "hello", "world"]);
//! assert!(tokenize("?!  ...").is_empty());
//! ```

use memchr::memchr_iter;

use crate::analyzer::normalizer::TextNormalizer;

/// Word tokenizer over normalized text.
///
/// Token order matches left-to-right occurrence and duplicates are preserved.
/// Neither similarity metric depends on order, but callers inspecting a
/// [`SimilarityResult`](textsim_types::SimilarityResult) see the words as
/// written.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    normalizer: TextNormalizer,
}

impl Tokenizer {
    /// Creates a tokenizer that normalizes with `normalizer`.
    #[inline]
    pub const fn new(normalizer: TextNormalizer) -> Self {
        Self { normalizer }
    }

    /// Returns the normalizer used by [`Tokenizer::tokenize`].
    #[inline]
    pub const fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Normalizes `text` and splits it into owned tokens.
    ///
    /// Empty input short-circuits without normalizing. Input that normalizes
    /// to nothing (only whitespace or punctuation) yields an empty vector,
    /// never `[""]`.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let normalized = self.normalizer.normalize(text);
        let mut tokens = Vec::with_capacity(normalized.len() / 4 + 1);
        Self::for_each_token(&normalized, |token, _| tokens.push(token.to_owned()));
        tokens
    }

    /// Tokenizes normalized input and emits `(text, position)`.
    ///
    /// Empty segments are skipped, so stray separators never produce empty
    /// tokens. Position is `u32`; after emitting a token at position
    /// `u32::MAX`, further emissions stop.
    #[inline]
    pub fn for_each_token<'n, F>(normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = normalized.as_bytes();
        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // ASCII space is never a UTF-8 continuation byte, so both
                // ends are char boundaries.
                emit(&normalized[start..i], pos);
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            emit(&normalized[start..], pos);
        }
    }
}

/// Tokenizes `text` with the default normalizer.
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}
