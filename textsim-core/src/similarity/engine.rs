//! Text-to-text comparison.

use textsim_types::SimilarityResult;
use tracing::trace;

use crate::analyzer::frequency::TermFrequencies;
use crate::analyzer::normalizer::{NormalizerConfig, TextNormalizer};
use crate::analyzer::tokenizer::Tokenizer;
use crate::similarity::metrics::{cosine_from, jaccard_from};

/// Compares raw texts with a fixed normalization setup.
///
/// Holds no state between calls; a single engine can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityEngine {
    tokenizer: Tokenizer,
}

impl SimilarityEngine {
    /// Creates an engine normalizing with `config`.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(TextNormalizer::new(config)),
        }
    }

    /// Returns the tokenizer both texts are split with.
    #[inline]
    pub const fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenizes both texts independently and scores them.
    ///
    /// Never fails: text with no alphanumerics simply has no tokens, and any
    /// comparison involving an empty side scores 0 on both metrics.
    pub fn compare(&self, text_a: &str, text_b: &str) -> SimilarityResult {
        let tokens_a = self.tokenizer.tokenize(text_a);
        let tokens_b = self.tokenizer.tokenize(text_b);

        let (jaccard, cosine) = {
            let freq_a = TermFrequencies::from_tokens(&tokens_a);
            let freq_b = TermFrequencies::from_tokens(&tokens_b);
            (jaccard_from(&freq_a, &freq_b), cosine_from(&freq_a, &freq_b))
        };

        trace!(
            length_a = tokens_a.len(),
            length_b = tokens_b.len(),
            jaccard,
            cosine,
            "compared texts"
        );

        SimilarityResult {
            jaccard,
            cosine,
            length_a: tokens_a.len(),
            length_b: tokens_b.len(),
            tokens_a,
            tokens_b,
        }
    }
}

/// Compares two raw texts with the default normalizer.
///
/// ```
/// use textsim_core::compute_similarity;
///
/// let result = compute_similarity("Hello, world!", "hello world");
/// assert_eq!(result.jaccard, 1.0);
/// assert_eq!(result.cosine, 1.0);
/// assert_eq!(result.tokens_a, ["hello", "world"]);
/// ```
#[inline]
pub fn compute_similarity(text_a: &str, text_b: &str) -> SimilarityResult {
    SimilarityEngine::default().compare(text_a, text_b)
}

/// Like [`compute_similarity`], treating an absent text as empty.
#[inline]
pub fn compute_similarity_opt(text_a: Option<&str>, text_b: Option<&str>) -> SimilarityResult {
    compute_similarity(text_a.unwrap_or_default(), text_b.unwrap_or_default())
}
