//! Core types for the textsim similarity engine.
//!
//! This crate holds the plain data records shared between the engine and
//! whatever hosts it (a request handler, a batch job, the bench binary).
//! Keeping them separate means:
//!
//! - **No engine dependency for consumers**: a host that only forwards results
//!   can depend on the types alone
//! - **Stable wire shape**: the serde field names live next to the fields
//! - **Clean boundaries**: no circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a document stored in a corpus.
///
/// Assigned sequentially starting at 0.
pub type DocId = u32;

/// Outcome of comparing two texts.
///
/// Both scores are finite and lie in `[0, 1]`. Degenerate inputs (nothing
/// left after normalization) score `0` rather than `NaN`.
///
/// The token sequences are kept in their original order for inspection only;
/// neither score depends on order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    /// Distinct-token overlap: `|A ∩ B| / |A ∪ B|`.
    pub jaccard: f64,
    /// Cosine of the angle between the two term-frequency vectors.
    pub cosine: f64,
    /// Tokens of the first text, in order of occurrence.
    pub tokens_a: Vec<String>,
    /// Tokens of the second text, in order of occurrence.
    pub tokens_b: Vec<String>,
    /// Number of tokens in the first text (duplicates included).
    pub length_a: usize,
    /// Number of tokens in the second text (duplicates included).
    pub length_b: usize,
}

impl SimilarityResult {
    /// Returns the score selected by `metric`.
    #[inline]
    pub fn score(&self, metric: Metric) -> f64 {
        metric.select(self.jaccard, self.cosine)
    }
}

impl fmt::Display for SimilarityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "jaccard={:.3} cosine={:.3} ({} vs {} tokens)",
            self.jaccard, self.cosine, self.length_a, self.length_b
        )
    }
}

/// Similarity metric used to rank corpus matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Set overlap of distinct tokens. Ignores repetition.
    Jaccard,
    /// Term-frequency vector angle. Rewards matching repetition.
    #[default]
    Cosine,
}

impl Metric {
    /// Picks this metric's value out of a `(jaccard, cosine)` pair.
    #[inline(always)]
    pub const fn select(self, jaccard: f64, cosine: f64) -> f64 {
        match self {
            Metric::Jaccard => jaccard,
            Metric::Cosine => cosine,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Jaccard => f.write_str("jaccard"),
            Metric::Cosine => f.write_str("cosine"),
        }
    }
}

/// A stored document that resembles a checked submission.
///
/// Results are ordered by `score` (the configured metric), then by `doc_id`
/// for deterministic ordering when scores tie.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Document the submission was compared against.
    pub doc_id: DocId,
    /// Ranking score: the value of the configured [`Metric`].
    pub score: f64,
    /// Jaccard similarity against this document.
    pub jaccard: f64,
    /// Cosine similarity against this document.
    pub cosine: f64,
}

impl MatchResult {
    /// Creates a match, taking the ranking score from `metric`.
    #[inline]
    pub fn new(doc_id: DocId, metric: Metric, jaccard: f64, cosine: f64) -> Self {
        Self {
            doc_id,
            score: metric.select(jaccard, cosine),
            jaccard,
            cosine,
        }
    }
}

impl PartialEq for MatchResult {
    fn eq(&self, other: &Self) -> bool {
        self.doc_id == other.doc_id && self.score == other.score
    }
}

impl Eq for MatchResult {}

impl PartialOrd for MatchResult {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MatchResult {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        match self.score.total_cmp(&other.score) {
            core::cmp::Ordering::Equal => self.doc_id.cmp(&other.doc_id),
            ord => ord,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "doc={} score={:.3} (jaccard={:.3} cosine={:.3})",
            self.doc_id, self.score, self.jaccard, self.cosine
        )
    }
}

/// Errors that can occur when adding a document to a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// Document exceeds the maximum allowed size.
    #[error("document too large: {size} bytes (max: {max_size} bytes)")]
    TooLarge {
        /// The actual size of the document in bytes.
        size: usize,
        /// The maximum allowed size in bytes.
        max_size: usize,
    },
    /// The corpus has handed out every available [`DocId`].
    #[error("corpus is full: {capacity} documents")]
    CorpusFull {
        /// Number of documents the corpus can hold.
        capacity: usize,
    },
}

/// Corpus check configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Metric used to rank and filter matches.
    pub metric: Metric,
    /// Minimum score (0.0-1.0) a stored document needs to be reported.
    /// Documents scoring exactly 0 are never reported.
    pub threshold: f64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            metric: Metric::Cosine,
            threshold: 0.0,
        }
    }
}

impl CompareConfig {
    /// Reports only close matches on distinct-token overlap.
    pub const fn strict() -> Self {
        Self {
            metric: Metric::Jaccard,
            threshold: 0.6,
        }
    }

    /// Reports anything with a noticeable term-frequency overlap.
    pub const fn lenient() -> Self {
        Self {
            metric: Metric::Cosine,
            threshold: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_with_camel_case_fields() {
        let result = SimilarityResult {
            jaccard: 1.0,
            cosine: 1.0,
            tokens_a: vec!["hello".into()],
            tokens_b: vec!["hello".into()],
            length_a: 1,
            length_b: 1,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["tokensA"][0], "hello");
        assert_eq!(json["tokensB"][0], "hello");
        assert_eq!(json["lengthA"], 1);
        assert_eq!(json["lengthB"], 1);
        assert_eq!(json["jaccard"], 1.0);
    }

    #[test]
    fn score_selects_metric() {
        let result = SimilarityResult {
            jaccard: 0.25,
            cosine: 0.5,
            ..Default::default()
        };
        assert_eq!(result.score(Metric::Jaccard), 0.25);
        assert_eq!(result.score(Metric::Cosine), 0.5);
    }

    #[test]
    fn match_ordering_score_then_doc_id() {
        let a = MatchResult::new(1, Metric::Cosine, 0.1, 0.9);
        let b = MatchResult::new(0, Metric::Cosine, 0.1, 0.5);
        let c = MatchResult::new(2, Metric::Cosine, 0.1, 0.5);

        assert!(a > b);
        assert!(c > b);

        let mut v = vec![a, b, c];
        v.sort();
        assert_eq!(v.iter().map(|m| m.doc_id).collect::<Vec<_>>(), [0, 2, 1]);
    }

    #[test]
    fn match_takes_score_from_metric() {
        let m = MatchResult::new(3, Metric::Jaccard, 0.4, 0.7);
        assert_eq!(m.score, 0.4);
        assert_eq!(m.to_string(), "doc=3 score=0.400 (jaccard=0.400 cosine=0.700)");
    }

    #[test]
    fn document_error_messages() {
        let err = DocumentError::TooLarge {
            size: 10,
            max_size: 5,
        };
        assert_eq!(err.to_string(), "document too large: 10 bytes (max: 5 bytes)");

        let err = DocumentError::CorpusFull { capacity: 7 };
        assert_eq!(err.to_string(), "corpus is full: 7 documents");
    }

    #[test]
    fn config_presets() {
        assert_eq!(CompareConfig::default().metric, Metric::Cosine);
        assert_eq!(CompareConfig::default().threshold, 0.0);
        assert_eq!(CompareConfig::strict().metric, Metric::Jaccard);
        assert!(CompareConfig::strict().threshold > CompareConfig::lenient().threshold);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: CompareConfig = serde_json::from_str(r#"{"metric":"jaccard"}"#).unwrap();
        assert_eq!(cfg.metric, Metric::Jaccard);
        assert_eq!(cfg.threshold, 0.0);
    }
}
