//! Text similarity engine for plagiarism checking.
//!
//! Two texts are lowercased, stripped down to ASCII alphanumeric words and
//! compared with two independent metrics:
//!
//! - **Jaccard**: overlap of the distinct words
//! - **Cosine**: angle between the word-frequency vectors
//!
//! ```
//! use textsim_core::compute_similarity;
//!
//! let result = compute_similarity("learn code build career", "learn design build brand");
//! assert!((result.jaccard - 2.0 / 6.0).abs() < 1e-12);
//! assert_eq!(result.cosine, 0.5);
//! ```
//!
//! Beyond the pairwise call, [`Corpus`] checks a submission against many
//! stored documents and [`boundary`] implements the JSON contract a request
//! handler exposes.

pub mod analyzer;
pub mod boundary;
pub mod corpus;
pub mod similarity;

pub use analyzer::{normalize, tokenize, NormalizerConfig, TermFrequencies, TextNormalizer, Tokenizer};
pub use boundary::{check_json, BoundaryError, CheckResponse, SimilarityRequest};
pub use corpus::{Corpus, CorpusMetrics, CorpusStats, MAX_DOCUMENT_LENGTH};
pub use similarity::{
    compute_similarity, compute_similarity_opt, cosine_similarity, jaccard_similarity,
    SimilarityEngine,
};

pub use textsim_types::{
    CompareConfig, DocId, DocumentError, MatchResult, Metric, SimilarityResult,
};
