//! Similarity engine.
//!
//! Both metrics run over the token sequences produced by the
//! [`analyzer`](crate::analyzer) pipeline:
//!
//! - **Jaccard**: overlap of the distinct-token sets
//! - **Cosine**: angle between term-frequency vectors
//!
//! Every score is finite and within `[0, 1]`. Degenerate input (nothing left
//! after normalization, on either side) scores 0 instead of dividing by zero;
//! in particular two empty documents are *not* considered identical.
//!
//! Threading:
//! - Everything here is pure and allocation-local. No locks, no caches.

mod engine;
mod metrics;

pub use engine::{compute_similarity, compute_similarity_opt, SimilarityEngine};
pub use metrics::{cosine_similarity, jaccard_similarity};

pub(crate) use metrics::{cosine_from, jaccard_from};
