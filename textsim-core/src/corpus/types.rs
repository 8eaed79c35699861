//! Corpus types and constants.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use textsim_types::{CompareConfig, DocId, MatchResult};

use crate::analyzer::frequency::TermFrequencies;
use crate::analyzer::normalizer::{NormalizerConfig, TextNormalizer};

/// Maximum stored document length in bytes (1 MiB).
pub const MAX_DOCUMENT_LENGTH: usize = 1 << 20;

/// One document per `DocId` value.
pub(crate) const MAX_DOCUMENTS: usize = match (DocId::MAX as usize).checked_add(1) {
    Some(n) => n,
    None => usize::MAX,
};

/// A stored document, tokenized once at insertion.
///
/// Both the token sequence and the frequency keys point into the corpus
/// vocabulary, so each distinct term's text is held once per corpus.
#[derive(Debug, Clone)]
pub(crate) struct DocumentProfile {
    pub tokens: Vec<Arc<str>>,
    pub frequencies: TermFrequencies<Arc<str>>,
}

/// A set of reference documents that submissions are checked against.
pub struct Corpus {
    pub(crate) documents: Vec<DocumentProfile>,
    /// Interned terms shared by every stored document
    pub(crate) vocabulary: FxHashSet<Arc<str>>,
    pub(crate) normalizer: TextNormalizer,
    pub(crate) config: CompareConfig,
    /// Documents accepted before `add` reports the corpus full
    pub(crate) capacity: usize,
    pub(crate) results: SmallVec<[MatchResult; 64]>,
    pub(crate) norm_buf: String,
    /// Reusable buffer for submission normalization
    pub(crate) query_buf: String,
    /// Total number of checks executed
    pub(crate) checks_executed: u64,
    /// Total number of documents added
    pub(crate) documents_added: u64,
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new()
    }
}

impl Corpus {
    /// Creates a new, empty corpus.
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            vocabulary: FxHashSet::default(),
            normalizer: TextNormalizer::default(),
            config: CompareConfig::default(),
            capacity: MAX_DOCUMENTS,
            results: SmallVec::new(),
            norm_buf: String::with_capacity(256),
            query_buf: String::with_capacity(256),
            checks_executed: 0,
            documents_added: 0,
        }
    }

    /// Creates a corpus with a custom check configuration.
    pub fn with_config(config: CompareConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Creates a corpus with custom check and normalization configuration.
    ///
    /// Stored documents and submissions are normalized the same way, so the
    /// normalizer is fixed for the lifetime of the corpus.
    pub fn with_normalizer(config: CompareConfig, normalizer: NormalizerConfig) -> Self {
        Self {
            config,
            normalizer: TextNormalizer::new(normalizer),
            ..Self::new()
        }
    }

    /// Returns the check configuration.
    #[inline]
    pub fn config(&self) -> CompareConfig {
        self.config
    }

    /// Replaces the check configuration. Stored documents are unaffected.
    #[inline]
    pub fn set_config(&mut self, config: CompareConfig) {
        self.config = config;
    }

    /// Returns the number of documents in the corpus.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if the corpus contains no documents.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Removes all documents and resets the counters.
    pub fn clear(&mut self) {
        self.documents.clear();
        self.vocabulary.clear();
        self.results.clear();
        self.checks_executed = 0;
        self.documents_added = 0;
    }

    /// Returns basic metrics about the corpus's operation.
    #[inline(always)]
    #[must_use]
    pub fn metrics(&self) -> CorpusMetrics {
        CorpusMetrics {
            documents_added: self.documents_added,
            checks_executed: self.checks_executed,
            current_doc_count: self.documents.len() as u64,
        }
    }
}

/// Basic operational metrics for a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusMetrics {
    /// Total number of documents added since creation or the last clear.
    pub documents_added: u64,
    /// Total number of checks executed since creation or the last clear.
    pub checks_executed: u64,
    /// Current number of documents in the corpus.
    pub current_doc_count: u64,
}
