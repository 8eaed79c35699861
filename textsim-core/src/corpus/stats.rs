//! Statistics and CorpusStats.

use crate::corpus::types::Corpus;

/// A snapshot of corpus statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorpusStats {
    /// Number of documents in the corpus.
    pub num_documents: usize,
    /// Total number of stored tokens, duplicates included.
    pub total_tokens: u64,
    /// Number of distinct tokens across all documents.
    pub vocabulary_size: usize,
    /// Number of documents with no tokens at all.
    pub empty_documents: usize,
}

impl Corpus {
    /// Returns corpus statistics.
    ///
    /// Walks every stored document; the vocabulary size comes from the
    /// interned term set.
    pub fn stats(&self) -> CorpusStats {
        let mut total_tokens = 0u64;
        let mut empty_documents = 0usize;

        for doc in &self.documents {
            total_tokens += doc.frequencies.total();
            if doc.frequencies.is_empty() {
                empty_documents += 1;
            }
        }

        CorpusStats {
            num_documents: self.documents.len(),
            total_tokens,
            vocabulary_size: self.vocabulary.len(),
            empty_documents,
        }
    }
}

impl CorpusStats {
    /// Average number of tokens per document, 0 for an empty corpus.
    pub fn average_tokens(&self) -> f64 {
        if self.num_documents == 0 {
            0.0
        } else {
            self.total_tokens as f64 / self.num_documents as f64
        }
    }
}

impl core::fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} docs, {} tokens, {} distinct",
            self.num_documents, self.total_tokens, self.vocabulary_size
        )?;

        if self.empty_documents > 0 {
            write!(f, ", {} empty", self.empty_documents)?;
        }

        Ok(())
    }
}
