//! Public API for adding and retrieving documents.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use textsim_types::{DocId, DocumentError};
use tracing::{debug, warn};

use crate::analyzer::frequency::TermFrequencies;
use crate::analyzer::tokenizer::Tokenizer;
use crate::corpus::types::{Corpus, DocumentProfile, MAX_DOCUMENT_LENGTH};

impl Corpus {
    /// Adds a reference document to the corpus.
    ///
    /// Documents with no alphanumeric content are accepted; they never match
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::TooLarge` if the document exceeds 1 MiB.
    /// Returns `DocumentError::CorpusFull` once every `DocId` is in use.
    pub fn add(&mut self, content: &str) -> Result<DocId, DocumentError> {
        if content.len() > MAX_DOCUMENT_LENGTH {
            warn!(
                size = content.len(),
                max_size = MAX_DOCUMENT_LENGTH,
                "rejected oversized document"
            );
            return Err(DocumentError::TooLarge {
                size: content.len(),
                max_size: MAX_DOCUMENT_LENGTH,
            });
        }

        if self.documents.len() >= self.capacity {
            warn!(capacity = self.capacity, "rejected document, corpus full");
            return Err(DocumentError::CorpusFull {
                capacity: self.capacity,
            });
        }
        let doc_id = self.documents.len() as DocId;

        self.normalizer.normalize_into(content, &mut self.norm_buf);

        let vocabulary = &mut self.vocabulary;
        let mut tokens = Vec::new();
        Tokenizer::for_each_token(&self.norm_buf, |token, _| {
            tokens.push(intern(vocabulary, token));
        });
        let frequencies = TermFrequencies::from_terms(tokens.iter().cloned());

        debug!(
            doc_id,
            tokens = tokens.len(),
            distinct = frequencies.distinct(),
            "added document"
        );

        self.documents.push(DocumentProfile {
            tokens,
            frequencies,
        });
        self.documents_added += 1;

        Ok(doc_id)
    }

    /// Adds multiple documents.
    ///
    /// Returns a tuple of (success_count, error_count) and the last error encountered.
    pub fn add_batch(&mut self, contents: &[&str]) -> (usize, usize, Option<DocumentError>) {
        let mut added = 0;
        let mut failed = 0;
        let mut last_error = None;

        for content in contents {
            match self.add(content) {
                Ok(_) => added += 1,
                Err(e) => {
                    failed += 1;
                    last_error = Some(e);
                }
            }
        }
        (added, failed, last_error)
    }

    /// Retrieves the tokens of a stored document, in document order.
    #[inline]
    pub fn get(&self, doc_id: DocId) -> Option<impl ExactSizeIterator<Item = &str> + '_> {
        self.documents
            .get(doc_id as usize)
            .map(|doc| doc.tokens.iter().map(|t| &**t))
    }
}

/// Returns the shared copy of `term`, adding it on first sight.
fn intern(vocabulary: &mut FxHashSet<Arc<str>>, term: &str) -> Arc<str> {
    if let Some(existing) = vocabulary.get(term) {
        return Arc::clone(existing);
    }
    let term: Arc<str> = Arc::from(term);
    vocabulary.insert(Arc::clone(&term));
    term
}
