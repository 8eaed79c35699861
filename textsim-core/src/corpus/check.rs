//! Submission checking.

use core::cmp::Ordering;

use textsim_types::{DocId, MatchResult};
use tracing::debug;

use crate::analyzer::frequency::TermFrequencies;
use crate::analyzer::tokenizer::Tokenizer;
use crate::corpus::types::Corpus;
use crate::similarity::{cosine_from, jaccard_from};

/// Best match first; equal scores fall back to the lower doc id.
#[inline(always)]
fn rank_order(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.doc_id.cmp(&b.doc_id))
}

impl Corpus {
    /// Scores `submission` against every stored document.
    ///
    /// Returns at most `limit` matches, best first. A document is reported
    /// when its score under the configured metric is non-zero and at least
    /// the configured threshold.
    ///
    /// Returns owned results - no lifetime coupling with the corpus.
    pub fn check(&mut self, submission: &str, limit: usize) -> Vec<MatchResult> {
        self.checks_executed += 1;

        if self.is_empty() || limit == 0 {
            return Vec::new();
        }

        self.normalizer
            .normalize_into(submission, &mut self.query_buf);

        let mut tokens: Vec<&str> = Vec::new();
        Tokenizer::for_each_token(&self.query_buf, |token, _| tokens.push(token));
        if tokens.is_empty() {
            return Vec::new();
        }

        let query = TermFrequencies::from_tokens(&tokens);
        let metric = self.config.metric;
        let threshold = self.config.threshold;

        self.results.clear();
        for (idx, doc) in self.documents.iter().enumerate() {
            let jaccard = jaccard_from(&query, &doc.frequencies);
            let cosine = cosine_from(&query, &doc.frequencies);
            let candidate = MatchResult::new(idx as DocId, metric, jaccard, cosine);

            if candidate.score > 0.0 && candidate.score >= threshold {
                self.results.push(candidate);
            }
        }

        debug!(
            tokens = tokens.len(),
            documents = self.documents.len(),
            matches = self.results.len(),
            %metric,
            "checked submission"
        );

        if self.results.len() > limit {
            self.results.select_nth_unstable_by(limit, rank_order);
            self.results.truncate(limit);
        }
        self.results.sort_unstable_by(rank_order);

        self.results.to_vec()
    }

    /// Returns the single best match, if any document clears the threshold.
    #[inline]
    pub fn best_match(&mut self, submission: &str) -> Option<MatchResult> {
        self.check(submission, 1).into_iter().next()
    }
}
