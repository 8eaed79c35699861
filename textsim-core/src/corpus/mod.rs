//! Reference corpus for plagiarism checks.
//!
//! A submission is usually compared against many earlier submissions, not
//! just one. [`Corpus`] tokenizes each reference document once when it is
//! added and keeps its term-frequency map, so a check only has to tokenize
//! the submission and walk the stored maps.
//!
//! Scores are exactly those of [`compute_similarity`](crate::compute_similarity)
//! for the same pair of texts.
//!
//! Threading:
//! - [`Corpus`] reuses internal buffers across calls, so `add` and `check`
//!   take `&mut self`. Hosts that share one wrap it in their own lock.

mod api;
mod check;
mod stats;
mod types;

pub use stats::CorpusStats;
pub use types::{Corpus, CorpusMetrics, MAX_DOCUMENT_LENGTH};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::normalizer::NormalizerConfig;
    use crate::compute_similarity;
    use textsim_types::{CompareConfig, DocId, DocumentError, Metric};

    fn stored(corpus: &Corpus, id: DocId) -> Vec<&str> {
        corpus.get(id).expect("document exists").collect()
    }

    #[test]
    fn basic_add_and_check() {
        let mut corpus = Corpus::new();

        let id1 = corpus.add("the quick brown fox").expect("should add doc");
        let id2 = corpus.add("a lazy dog sleeps").expect("should add doc");
        let id3 = corpus.add("the quick red fox jumps").expect("should add doc");

        assert_eq!(id1, 0);
        assert_eq!(id2, 1);
        assert_eq!(id3, 2);

        let results = corpus.check("The quick brown fox!", 10);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].doc_id, 0);
        assert_eq!(results[0].score, 1.0);
        assert_eq!(results[1].doc_id, 2);
        assert!(results[1].score < 1.0);
    }

    #[test]
    fn scores_match_pairwise_engine() {
        let docs = [
            "learn code build career",
            "learn design build brand",
            "one one one two",
        ];
        let mut corpus = Corpus::new();
        for doc in docs {
            corpus.add(doc).expect("should add doc");
        }

        let submission = "Learn to build, learn to code.";
        for m in corpus.check(submission, 10) {
            let expected = compute_similarity(submission, docs[m.doc_id as usize]);
            assert_eq!(m.jaccard, expected.jaccard);
            assert_eq!(m.cosine, expected.cosine);
            assert_eq!(m.score, expected.cosine);
        }
    }

    #[test]
    fn results_ordered_by_score_then_doc_id() {
        let mut corpus = Corpus::new();
        corpus.add("alpha beta").unwrap();
        corpus.add("alpha beta gamma delta").unwrap();
        corpus.add("alpha beta").unwrap();
        corpus.add("unrelated words").unwrap();

        let results = corpus.check("alpha beta", 10);
        let ids: Vec<_> = results.iter().map(|m| m.doc_id).collect();
        assert_eq!(ids, [0, 2, 1]);
        for w in results.windows(2) {
            assert!(w[0].score >= w[1].score);
        }
    }

    #[test]
    fn limit_keeps_best() {
        let mut corpus = Corpus::new();
        for i in 0..200 {
            corpus
                .add(&format!("shared words plus filler {}", "x ".repeat(i % 7)))
                .unwrap();
        }
        corpus.add("shared words").unwrap();

        let results = corpus.check("shared words", 5);
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].doc_id, 200);
        assert_eq!(results[0].score, 1.0);
    }

    #[test]
    fn zero_scores_never_reported() {
        let mut corpus = Corpus::new();
        corpus.add("alpha beta gamma").unwrap();
        assert!(corpus.check("delta epsilon zeta", 10).is_empty());
    }

    #[test]
    fn empty_submission_and_empty_corpus() {
        let mut corpus = Corpus::new();
        assert!(corpus.check("anything", 10).is_empty());

        corpus.add("hello world").unwrap();
        assert!(corpus.check("", 10).is_empty());
        assert!(corpus.check("?!", 10).is_empty());
        assert!(corpus.check("hello", 0).is_empty());
    }

    #[test]
    fn empty_documents_are_stored_but_never_match() {
        let mut corpus = Corpus::new();
        let id = corpus.add("...").unwrap();
        assert_eq!(corpus.get(id).map(|t| t.len()), Some(0));
        assert!(corpus.check("...", 10).is_empty());
        assert_eq!(corpus.stats().empty_documents, 1);
    }

    #[test]
    fn threshold_filters() {
        let mut corpus = Corpus::with_config(CompareConfig {
            metric: Metric::Jaccard,
            threshold: 0.5,
        });
        corpus.add("a b c d").unwrap();
        corpus.add("a b x y").unwrap();
        corpus.add("a z w v").unwrap();

        // jaccard: 1.0, 2/6, 1/7
        let results = corpus.check("a b c d", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].doc_id, 0);

        corpus.set_config(CompareConfig {
            metric: Metric::Jaccard,
            threshold: 0.3,
        });
        assert_eq!(corpus.check("a b c d", 10).len(), 2);
    }

    #[test]
    fn metric_selects_ranking() {
        let mut corpus = Corpus::with_config(CompareConfig {
            metric: Metric::Jaccard,
            threshold: 0.0,
        });
        corpus.add("one two three").unwrap();
        let m = corpus.best_match("one one one two").unwrap();
        assert_eq!(m.score, m.jaccard);

        corpus.set_config(CompareConfig::default());
        let m = corpus.best_match("one one one two").unwrap();
        assert_eq!(m.score, m.cosine);
    }

    #[test]
    fn normalizer_applies_to_both_sides() {
        let mut corpus =
            Corpus::with_normalizer(CompareConfig::default(), NormalizerConfig {
                fold_diacritics: true,
            });
        corpus.add("Crème brûlée").unwrap();
        let m = corpus.best_match("creme brulee").unwrap();
        assert_eq!(m.score, 1.0);
        assert_eq!(stored(&corpus, 0), ["creme", "brulee"]);
    }

    #[test]
    fn add_batch_works() {
        let mut corpus = Corpus::new();
        let docs = ["hello world", "rust programming", "plagiarism check"];
        let (added, failed, err) = corpus.add_batch(&docs);
        assert_eq!(added, 3);
        assert_eq!(failed, 0);
        assert!(err.is_none());
        assert_eq!(corpus.len(), 3);

        assert!(!corpus.check("hello", 10).is_empty());
    }

    #[test]
    fn rejects_oversized_documents() {
        let mut corpus = Corpus::new();
        let oversized = "x".repeat(MAX_DOCUMENT_LENGTH + 1);
        let result = corpus.add(&oversized);
        assert!(matches!(result, Err(DocumentError::TooLarge { .. })));
        assert!(corpus.is_empty());

        let exact_size = "x".repeat(MAX_DOCUMENT_LENGTH);
        assert!(corpus.add(&exact_size).is_ok());
    }

    #[test]
    fn add_batch_reports_failures() {
        let mut corpus = Corpus::new();
        let oversized = "x ".repeat(MAX_DOCUMENT_LENGTH);
        let docs = ["ok", oversized.as_str(), "fine"];
        let (added, failed, err) = corpus.add_batch(&docs);
        assert_eq!(added, 2);
        assert_eq!(failed, 1);
        assert!(matches!(err, Some(DocumentError::TooLarge { .. })));
        assert_eq!(stored(&corpus, 1), ["fine"]);
    }

    #[test]
    fn get_returns_tokens() {
        let mut corpus = Corpus::new();
        let id = corpus.add("Hello, Hello World").unwrap();
        assert_eq!(stored(&corpus, id), ["hello", "hello", "world"]);
        assert_eq!(corpus.get(id).map(|t| t.len()), Some(3));
        assert!(corpus.get(99).is_none());
    }

    #[test]
    fn terms_are_shared_across_documents() {
        let mut corpus = Corpus::new();
        corpus.add("rust code rust").unwrap();
        corpus.add("rust book").unwrap();

        assert_eq!(corpus.vocabulary.len(), 3);
        let first = &corpus.documents[0].tokens;
        let second = &corpus.documents[1].tokens;
        assert!(std::sync::Arc::ptr_eq(&first[0], &first[2]));
        assert!(std::sync::Arc::ptr_eq(&first[0], &second[0]));
    }

    #[test]
    fn full_corpus_rejects_documents() {
        let mut corpus = Corpus::new();
        corpus.capacity = 2;

        assert_eq!(corpus.add("one").unwrap(), 0);
        assert_eq!(corpus.add("two").unwrap(), 1);
        let err = corpus.add("three").unwrap_err();
        assert!(matches!(err, DocumentError::CorpusFull { capacity: 2 }));
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.metrics().documents_added, 2);

        let (added, failed, last) = corpus.add_batch(&["four", "five"]);
        assert_eq!((added, failed), (0, 2));
        assert!(matches!(last, Some(DocumentError::CorpusFull { .. })));

        corpus.clear();
        assert_eq!(corpus.add("again").unwrap(), 0);
    }

    #[test]
    fn default_capacity_covers_doc_id_space() {
        assert_eq!(Corpus::new().capacity, DocId::MAX as usize + 1);
    }

    #[test]
    fn stats_summarize_corpus() {
        let mut corpus = Corpus::new();
        corpus.add("a b a").unwrap();
        corpus.add("b c").unwrap();

        let stats = corpus.stats();
        assert_eq!(stats.num_documents, 2);
        assert_eq!(stats.total_tokens, 5);
        assert_eq!(stats.vocabulary_size, 3);
        assert_eq!(stats.empty_documents, 0);
        assert_eq!(stats.average_tokens(), 2.5);
        assert_eq!(stats.to_string(), "2 docs, 5 tokens, 3 distinct");
    }

    #[test]
    fn metrics_tracks_operations() {
        let mut corpus = Corpus::new();

        let metrics = corpus.metrics();
        assert_eq!(metrics.documents_added, 0);
        assert_eq!(metrics.checks_executed, 0);
        assert_eq!(metrics.current_doc_count, 0);

        corpus.add("doc one").unwrap();
        corpus.add("doc two").unwrap();
        corpus.add("doc three").unwrap();

        let metrics = corpus.metrics();
        assert_eq!(metrics.documents_added, 3);
        assert_eq!(metrics.current_doc_count, 3);

        corpus.check("doc", 10);
        corpus.check("one", 10);
        corpus.check("two", 10);

        let metrics = corpus.metrics();
        assert_eq!(metrics.checks_executed, 3);

        corpus.clear();
        assert!(corpus.vocabulary.is_empty());
        let metrics = corpus.metrics();
        assert_eq!(metrics.documents_added, 0);
        assert_eq!(metrics.checks_executed, 0);
        assert_eq!(metrics.current_doc_count, 0);
        assert!(corpus.stats().num_documents == 0);
    }
}
