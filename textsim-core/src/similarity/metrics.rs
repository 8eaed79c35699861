//! Scoring functions.

use core::borrow::Borrow;
use core::hash::Hash;

use crate::analyzer::frequency::TermFrequencies;

/// `|A ∩ B| / |A ∪ B|` over distinct tokens. An empty union scores 0.
#[inline]
pub(crate) fn jaccard_from<KA, KB>(a: &TermFrequencies<KA>, b: &TermFrequencies<KB>) -> f64
where
    KA: Borrow<str> + Hash + Eq,
    KB: Borrow<str> + Hash + Eq,
{
    let shared = a.shared_terms(b);
    let union = a.distinct() + b.distinct() - shared;
    if union == 0 {
        return 0.0;
    }
    shared as f64 / union as f64
}

/// `dot / (|A| * |B|)` over term-frequency vectors. A zero magnitude on
/// either side scores 0.
///
/// The magnitude product is taken as `sqrt(|A|² * |B|²)`: both squares are
/// exact integers, so identical vectors divide `n` by exactly `n`.
#[inline]
pub(crate) fn cosine_from<KA, KB>(a: &TermFrequencies<KA>, b: &TermFrequencies<KB>) -> f64
where
    KA: Borrow<str> + Hash + Eq,
    KB: Borrow<str> + Hash + Eq,
{
    let (sq_a, sq_b) = (a.squared_magnitude(), b.squared_magnitude());
    if sq_a == 0 || sq_b == 0 {
        return 0.0;
    }

    let dot = a.dot(b) as f64;
    let magnitudes = (sq_a as f64 * sq_b as f64).sqrt();
    (dot / magnitudes).min(1.0)
}

/// Jaccard similarity of two token sequences.
///
/// Duplicates are ignored. Two empty sequences score 0, not 1.
///
/// ```
/// use textsim_core::jaccard_similarity;
///
/// assert_eq!(jaccard_similarity(&["a", "b"], &["b", "c"]), 1.0 / 3.0);
/// assert_eq!(jaccard_similarity::<&str>(&[], &[]), 0.0);
/// ```
pub fn jaccard_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    jaccard_from(
        &TermFrequencies::from_tokens(a),
        &TermFrequencies::from_tokens(b),
    )
}

/// Cosine similarity of the term-frequency vectors of two token sequences.
///
/// Either sequence being empty scores 0.
pub fn cosine_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    cosine_from(
        &TermFrequencies::from_tokens(a),
        &TermFrequencies::from_tokens(b),
    )
}
