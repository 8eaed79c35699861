//! Term-frequency maps.
//!
//! A [`TermFrequencies`] is both representations the metrics need: its keys
//! are the distinct-token set (Jaccard) and its values the term-frequency
//! vector (cosine). Counts stay integers so that intersections, dot products
//! and magnitudes are exact and independent of hash iteration order.

use core::borrow::Borrow;
use core::hash::Hash;

use rustc_hash::FxHashMap;

/// Token → occurrence count for a single token sequence.
///
/// `K` is `&str` for maps borrowing a caller's tokens, and an owned or shared
/// string (`String`, `Arc<str>`) for maps that outlive them.
#[derive(Debug, Clone)]
pub struct TermFrequencies<K> {
    counts: FxHashMap<K, u32>,
    total: u64,
    squared_magnitude: u64,
}

impl<'a> TermFrequencies<&'a str> {
    /// Counts the tokens of one sequence.
    pub fn from_tokens<S: AsRef<str>>(tokens: &'a [S]) -> Self {
        Self::from_terms(tokens.iter().map(|t| t.as_ref()))
    }
}

impl<K> TermFrequencies<K>
where
    K: Borrow<str> + Hash + Eq,
{
    /// Counts a sequence of owned or shared keys.
    pub fn from_terms<I: IntoIterator<Item = K>>(terms: I) -> Self {
        let terms = terms.into_iter();
        let mut counts: FxHashMap<K, u32> = FxHashMap::default();
        counts.reserve(terms.size_hint().0);

        for term in terms {
            *counts.entry(term).or_insert(0) += 1;
        }

        let (total, squared_magnitude) = counts.values().fold((0u64, 0u64), |(t, sq), &c| {
            let c = u64::from(c);
            (t + c, sq + c * c)
        });

        Self {
            counts,
            total,
            squared_magnitude,
        }
    }

    /// Occurrences of `term`, 0 when absent.
    #[inline]
    pub fn count(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of tokens counted, duplicates included.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns `true` when no token was counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of squared counts: the squared Euclidean magnitude of the vector.
    #[inline]
    pub fn squared_magnitude(&self) -> u64 {
        self.squared_magnitude
    }

    /// Iterates the distinct tokens in unspecified order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(|k| <K as Borrow<str>>::borrow(k))
    }

    /// Number of distinct tokens present in both maps.
    pub fn shared_terms<K2>(&self, other: &TermFrequencies<K2>) -> usize
    where
        K2: Borrow<str> + Hash + Eq,
    {
        if self.distinct() <= other.distinct() {
            self.terms().filter(|t| other.counts.contains_key(*t)).count()
        } else {
            other.terms().filter(|t| self.counts.contains_key(*t)).count()
        }
    }

    /// Dot product of the two frequency vectors over their combined
    /// vocabulary. Terms missing from either side contribute 0, so only the
    /// smaller map needs walking.
    pub fn dot<K2>(&self, other: &TermFrequencies<K2>) -> u64
    where
        K2: Borrow<str> + Hash + Eq,
    {
        if self.distinct() <= other.distinct() {
            self.counts
                .iter()
                .map(|(t, &c)| {
                    let term = <K as Borrow<str>>::borrow(t);
                    u64::from(c) * u64::from(other.count(term))
                })
                .sum()
        } else {
            other.dot(self)
        }
    }
}
