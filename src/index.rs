//! In-memory inverted index over a line-oriented corpus.

use std::collections::BTreeSet;

use ahash::AHashMap;

use crate::analysis::analyze;

/// An inverted index mapping each term to the set of record positions that
/// contain it.
///
/// Records are identified by their zero-based position in the input
/// sequence. Posting sets are sorted, so iteration order is deterministic.
/// The index is built once from a fixed record sequence and is read-only
/// afterwards; queries never mutate it.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    /// Term -> posting set (record positions containing the term).
    postings: AHashMap<String, BTreeSet<usize>>,
    /// Number of records the index was built from.
    doc_count: usize,
}

impl InvertedIndex {
    /// Build an index from an ordered sequence of records.
    ///
    /// Each record is tokenized with [`analyze`] (whitespace split +
    /// lowercase) and its position is added to every resulting term's
    /// posting set. Duplicate tokens within a record contribute a single
    /// membership. An empty sequence or empty records are fine and simply
    /// produce fewer (or no) postings.
    pub fn build<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut postings: AHashMap<String, BTreeSet<usize>> = AHashMap::new();
        let mut doc_count = 0;

        for (position, record) in records.into_iter().enumerate() {
            for term in analyze(record.as_ref()) {
                postings.entry(term).or_default().insert(position);
            }
            doc_count = position + 1;
        }

        InvertedIndex {
            postings,
            doc_count,
        }
    }

    /// Get the posting set for a term, if the term is indexed.
    ///
    /// The term is compared exactly as given; index keys are lowercase.
    pub fn postings(&self, term: &str) -> Option<&BTreeSet<usize>> {
        self.postings.get(term)
    }

    /// Check whether a term is an index key.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// All positions indexed by at least one term (the union of every
    /// posting set). Freshly allocated on each call.
    pub fn universe(&self) -> BTreeSet<usize> {
        self.postings
            .values()
            .flat_map(|positions| positions.iter().copied())
            .collect()
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of records the index was built from, including records that
    /// produced no tokens.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Check if the index holds no postings at all.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Get index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            doc_count: self.doc_count,
            term_count: self.postings.len(),
            posting_count: self.postings.values().map(BTreeSet::len).sum(),
        }
    }
}

/// Statistics about an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of records indexed.
    pub doc_count: usize,

    /// Number of distinct terms.
    pub term_count: usize,

    /// Total number of (term, position) memberships.
    pub posting_count: usize,
}
