//! Set-based membership queries over an [`InvertedIndex`].
//!
//! A query string is split on whitespace into terms, and one of three
//! strategies combines the posting sets of those terms:
//!
//! - [`SearchStrategy::Any`] — union of the terms' posting sets.
//! - [`SearchStrategy::All`] — intersection of the terms' posting sets.
//! - [`SearchStrategy::None`] — every indexed position not covered by any
//!   query term.
//!
//! Each strategy is a pure function of (query, index): no state is retained
//! across calls and result sets are freshly allocated, so concurrent
//! read-only queries against a shared index are safe. Terms are compared
//! exactly as given; index keys are lowercase, so callers normally
//! lowercase the raw query first (the CLI driver does).

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::query_terms;
use crate::error::{Result, XystonError};
use crate::index::InvertedIndex;

/// The set-combination rule applied to a query's terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Match records containing at least one query term.
    Any,
    /// Match records containing every query term.
    All,
    /// Match records containing none of the query terms.
    None,
}

impl SearchStrategy {
    /// All strategies, in selection-name order.
    pub const ALL_STRATEGIES: [SearchStrategy; 3] =
        [SearchStrategy::Any, SearchStrategy::All, SearchStrategy::None];

    /// The selection name for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::Any => "any",
            SearchStrategy::All => "all",
            SearchStrategy::None => "none",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = XystonError;

    /// Parse a strategy selection name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "any" => Ok(SearchStrategy::Any),
            "all" => Ok(SearchStrategy::All),
            "none" => Ok(SearchStrategy::None),
            _ => Err(XystonError::query(format!(
                "Unknown search strategy '{s}' (expected any, all or none)"
            ))),
        }
    }
}

/// Resolve a query against an index with the given strategy.
///
/// Returns the sorted set of matching record positions. Query terms absent
/// from the index are never an error: they contribute nothing under `Any`
/// and `All` force-empties, and they remove nothing under `None`.
pub fn resolve(strategy: SearchStrategy, query: &str, index: &InvertedIndex) -> BTreeSet<usize> {
    let terms = query_terms(query);
    match strategy {
        SearchStrategy::Any => search_any(&terms, index),
        SearchStrategy::All => search_all(&terms, index),
        SearchStrategy::None => search_none(&terms, index),
    }
}

/// Union of the posting sets of all query terms present in the index.
///
/// An empty query matches nothing.
fn search_any(terms: &[String], index: &InvertedIndex) -> BTreeSet<usize> {
    let mut positions = BTreeSet::new();
    for term in terms {
        if let Some(posting) = index.postings(term) {
            positions.extend(posting.iter().copied());
        }
    }
    positions
}

/// Intersection of the posting sets of all query terms.
///
/// Seeds with the first term's postings, then narrows by each remaining
/// term. Any term absent from the index forces an empty result, even if the
/// other terms alone would match broadly. An empty query matches nothing.
fn search_all(terms: &[String], index: &InvertedIndex) -> BTreeSet<usize> {
    let Some(first) = terms.first() else {
        return BTreeSet::new();
    };
    let Some(seed) = index.postings(first) else {
        return BTreeSet::new();
    };

    let mut positions = seed.clone();
    for term in &terms[1..] {
        let Some(posting) = index.postings(term) else {
            return BTreeSet::new();
        };
        positions.retain(|position| posting.contains(position));
        if positions.is_empty() {
            break;
        }
    }
    positions
}

/// Every indexed position minus the posting set of each query term that is
/// an index key.
///
/// An empty query matches the full universe of indexed positions.
fn search_none(terms: &[String], index: &InvertedIndex) -> BTreeSet<usize> {
    let mut positions = index.universe();
    for term in terms {
        if let Some(posting) = index.postings(term) {
            for position in posting {
                positions.remove(position);
            }
        }
    }
    positions
}

/// A convenience binding holding the currently selected strategy.
///
/// The driver selects a strategy by name before each search; a rejected
/// selection leaves the previous strategy untouched so the driver can skip
/// that search cycle and try again.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    strategy: Option<SearchStrategy>,
}

impl Searcher {
    /// Create a searcher with no strategy selected.
    pub fn new() -> Self {
        Searcher { strategy: None }
    }

    /// Create a searcher with an initial strategy.
    pub fn with_strategy(strategy: SearchStrategy) -> Self {
        Searcher {
            strategy: Some(strategy),
        }
    }

    /// Select a strategy by name ("any" | "all" | "none", case-insensitive).
    ///
    /// On an unrecognized name the current selection is left unchanged and a
    /// query error is returned.
    pub fn select(&mut self, name: &str) -> Result<SearchStrategy> {
        let strategy = name.parse::<SearchStrategy>()?;
        self.strategy = Some(strategy);
        Ok(strategy)
    }

    /// The currently selected strategy, if any.
    pub fn strategy(&self) -> Option<SearchStrategy> {
        self.strategy
    }

    /// Resolve a query with the currently selected strategy.
    ///
    /// Returns a query error if no strategy has ever been selected.
    pub fn search(&self, query: &str, index: &InvertedIndex) -> Result<BTreeSet<usize>> {
        let strategy = self
            .strategy
            .ok_or_else(|| XystonError::query("No search strategy selected"))?;
        Ok(resolve(strategy, query, index))
    }
}
