//! Text analysis for Xyston.
//!
//! The analysis pipeline is deliberately small: records are split on
//! whitespace and lowercased before indexing. Query strings go through the
//! same whitespace split, but are NOT lowercased here — the caller decides
//! whether to normalize case before resolving, so the resolver compares
//! terms exactly as given.

/// Tokenize a record for indexing: split on whitespace, lowercase each token.
///
/// Empty and whitespace-only input yields no tokens.
///
/// # Examples
///
/// ```
/// use xyston::analysis::analyze;
///
/// let tokens = analyze("The  Cat\tsat");
/// assert_eq!(tokens, vec!["the", "cat", "sat"]);
/// ```
pub fn analyze(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.to_lowercase())
        .collect()
}

/// Split a query string into terms without changing case.
///
/// Indexing and querying must agree on tokenization, so this uses the same
/// whitespace split as [`analyze`].
pub fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_owned).collect()
}
