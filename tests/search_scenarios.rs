//! End-to-end scenarios for index building and the three search strategies.

use std::collections::BTreeSet;
use std::io::Write;

use tempfile::NamedTempFile;
use xyston::cli::commands::load_corpus;
use xyston::error::Result;
use xyston::index::InvertedIndex;
use xyston::query::{SearchStrategy, Searcher, resolve};

fn sample_records() -> Vec<String> {
    vec![
        "the cat sat".to_string(),
        "the dog ran".to_string(),
        "cat and dog".to_string(),
    ]
}

#[test]
fn test_single_term_any() {
    let index = InvertedIndex::build(sample_records());

    let hits = resolve(SearchStrategy::Any, "cat", &index);

    assert_eq!(hits, BTreeSet::from([0, 2]));
}

#[test]
fn test_multi_term_all() {
    let index = InvertedIndex::build(sample_records());

    let hits = resolve(SearchStrategy::All, "the cat", &index);

    assert_eq!(hits, BTreeSet::from([0]));
}

#[test]
fn test_single_term_none() {
    let index = InvertedIndex::build(sample_records());

    let hits = resolve(SearchStrategy::None, "cat", &index);

    assert_eq!(hits, BTreeSet::from([1]));
}

#[test]
fn test_absent_term_under_every_strategy() {
    let index = InvertedIndex::build(sample_records());

    assert!(resolve(SearchStrategy::Any, "zzz", &index).is_empty());
    assert!(resolve(SearchStrategy::All, "zzz", &index).is_empty());
    assert_eq!(
        resolve(SearchStrategy::None, "zzz", &index),
        BTreeSet::from([0, 1, 2])
    );
}

#[test]
fn test_empty_corpus_under_every_strategy() {
    let index = InvertedIndex::build(Vec::<String>::new());

    assert!(index.is_empty());
    for strategy in SearchStrategy::ALL_STRATEGIES {
        assert!(resolve(strategy, "cat", &index).is_empty());
    }
}

#[test]
fn test_index_membership_invariant() {
    let records = sample_records();
    let index = InvertedIndex::build(&records);

    for (position, record) in records.iter().enumerate() {
        for token in record.split_whitespace() {
            let term = token.to_lowercase();
            let postings = index
                .postings(&term)
                .unwrap_or_else(|| panic!("term '{term}' missing from index"));
            assert!(postings.contains(&position));
        }
    }

    // And the converse: every posting points at a record containing the term.
    let universe = index.universe();
    for position in &universe {
        assert!(*position < records.len());
    }
}

#[test]
fn test_none_and_any_partition_the_universe() {
    let index = InvertedIndex::build(sample_records());
    let universe = index.universe();

    for query in ["cat", "the dog", "cat dog ran", "zzz", ""] {
        let any = resolve(SearchStrategy::Any, query, &index);
        let none = resolve(SearchStrategy::None, query, &index);

        assert!(any.is_subset(&universe));
        assert!(none.is_subset(&universe));
        assert!(any.is_disjoint(&none));
        assert_eq!(any.union(&none).count(), universe.len());
    }
}

#[test]
fn test_searcher_strategy_switching() {
    let index = InvertedIndex::build(sample_records());
    let mut searcher = Searcher::new();

    searcher.select("any").unwrap();
    assert_eq!(
        searcher.search("cat dog", &index).unwrap(),
        BTreeSet::from([0, 1, 2])
    );

    searcher.select("all").unwrap();
    assert_eq!(
        searcher.search("cat dog", &index).unwrap(),
        BTreeSet::from([2])
    );

    // A bad selection keeps "all" active.
    assert!(searcher.select("best").is_err());
    assert_eq!(
        searcher.search("cat dog", &index).unwrap(),
        BTreeSet::from([2])
    );

    searcher.select("none").unwrap();
    assert!(searcher.search("cat dog", &index).unwrap().is_empty());
}

#[test]
fn test_corpus_loading_end_to_end() -> Result<()> {
    let mut corpus = NamedTempFile::new().unwrap();
    writeln!(corpus, "Katie Jacobs")?;
    writeln!(corpus, "Erick Harrington harrington@gmail.com")?;
    writeln!(corpus, "Erick Burgess")?;
    corpus.flush()?;

    let records = load_corpus(corpus.path())?;
    assert_eq!(records.len(), 3);
    assert_eq!(records[0], "Katie Jacobs");

    let index = InvertedIndex::build(&records);

    // The driver lowercases raw queries before resolving.
    let hits = resolve(SearchStrategy::Any, &"ERICK".to_lowercase(), &index);
    assert_eq!(hits, BTreeSet::from([1, 2]));

    let hits = resolve(SearchStrategy::All, "erick harrington", &index);
    assert_eq!(hits, BTreeSet::from([1]));

    let hits = resolve(SearchStrategy::None, "erick", &index);
    assert_eq!(hits, BTreeSet::from([0]));

    Ok(())
}

#[test]
fn test_missing_corpus_file_is_an_io_error() {
    let result = load_corpus(std::path::Path::new("/nonexistent/corpus.txt"));

    assert!(matches!(
        result,
        Err(xyston::error::XystonError::Io(_))
    ));
}
