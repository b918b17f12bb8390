//! # Xyston
//!
//! A small in-memory full-text search library for line-oriented text.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Inverted index over a line-oriented corpus, built in one pass
//! - Set-based membership queries: match-any, match-all, match-none
//! - Deterministic, sorted result sets
//!
//! ## Quick Start
//!
//! ```
//! use xyston::index::InvertedIndex;
//! use xyston::query::{SearchStrategy, resolve};
//!
//! let records = ["the cat sat", "the dog ran", "cat and dog"];
//! let index = InvertedIndex::build(records);
//!
//! let hits = resolve(SearchStrategy::Any, "cat", &index);
//! assert!(hits.contains(&0) && hits.contains(&2));
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;
pub mod query;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
