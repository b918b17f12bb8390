//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, XystonArgs};
use crate::error::Result;
use crate::query::SearchStrategy;

/// A single matching record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    /// Zero-based position of the record in the corpus.
    pub position: usize,
    /// The record text.
    pub text: String,
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub strategy: SearchStrategy,
    pub query: String,
    pub hits: Vec<Hit>,
    pub total_hits: usize,
    pub duration_ms: u64,
}

/// Result structure for corpus listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResults {
    pub records: Vec<String>,
    pub total_records: usize,
}

/// Corpus index statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResults {
    pub total_records: usize,
    pub unique_terms: usize,
    pub total_postings: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &XystonArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &XystonArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("SearchResults") => {
            output_search_results_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("ListResults") => {
            output_list_results_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("StatsResults") => {
            output_stats_results_human(&value, args)
        }
        _ => {
            // Generic output for other types
            output_generic_human(&value, args)
        }
    }
}

/// Output search results in human format.
fn output_search_results_human(value: &serde_json::Value, args: &XystonArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(hits) = obj.get("hits").and_then(|h| h.as_array()) {
            if hits.is_empty() {
                println!("No matches found");
            } else {
                for hit in hits {
                    let position = hit.get("position").and_then(|p| p.as_u64()).unwrap_or(0);
                    let text = hit.get("text").and_then(|t| t.as_str()).unwrap_or("");
                    if args.verbosity() > 1 {
                        println!("{position}: {text}");
                    } else {
                        println!("{text}");
                    }
                }
            }
        }

        if args.verbosity() > 1 {
            println!();
            if let Some(total) = obj.get("total_hits").and_then(|t| t.as_u64()) {
                println!("Total hits: {total}");
            }
            if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
                println!("Search time: {duration}ms");
            }
        }
    }
    Ok(())
}

/// Output a corpus listing in human format.
fn output_list_results_human(value: &serde_json::Value, args: &XystonArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(records) = obj.get("records").and_then(|r| r.as_array()) {
            for record in records {
                if let Some(text) = record.as_str() {
                    println!("{text}");
                }
            }
        }

        if args.verbosity() > 1
            && let Some(total) = obj.get("total_records").and_then(|t| t.as_u64())
        {
            println!();
            println!("Total records: {total}");
        }
    }
    Ok(())
}

/// Output corpus statistics in human format.
fn output_stats_results_human(value: &serde_json::Value, _args: &XystonArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        println!("Corpus Statistics:");
        println!("═════════════════");

        if let Some(records) = obj.get("total_records").and_then(|r| r.as_u64()) {
            println!("Total records: {records}");
        }

        if let Some(terms) = obj.get("unique_terms").and_then(|t| t.as_u64()) {
            println!("Unique terms: {terms}");
        }

        if let Some(postings) = obj.get("total_postings").and_then(|p| p.as_u64()) {
            println!("Total postings: {postings}");
        }
    }
    Ok(())
}

/// Output a generic value in human format.
fn output_generic_human(value: &serde_json::Value, _args: &XystonArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key}: {val}");
            }
        }
        _ => {
            println!("{value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &XystonArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
