//! Command implementations for the Xyston CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::query::Searcher;

/// Execute a CLI command.
pub fn execute_command(args: XystonArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_corpus(search_args.clone(), &args),
        Command::List(list_args) => list_records(list_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
        Command::Repl(repl_args) => run_repl(repl_args.clone(), &args),
    }
}

/// Load a line-oriented corpus from a file, one record per line.
pub fn load_corpus(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for line in reader.lines() {
        records.push(line?);
    }
    Ok(records)
}

/// Search the corpus with the selected strategy.
fn search_corpus(args: SearchArgs, cli_args: &XystonArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Searching corpus: {}", args.corpus_path.display());
        println!("Query: {}", args.query);
    }

    let records = load_corpus(&args.corpus_path)?;
    let index = InvertedIndex::build(&records);

    let mut searcher = Searcher::new();
    let strategy = searcher.select(&args.strategy)?;

    let start_time = Instant::now();
    let positions = searcher.search(&args.query.to_lowercase(), &index)?;
    let duration = start_time.elapsed();

    let hits: Vec<Hit> = positions
        .iter()
        .map(|&position| Hit {
            position,
            text: records[position].clone(),
        })
        .collect();

    output_result(
        "Search completed",
        &SearchResults {
            strategy,
            query: args.query.clone(),
            total_hits: hits.len(),
            hits,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Print every record in the corpus.
fn list_records(args: ListArgs, cli_args: &XystonArgs) -> Result<()> {
    let records = load_corpus(&args.corpus_path)?;

    output_result(
        "Corpus listing",
        &ListResults {
            total_records: records.len(),
            records,
        },
        cli_args,
    )?;

    Ok(())
}

/// Show index statistics for the corpus.
fn show_stats(args: StatsArgs, cli_args: &XystonArgs) -> Result<()> {
    let records = load_corpus(&args.corpus_path)?;
    let index = InvertedIndex::build(&records);
    let stats = index.stats();

    output_result(
        "Corpus statistics",
        &StatsResults {
            total_records: stats.doc_count,
            unique_terms: stats.term_count,
            total_postings: stats.posting_count,
        },
        cli_args,
    )?;

    Ok(())
}

/// Run the interactive search session on stdin/stdout.
fn run_repl(args: ReplArgs, cli_args: &XystonArgs) -> Result<()> {
    let records = load_corpus(&args.corpus_path)?;
    let index = InvertedIndex::build(&records);

    if cli_args.verbosity() > 1 {
        println!("Loaded {} records", records.len());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl_loop(stdin.lock(), stdout.lock(), &records, &index)
}

/// The interactive menu loop, generic over its streams for testability.
///
/// A rejected strategy selection keeps the previous selection and skips the
/// search for that cycle; the loop itself never fails on user input.
pub fn repl_loop<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    records: &[String],
    index: &InvertedIndex,
) -> Result<()> {
    let mut searcher = Searcher::new();

    loop {
        writeln!(output, "=== Menu ===")?;
        writeln!(output, "1. Search")?;
        writeln!(output, "2. Print all records")?;
        writeln!(output, "0. Exit")?;

        let Some(option) = read_line(&mut input)? else {
            // End of input behaves like exit.
            break;
        };

        match option.trim() {
            "0" => break,
            "1" => {
                writeln!(output, "Select a strategy (any, all, none):")?;
                let Some(name) = read_line(&mut input)? else {
                    break;
                };

                if searcher.select(name.trim()).is_err() {
                    writeln!(output, "Please select all, any or none")?;
                    continue;
                }

                writeln!(output, "Enter a query:")?;
                let Some(query) = read_line(&mut input)? else {
                    break;
                };

                let positions = searcher.search(&query.to_lowercase(), index)?;
                if positions.is_empty() {
                    writeln!(output, "No matches found")?;
                } else {
                    for position in positions {
                        writeln!(output, "{}", records[position])?;
                    }
                }
            }
            "2" => {
                for record in records {
                    writeln!(output, "{record}")?;
                }
            }
            _ => {
                writeln!(output, "Incorrect option! Try again.")?;
            }
        }
    }

    writeln!(output, "Bye")?;
    Ok(())
}

/// Read one line, returning `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
