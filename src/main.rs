mod corpus;
mod index;
mod output;
mod query;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};

use corpus::DocumentSource;
use index::types::KeywordIndex;

#[derive(Parser)]
#[command(name = "kwix")]
#[command(about = "Frequency-ranked keyword search over small document corpora")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the corpus for up to two keywords
    Search {
        /// File listing the documents to index, one name per line
        #[arg(short, long)]
        docs: PathBuf,

        /// File listing stop words, one per line
        #[arg(short, long)]
        stop_words: PathBuf,

        /// Base directory for document names (default: the document list's directory)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,

        /// First keyword (omit both for an interactive prompt)
        keyword1: Option<String>,

        /// Second keyword (defaults to the first)
        keyword2: Option<String>,
    },
    /// Show index statistics for the corpus
    Stats {
        /// File listing the documents to index, one name per line
        #[arg(short, long)]
        docs: PathBuf,

        /// File listing stop words, one per line
        #[arg(short, long)]
        stop_words: PathBuf,

        /// Base directory for document names (default: the document list's directory)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the keywords one document contributes to the index
    Terms {
        /// File listing the documents to index, one name per line
        #[arg(short, long)]
        docs: PathBuf,

        /// File listing stop words, one per line
        #[arg(short, long)]
        stop_words: PathBuf,

        /// Base directory for document names (default: the document list's directory)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,

        /// Document name, as it appears in the document list
        document: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            docs,
            stop_words,
            dir,
            json,
            keyword1,
            keyword2,
        } => {
            let base = resolve_base_dir(dir, &docs);
            let index =
                index::build::build_index_with_progress(&docs, &stop_words, &base, json)?;
            match keyword1 {
                Some(kw1) => {
                    let kw2 = keyword2.unwrap_or_else(|| kw1.clone());
                    run_search(&index, &kw1, &kw2, json)?;
                }
                None => interactive_search(&index, json)?,
            }
        }
        Commands::Stats {
            docs,
            stop_words,
            dir,
            json,
        } => {
            let base = resolve_base_dir(dir, &docs);
            let index =
                index::build::build_index_with_progress(&docs, &stop_words, &base, json)?;
            if json {
                let stats = index::stats::IndexStats::compute(&index);
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                index::stats::show_stats(&index);
            }
        }
        Commands::Terms {
            docs,
            stop_words,
            dir,
            json,
            document,
        } => {
            let base = resolve_base_dir(dir, &docs);
            let stop_words = corpus::load_stop_words(&stop_words)?;
            let classifier = utils::classify::KeywordClassifier::new(stop_words);
            let source = corpus::DirCorpus::new(base);
            let text = source.fetch(&document)?;
            // the doc id never leaves this scan
            let terms = index::build::scan_document(0, &text, &classifier);
            let ranked = terms.ranked();
            if json {
                output::print_terms_json(&document, &ranked)?;
            } else {
                output::print_document_terms(&document, &ranked, use_color())?;
            }
        }
    }

    Ok(())
}

/// Document names resolve against `--dir` when given, otherwise against
/// the directory holding the document list.
fn resolve_base_dir(dir: Option<PathBuf>, docs_file: &Path) -> PathBuf {
    dir.unwrap_or_else(|| {
        match docs_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    })
}

fn run_search(index: &KeywordIndex, keyword1: &str, keyword2: &str, json: bool) -> Result<()> {
    let results = query::top5(index, keyword1, keyword2);
    if json {
        output::print_search_json(keyword1, keyword2, &results)?;
    } else {
        output::print_search_results(&results, use_color())?;
    }
    Ok(())
}

/// Prompt loop over stdin: one query per line (one or two keywords),
/// ending on a blank line or end of input. The prompt goes to stderr so
/// stdout carries nothing but results.
fn interactive_search(index: &KeywordIndex, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        eprint!("search> ");
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut words = line.split_whitespace();
        let Some(keyword1) = words.next() else {
            break;
        };
        let keyword2 = words.next().unwrap_or(keyword1);
        run_search(index, keyword1, keyword2, json)?;
    }
    Ok(())
}

fn use_color() -> bool {
    io::stdout().is_terminal()
}
