//! Corpus-level statistics over a built index.

use crate::index::types::KeywordIndex;
use serde::Serialize;

/// How many keywords the top-keyword listing shows.
const TOP_KEYWORDS: usize = 10;

#[derive(Debug, Serialize)]
pub struct IndexStats {
    pub documents: usize,
    pub keywords: usize,
    pub postings: usize,
    pub top_keywords: Vec<KeywordFrequency>,
}

#[derive(Debug, Serialize)]
pub struct KeywordFrequency {
    pub keyword: String,
    /// Number of documents the keyword appears in.
    pub documents: usize,
    /// Total occurrences across the whole corpus.
    pub occurrences: u64,
}

impl IndexStats {
    pub fn compute(index: &KeywordIndex) -> Self {
        let mut postings = 0;
        let mut top_keywords: Vec<KeywordFrequency> = index
            .keywords()
            .map(|(keyword, occs)| {
                postings += occs.len();
                KeywordFrequency {
                    keyword: keyword.to_string(),
                    documents: occs.len(),
                    occurrences: occs.iter().map(|o| u64::from(o.frequency)).sum(),
                }
            })
            .collect();
        top_keywords.sort_by(|a, b| {
            b.occurrences
                .cmp(&a.occurrences)
                .then_with(|| a.keyword.cmp(&b.keyword))
        });
        top_keywords.truncate(TOP_KEYWORDS);

        IndexStats {
            documents: index.doc_count(),
            keywords: index.keyword_count(),
            postings,
            top_keywords,
        }
    }
}

/// Print index statistics in a human-readable table.
pub fn show_stats(index: &KeywordIndex) {
    let stats = IndexStats::compute(index);

    println!("Index Statistics");
    println!("================");
    println!();
    println!("{:<15} {}", "Documents:", stats.documents);
    println!("{:<15} {}", "Keywords:", stats.keywords);
    println!("{:<15} {}", "Postings:", stats.postings);

    if !stats.top_keywords.is_empty() {
        println!();
        println!("Top keywords:");
        for entry in &stats.top_keywords {
            println!(
                "  {:<20} {:>4} docs {:>8} occurrences",
                entry.keyword, entry.documents, entry.occurrences
            );
        }
    }
}
