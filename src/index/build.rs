//! Corpus indexing pipeline.
//!
//! Documents are scanned in parallel, each producing its own keyword
//! counts, then merged into the master index one document at a time in
//! list order so posting lists come out deterministic.

use crate::corpus::{self, DirCorpus, DocumentSource};
use crate::index::types::{DocId, DocumentTerms, KeywordIndex};
use crate::utils::classify::KeywordClassifier;
use crate::utils::progress::{ProgressBar, ProgressStyle};
use anyhow::Result;
use rayon::prelude::*;
use std::path::Path;

/// Build the master index for a file-backed corpus.
#[allow(dead_code)]
pub fn build_index(docs_file: &Path, stop_words_file: &Path, base_dir: &Path) -> Result<KeywordIndex> {
    build_index_with_progress(docs_file, stop_words_file, base_dir, false)
}

/// Build the master index, optionally with no progress output (tests,
/// `--json` runs).
pub fn build_index_with_progress(
    docs_file: &Path,
    stop_words_file: &Path,
    base_dir: &Path,
    silent: bool,
) -> Result<KeywordIndex> {
    let stop_words = corpus::load_stop_words(stop_words_file)?;
    let classifier = KeywordClassifier::new(stop_words);
    let names = corpus::load_document_list(docs_file)?;
    let source = DirCorpus::new(base_dir);
    build_from_source(&names, &source, &classifier, silent)
}

/// Core pipeline over any document source: parallel scan, serial merge.
///
/// Any document that cannot be fetched aborts the build; a corpus that
/// lists a document promises it is readable.
pub fn build_from_source<S: DocumentSource>(
    names: &[String],
    source: &S,
    classifier: &KeywordClassifier,
    silent: bool,
) -> Result<KeywordIndex> {
    let mut index = KeywordIndex::new();
    let docs: Vec<(DocId, &str)> = names
        .iter()
        .map(|name| (index.intern_document(name), name.as_str()))
        .collect();

    let progress = if silent {
        None
    } else {
        Some(scan_progress_bar(docs.len() as u64))
    };

    let scanned = docs
        .par_iter()
        .map(|&(doc, name)| {
            let text = source.fetch(name)?;
            let terms = scan_document(doc, &text, classifier);
            if let Some(bar) = &progress {
                bar.inc(1);
            }
            Ok(terms)
        })
        .collect::<Result<Vec<DocumentTerms>>>()?;

    for terms in scanned {
        index.merge_document(terms);
    }

    if let Some(bar) = &progress {
        bar.finish_with_message(format!(
            "indexed {} documents, {} keywords",
            index.doc_count(),
            index.keyword_count()
        ));
    }

    Ok(index)
}

/// Count one document's keywords. Tokens are whitespace-delimited; the
/// classifier decides which of them survive.
pub fn scan_document(doc: DocId, text: &str, classifier: &KeywordClassifier) -> DocumentTerms {
    let mut terms = DocumentTerms::new(doc);
    for token in text.split_whitespace() {
        if let Some(keyword) = classifier.classify(token) {
            terms.bump(keyword);
        }
    }
    terms
}

fn scan_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓▒░  "),
    );
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::classify::StopWords;
    use anyhow::bail;
    use rustc_hash::FxHashMap;

    struct MemCorpus(FxHashMap<String, String>);

    impl MemCorpus {
        fn new(docs: &[(&str, &str)]) -> Self {
            Self(
                docs.iter()
                    .map(|&(name, text)| (name.to_string(), text.to_string()))
                    .collect(),
            )
        }
    }

    impl DocumentSource for MemCorpus {
        fn fetch(&self, name: &str) -> Result<String> {
            match self.0.get(name) {
                Some(text) => Ok(text.clone()),
                None => bail!("failed to read document '{}'", name),
            }
        }
    }

    fn classifier() -> KeywordClassifier {
        KeywordClassifier::new(StopWords::from_words(["the", "a", "an", "of", "and"]))
    }

    #[test]
    fn test_scan_counts_classified_tokens() {
        let c = classifier();
        let terms = scan_document(0, "The cat saw the cat. A cat! 2 cats?", &c);
        assert_eq!(terms.count("cat"), 3);
        assert_eq!(terms.count("saw"), 1);
        // "the"/"a" are stop words, "2" is not a word, "cats?" -> "cats"
        assert_eq!(terms.count("the"), 0);
        assert_eq!(terms.count("cats"), 1);
        assert_eq!(terms.len(), 3);
    }

    #[test]
    fn test_scan_empty_document() {
        let c = classifier();
        let terms = scan_document(0, "  \n\t ", &c);
        assert!(terms.is_empty());
    }

    #[test]
    fn test_build_indexes_whole_corpus() {
        let c = classifier();
        let source = MemCorpus::new(&[
            ("doc1.txt", "dog cat cat"),
            ("doc2.txt", "cat bird"),
        ]);
        let names = vec!["doc1.txt".to_string(), "doc2.txt".to_string()];

        let index = build_from_source(&names, &source, &c, true).unwrap();

        assert_eq!(index.doc_count(), 2);
        assert_eq!(index.keyword_count(), 3);

        let cat = index.postings("cat").unwrap();
        assert_eq!(cat.len(), 2);
        assert_eq!(cat[0].frequency, 2);
        assert_eq!(index.doc_name(cat[0].doc), "doc1.txt");
        assert_eq!(cat[1].frequency, 1);
        assert_eq!(index.doc_name(cat[1].doc), "doc2.txt");

        let dog = index.postings("dog").unwrap();
        assert_eq!(dog.len(), 1);
        assert_eq!(index.doc_name(dog[0].doc), "doc1.txt");
    }

    #[test]
    fn test_build_fails_on_unreadable_document() {
        let c = classifier();
        let source = MemCorpus::new(&[("here.txt", "words")]);
        let names = vec!["here.txt".to_string(), "gone.txt".to_string()];

        let err = build_from_source(&names, &source, &c, true).unwrap_err();
        assert!(err.to_string().contains("gone.txt"));
    }

    #[test]
    fn test_build_file_backed_corpus() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("docs.txt"), "one.txt\ntwo.txt\n").unwrap();
        std::fs::write(dir.path().join("stops.txt"), "the\n").unwrap();
        std::fs::write(dir.path().join("one.txt"), "storm at sea").unwrap();
        std::fs::write(dir.path().join("two.txt"), "the storm").unwrap();

        let index = build_index_with_progress(
            &dir.path().join("docs.txt"),
            &dir.path().join("stops.txt"),
            dir.path(),
            true,
        )
        .unwrap();

        assert_eq!(index.doc_count(), 2);
        let storm = index.postings("storm").unwrap();
        assert_eq!(storm.len(), 2);
        assert_eq!(index.postings("the"), None);
    }
}
