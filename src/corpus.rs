//! Corpus inputs: the document list, the stop-word list, and document text.
//!
//! A corpus is an explicit list of document names plus somewhere to fetch
//! each document's text from. The indexer only ever sees names from the
//! list, so corpus membership is decided here, not by directory walking.

use crate::utils::classify::StopWords;
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Where document text comes from, keyed by the names in the document list.
///
/// The file-backed [`DirCorpus`] is the normal implementation; tests swap
/// in in-memory sources.
pub trait DocumentSource: Sync {
    /// Fetch one document's full text. Failing here aborts the build.
    fn fetch(&self, name: &str) -> Result<String>;
}

/// Documents stored as plain files under a base directory.
pub struct DirCorpus {
    base: PathBuf,
}

impl DirCorpus {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl DocumentSource for DirCorpus {
    fn fetch(&self, name: &str) -> Result<String> {
        let path = self.base.join(name);
        fs::read_to_string(&path)
            .with_context(|| format!("failed to read document '{}'", path.display()))
    }
}

/// Load the document list: one name per line, trimmed, blanks skipped.
/// Repeated names are dropped so a document is never indexed twice;
/// first-seen order is preserved.
pub fn load_document_list(path: &Path) -> Result<Vec<String>> {
    let names = read_list(path, "document list")?;
    let mut seen = FxHashSet::default();
    Ok(names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect())
}

/// Load the stop-word list: one word per line, normalized by [`StopWords`].
pub fn load_stop_words(path: &Path) -> Result<StopWords> {
    let words = read_list(path, "stop-word list")?;
    Ok(StopWords::from_words(words))
}

fn read_list(path: &Path, what: &str) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {} '{}'", what, path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
