//! Core index types: interned documents, occurrences, posting lists.

use crate::index::postings;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Unique identifier for a document in the index
pub type DocId = u32;

/// One keyword's footprint in one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub doc: DocId,
    /// How many classified tokens of the keyword the document holds.
    /// Always at least 1; a document without the keyword has no entry.
    pub frequency: u32,
}

/// Keyword counts for a single document, the unit the merge step consumes.
#[derive(Debug)]
pub struct DocumentTerms {
    doc: DocId,
    counts: FxHashMap<String, u32>,
}

impl DocumentTerms {
    pub fn new(doc: DocId) -> Self {
        Self {
            doc,
            counts: FxHashMap::default(),
        }
    }

    /// Record one more sighting of `keyword`.
    pub fn bump(&mut self, keyword: String) {
        *self.counts.entry(keyword).or_insert(0) += 1;
    }

    #[allow(dead_code)]
    pub fn count(&self, keyword: &str) -> u32 {
        self.counts.get(keyword).copied().unwrap_or(0)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Counts sorted by descending frequency, ties alphabetical.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self
            .counts
            .iter()
            .map(|(keyword, &count)| (keyword.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// The master index: every keyword maps to its occurrences across the
/// corpus, each posting list kept in descending frequency order.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    postings: FxHashMap<String, Vec<Occurrence>>,
    doc_names: Vec<String>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document and get its id back. Names are not
    /// deduplicated here; the document list loader takes care of that.
    pub fn intern_document(&mut self, name: &str) -> DocId {
        let id = self.doc_names.len() as DocId;
        self.doc_names.push(name.to_string());
        id
    }

    pub fn doc_name(&self, doc: DocId) -> &str {
        &self.doc_names[doc as usize]
    }

    pub fn doc_count(&self) -> usize {
        self.doc_names.len()
    }

    pub fn keyword_count(&self) -> usize {
        self.postings.len()
    }

    /// Posting list for an exact (already lowercased) keyword.
    pub fn postings(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.postings.get(keyword).map(Vec::as_slice)
    }

    pub fn keywords(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.postings
            .iter()
            .map(|(keyword, occs)| (keyword.as_str(), occs.as_slice()))
    }

    /// Fold one scanned document into the index. Every keyword the
    /// document holds gains exactly one occurrence, placed by rank.
    pub fn merge_document(&mut self, terms: DocumentTerms) {
        let DocumentTerms { doc, counts } = terms;
        for (keyword, frequency) in counts {
            let occurrence = Occurrence { doc, frequency };
            match self.postings.entry(keyword) {
                Entry::Occupied(mut entry) => {
                    let list = entry.get_mut();
                    list.push(occurrence);
                    postings::insert_last(list);
                }
                Entry::Vacant(entry) => {
                    entry.insert(vec![occurrence]);
                }
            }
        }
    }
}
