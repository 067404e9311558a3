//! Two-keyword disjunctive search over the master index.
//!
//! Both keywords' posting lists are already sorted by descending
//! frequency, so the search walks them like a merge: whichever head has
//! the higher frequency is consumed, ties preferring the first keyword.
//! A document showing up in both lists is reported once, at its best
//! rank, but the losing head is still consumed so the walk always makes
//! progress. The index is only borrowed; searching never disturbs it.

use crate::index::types::{DocId, KeywordIndex, Occurrence};

/// Upper bound on the number of documents a search reports.
pub const RESULT_LIMIT: usize = 5;

/// Find the documents where either keyword occurs most often.
///
/// Keywords are matched case-insensitively. A keyword missing from the
/// index contributes nothing; if both are missing the result is empty.
/// Returns at most [`RESULT_LIMIT`] document names, best first.
pub fn top5(index: &KeywordIndex, keyword1: &str, keyword2: &str) -> Vec<String> {
    let first = lookup(index, keyword1);
    let second = lookup(index, keyword2);

    let mut hits: Vec<DocId> = Vec::with_capacity(RESULT_LIMIT);
    let (mut i, mut j) = (0, 0);
    while hits.len() < RESULT_LIMIT {
        let doc = match (first.get(i), second.get(j)) {
            (Some(a), Some(b)) if a.frequency >= b.frequency => {
                i += 1;
                a.doc
            }
            (Some(a), None) => {
                i += 1;
                a.doc
            }
            (_, Some(b)) => {
                j += 1;
                b.doc
            }
            (None, None) => break,
        };
        if !hits.contains(&doc) {
            hits.push(doc);
        }
    }

    hits.into_iter()
        .map(|doc| index.doc_name(doc).to_string())
        .collect()
}

fn lookup<'a>(index: &'a KeywordIndex, keyword: &str) -> &'a [Occurrence] {
    index.postings(&keyword.to_lowercase()).unwrap_or(&[])
}
