//! Ranked insertion into posting lists.
//!
//! Posting lists stay sorted by descending frequency. New occurrences are
//! pushed onto the end, then [`insert_last`] binary-searches the sorted
//! prefix for the slot that keeps the order and rotates the newcomer into
//! it. The list of midpoints the search visited is returned so tests can
//! pin down the probe sequence, not just the end state.

use crate::index::types::Occurrence;
use std::cmp::Ordering;

/// Move the trailing occurrence of `occs` into frequency rank.
///
/// Expects everything before the last element to already be sorted in
/// descending frequency order. On an equal-frequency hit the newcomer
/// lands immediately before the element the probe stopped on; otherwise
/// it lands at the collapsed lower bound of the search range. Lists with
/// fewer than two elements are already in order and produce no probes.
pub fn insert_last(occs: &mut [Occurrence]) -> Vec<usize> {
    let mut probes = Vec::new();
    let Some(last) = occs.len().checked_sub(1) else {
        return probes;
    };
    if last == 0 {
        return probes;
    }

    let new = occs[last];
    let mut left: isize = 0;
    let mut right: isize = last as isize - 1;
    let mut slot = None;
    while left <= right {
        let mid = ((left + right) / 2) as usize;
        probes.push(mid);
        match occs[mid].frequency.cmp(&new.frequency) {
            Ordering::Equal => {
                slot = Some(mid);
                break;
            }
            // midpoint is rarer than the newcomer: keep to the left half
            Ordering::Less => right = mid as isize - 1,
            Ordering::Greater => left = mid as isize + 1,
        }
    }

    let at = slot.unwrap_or(left as usize);
    occs[at..].rotate_right(1);
    probes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(doc: u32, frequency: u32) -> Occurrence {
        Occurrence { doc, frequency }
    }

    fn list(freqs: &[u32]) -> Vec<Occurrence> {
        freqs
            .iter()
            .enumerate()
            .map(|(doc, &frequency)| occ(doc as u32, frequency))
            .collect()
    }

    fn freqs(occs: &[Occurrence]) -> Vec<u32> {
        occs.iter().map(|o| o.frequency).collect()
    }

    fn is_sorted_descending(occs: &[Occurrence]) -> bool {
        occs.windows(2).all(|w| w[0].frequency >= w[1].frequency)
    }

    #[test]
    fn test_single_element_needs_no_search() {
        let mut occs = list(&[7]);
        assert_eq!(insert_last(&mut occs), Vec::<usize>::new());
        assert_eq!(freqs(&occs), vec![7]);
    }

    #[test]
    fn test_empty_list_is_a_no_op() {
        let mut occs: Vec<Occurrence> = Vec::new();
        assert_eq!(insert_last(&mut occs), Vec::<usize>::new());
    }

    #[test]
    fn test_new_smallest_stays_at_the_end() {
        let mut occs = list(&[9, 5, 2, 1]);
        insert_last(&mut occs);
        assert_eq!(freqs(&occs), vec![9, 5, 2, 1]);
    }

    #[test]
    fn test_new_largest_moves_to_the_front() {
        let mut occs = list(&[5, 3, 1, 12]);
        insert_last(&mut occs);
        assert_eq!(freqs(&occs), vec![12, 5, 3, 1]);
        // the displaced prefix keeps its relative order
        assert_eq!(occs[0].doc, 3);
        assert_eq!(occs[1].doc, 0);
    }

    #[test]
    fn test_insert_into_the_middle() {
        // the probe never compares against the trailing 4 itself
        let mut occs = list(&[5, 3, 1, 4]);
        let probes = insert_last(&mut occs);
        assert_eq!(freqs(&occs), vec![5, 4, 3, 1]);
        assert_eq!(probes, vec![1, 0]);
    }

    #[test]
    fn test_probe_sequence_narrows_to_the_slot() {
        let mut occs = list(&[12, 8, 7, 5, 3, 2, 6]);
        let probes = insert_last(&mut occs);
        assert_eq!(probes, vec![2, 4, 3]);
        assert_eq!(freqs(&occs), vec![12, 8, 7, 6, 5, 3, 2]);
    }

    #[test]
    fn test_equal_frequency_stops_at_the_midpoint() {
        let mut occs = list(&[5, 3, 3, 3, 1, 3]);
        let probes = insert_last(&mut occs);
        assert_eq!(probes, vec![2]);
        // newcomer sits right where the probe hit its equal
        assert_eq!(occs[2].doc, 5);
        assert_eq!(freqs(&occs), vec![5, 3, 3, 3, 3, 1]);
    }

    #[test]
    fn test_two_element_tie_inserts_before_the_incumbent() {
        let mut occs = vec![occ(0, 2), occ(1, 2)];
        let probes = insert_last(&mut occs);
        assert_eq!(probes, vec![0]);
        assert_eq!(occs[0].doc, 1);
        assert_eq!(occs[1].doc, 0);
    }

    #[test]
    fn test_preserves_the_multiset_of_occurrences() {
        let mut occs = list(&[10, 10, 9, 4, 4, 2, 1, 6]);
        let before: Vec<Occurrence> = occs.clone();
        insert_last(&mut occs);

        assert!(is_sorted_descending(&occs));
        let mut sorted_before = before;
        sorted_before.sort_by(|a, b| b.frequency.cmp(&a.frequency).then(a.doc.cmp(&b.doc)));
        let mut sorted_after = occs.clone();
        sorted_after.sort_by(|a, b| b.frequency.cmp(&a.frequency).then(a.doc.cmp(&b.doc)));
        assert_eq!(sorted_before, sorted_after);
    }

    #[test]
    fn test_incremental_inserts_keep_order() {
        let mut occs: Vec<Occurrence> = Vec::new();
        for (doc, frequency) in [3u32, 9, 1, 9, 4, 27, 2, 5, 5].into_iter().enumerate() {
            occs.push(occ(doc as u32, frequency));
            let probes = insert_last(&mut occs);
            assert!(is_sorted_descending(&occs), "unsorted after doc {doc}");
            assert!(probes.len() <= occs.len());
        }
        assert_eq!(freqs(&occs), vec![27, 9, 9, 5, 5, 4, 3, 2, 1]);
    }
}
