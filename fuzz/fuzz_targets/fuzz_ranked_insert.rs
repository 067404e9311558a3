#![no_main]

use kwix::index::postings::insert_last;
use kwix::index::types::Occurrence;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|frequencies: Vec<u32>| {
    // Grow a posting list one occurrence at a time; the descending-order
    // invariant must hold after every insertion
    let mut occs: Vec<Occurrence> = Vec::new();
    for (doc, frequency) in frequencies.into_iter().enumerate() {
        occs.push(Occurrence {
            doc: doc as u32,
            frequency,
        });
        let probes = insert_last(&mut occs);
        assert!(probes.len() < occs.len().max(2));
        assert!(occs.windows(2).all(|w| w[0].frequency >= w[1].frequency));
    }
});
