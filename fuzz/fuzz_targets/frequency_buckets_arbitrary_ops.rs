#![no_main]

use cachepair::ds::{FrequencyBuckets, SlotId};
use libfuzzer_sys::fuzz_target;

// Arbitrary insert/touch/remove/pop_min sequences on FrequencyBuckets.
// Tracks each live handle with its expected frequency and checks that
// min_freq is always the true minimum.
fuzz_target!(|data: &[u8]| {
    let mut buckets: FrequencyBuckets<u8> = FrequencyBuckets::new();
    let mut live: Vec<(SlotId, u8, u64)> = Vec::new();

    for chunk in data.chunks_exact(2) {
        let arg = chunk[1];

        match chunk[0] % 5 {
            0 => {
                let id = buckets.insert(arg);
                live.push((id, arg, 1));
            },
            1 => {
                if !live.is_empty() {
                    let pos = arg as usize % live.len();
                    let new_freq = buckets.touch(live[pos].0);
                    live[pos].2 += 1;
                    assert_eq!(new_freq, Some(live[pos].2));
                }
            },
            2 => {
                if !live.is_empty() {
                    let (id, payload, freq) = live.swap_remove(arg as usize % live.len());
                    assert_eq!(buckets.remove(id), Some((payload, freq)));
                    assert_eq!(buckets.touch(id), None);
                }
            },
            3 => {
                let expected_min = live.iter().map(|e| e.2).min();
                let victim = buckets.peek_min_id();
                match buckets.pop_min() {
                    Some((payload, freq)) => {
                        assert_eq!(Some(freq), expected_min);
                        let pos = live
                            .iter()
                            .position(|e| Some(e.0) == victim)
                            .expect("popped entry must be live");
                        let (_, expected_payload, expected_freq) = live.swap_remove(pos);
                        assert_eq!((payload, freq), (expected_payload, expected_freq));
                    },
                    None => assert!(live.is_empty()),
                }
            },
            4 => {
                buckets.clear();
                live.clear();
            },
            _ => unreachable!(),
        }

        buckets.debug_validate_invariants();
        assert_eq!(buckets.len(), live.len());
        assert_eq!(buckets.min_freq(), live.iter().map(|e| e.2).min());
        if let Some((_, freq)) = buckets.peek_min() {
            assert_eq!(Some(freq), buckets.min_freq());
        }
    }
});
