#![no_main]

use cachepair::policy::lfu::LfuCache;
use libfuzzer_sys::fuzz_target;

// First byte picks the capacity (0..=15); the rest drive get/put/remove/
// pop_lfu/clear. Frequencies and the eviction victim are cross-checked.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 16);
    let mut cache: LfuCache<u8, u8> = LfuCache::new(capacity);

    for chunk in ops.chunks_exact(2) {
        let key = chunk[1] % 32;

        match chunk[0] % 5 {
            0 => {
                let before = cache.frequency(&key);
                let hit = cache.get(&key).is_some();
                assert_eq!(hit, before.is_some());
                if let Some(freq) = before {
                    assert_eq!(cache.frequency(&key), Some(freq + 1));
                }
            },
            1 => {
                let before = cache.frequency(&key);
                let victim = cache.peek_lfu().map(|(k, _)| *k);
                let full = cache.len() == capacity;
                cache.put(key, chunk[0]);

                match before {
                    Some(freq) => assert_eq!(cache.frequency(&key), Some(freq + 1)),
                    None if capacity > 0 => {
                        assert_eq!(cache.frequency(&key), Some(1));
                        assert_eq!(cache.min_frequency(), Some(1));
                        if full {
                            if let Some(victim) = victim {
                                assert!(!cache.contains(&victim));
                            }
                        }
                    },
                    None => assert!(cache.is_empty()),
                }
            },
            2 => {
                let had = cache.contains(&key);
                assert_eq!(cache.remove(&key).is_some(), had);
            },
            3 => {
                let victim = cache.peek_lfu().map(|(k, v)| (*k, *v));
                if let Some((k, _)) = victim {
                    assert_eq!(cache.frequency(&k), cache.min_frequency());
                }
                assert_eq!(cache.pop_lfu(), victim);
            },
            4 => {
                cache.clear();
                assert_eq!(cache.min_frequency(), None);
            },
            _ => unreachable!(),
        }

        assert!(cache.len() <= capacity);
        if let Err(e) = cache.check_invariants() {
            panic!("invariant violated: {}", e);
        }
    }
});
