#![no_main]

use cachepair::policy::lru::LruCache;
use libfuzzer_sys::fuzz_target;

// First byte picks the capacity (0..=15); the rest drive get/put/remove/
// pop_lru/touch/clear. Invariants are checked after every step.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 16);
    let mut cache: LruCache<u8, u8> = LruCache::new(capacity);

    for chunk in ops.chunks_exact(2) {
        let key = chunk[1] % 32;

        match chunk[0] % 6 {
            0 => {
                let before = cache.len();
                let hit = cache.get(&key).is_some();
                assert_eq!(cache.len(), before);
                if hit {
                    assert_eq!(cache.peek_mru().map(|(k, _)| *k), Some(key));
                }
            },
            1 => {
                cache.put(key, chunk[0]);
                if capacity == 0 {
                    assert!(cache.is_empty());
                } else {
                    assert_eq!(cache.peek(&key), Some(&chunk[0]));
                    assert_eq!(cache.peek_mru().map(|(k, _)| *k), Some(key));
                }
            },
            2 => {
                let had = cache.contains(&key);
                assert_eq!(cache.remove(&key).is_some(), had);
                assert!(!cache.contains(&key));
            },
            3 => {
                let victim = cache.peek_lru().map(|(k, v)| (*k, *v));
                assert_eq!(cache.pop_lru(), victim);
            },
            4 => {
                let had = cache.contains(&key);
                assert_eq!(cache.touch(&key), had);
            },
            5 => {
                cache.clear();
                assert!(cache.is_empty());
            },
            _ => unreachable!(),
        }

        assert!(cache.len() <= capacity);
        if let Err(e) = cache.check_invariants() {
            panic!("invariant violated: {}", e);
        }
    }
});
