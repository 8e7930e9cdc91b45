// ==============================================
// CROSS-POLICY INVARIANT TESTS (integration)
// ==============================================
//
// Behaviour both policies must share, driven through the builder and the
// CoreCache trait so every check runs against LRU and LFU alike.

use cachepair::builder::{Cache, CacheBuilder, CachePolicy};
use cachepair::traits::CoreCache;

fn build(policy: CachePolicy, capacity: usize) -> Cache<u64, String> {
    CacheBuilder::new(capacity).build(policy)
}

// ==============================================
// Capacity-0 Behavior
// ==============================================

mod zero_capacity {
    use super::*;

    #[test]
    fn capacity_zero_is_honored() {
        for policy in CachePolicy::ALL {
            let cache = build(policy, 0);
            assert_eq!(
                cache.capacity(),
                0,
                "{} cache should honor capacity=0, not coerce to {}",
                policy,
                cache.capacity()
            );
        }
    }

    #[test]
    fn capacity_zero_rejects_puts() {
        for policy in CachePolicy::ALL {
            let mut cache = build(policy, 0);
            for i in 0..100 {
                cache.put(i, i.to_string());
                assert_eq!(
                    cache.get(&i),
                    None,
                    "{} stored into a zero-capacity cache",
                    policy
                );
            }
            assert_eq!(cache.len(), 0);
            assert!(cache.is_empty());
        }
    }
}

// ==============================================
// Capacity Bound
// ==============================================

mod capacity_bound {
    use super::*;

    #[test]
    fn len_never_exceeds_capacity() {
        for policy in CachePolicy::ALL {
            for capacity in [1usize, 2, 7, 64] {
                let mut cache = build(policy, capacity);
                for i in 0..(capacity as u64 * 5) {
                    cache.put(i, i.to_string());
                    if i % 3 == 0 {
                        cache.get(&(i / 2));
                    }
                    assert!(
                        cache.len() <= capacity,
                        "{} len {} over capacity {}",
                        policy,
                        cache.len(),
                        capacity
                    );
                }
                assert_eq!(cache.len(), capacity);
            }
        }
    }

    #[test]
    fn update_never_changes_len() {
        for policy in CachePolicy::ALL {
            let mut cache = build(policy, 3);
            cache.put(1, "a".into());
            cache.put(2, "b".into());
            for round in 0..10 {
                cache.put(1, format!("a{}", round));
                assert_eq!(cache.len(), 2);
            }
            assert_eq!(cache.get(&1), Some(&"a9".to_string()));
            assert_eq!(cache.get(&2), Some(&"b".to_string()));
        }
    }
}

// ==============================================
// Eviction Order
// ==============================================

mod eviction_order {
    use super::*;

    #[test]
    fn overflow_without_reads_evicts_first_inserted() {
        // With no reads every LFU entry sits at frequency 1, so the tie-break
        // reduces LFU to insertion order and both policies agree.
        for policy in CachePolicy::ALL {
            let mut cache = build(policy, 4);
            for i in 0..5 {
                cache.put(i, i.to_string());
            }
            assert!(!cache.contains(&0), "{} kept the oldest key", policy);
            for i in 1..5 {
                assert!(cache.contains(&i));
            }
        }
    }

    #[test]
    fn read_on_oldest_key_protects_it() {
        for policy in CachePolicy::ALL {
            let mut cache = build(policy, 3);
            for i in 0..3 {
                cache.put(i, i.to_string());
            }
            cache.get(&0);
            cache.put(3, "3".into());

            assert!(cache.contains(&0), "{} evicted a freshly read key", policy);
            assert!(!cache.contains(&1), "{} should evict key 1", policy);
        }
    }

    #[test]
    fn lru_end_to_end_scenario() {
        let mut cache = CacheBuilder::new(2).build::<u64, &str>(CachePolicy::Lru);
        cache.put(1, "a");
        cache.put(2, "b");
        assert_eq!(cache.get(&1), Some(&"a"));
        cache.put(3, "c");
        assert!(!cache.contains(&2));
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&1), Some(&"a"));
        assert_eq!(cache.get(&3), Some(&"c"));
    }

    #[test]
    fn lfu_evicts_lowest_frequency() {
        let mut cache = CacheBuilder::new(2).build::<char, u32>(CachePolicy::Lfu);
        cache.put('A', 1);
        cache.put('B', 2);
        cache.get(&'A');
        cache.put('C', 3);
        assert!(cache.contains(&'A'));
        assert!(!cache.contains(&'B'));
        assert!(cache.contains(&'C'));
    }

    #[test]
    fn lfu_tie_break_evicts_least_recent() {
        let mut cache = CacheBuilder::new(2).build::<char, u32>(CachePolicy::Lfu);
        cache.put('A', 1);
        cache.put('B', 2);
        cache.put('C', 3);
        assert!(!cache.contains(&'A'));
        assert!(cache.contains(&'B'));
        assert!(cache.contains(&'C'));
    }
}

// ==============================================
// Trait-Driven Usage
// ==============================================

mod generic_driver {
    use super::*;
    use cachepair::policy::lfu::LfuCache;
    use cachepair::policy::lru::LruCache;

    fn read_through<C: CoreCache<u64, u64>>(cache: &mut C, keys: &[u64]) -> (u64, u64) {
        let (mut hits, mut misses) = (0, 0);
        for &key in keys {
            if cache.get(&key).is_some() {
                hits += 1;
            } else {
                misses += 1;
                cache.put(key, key * 2);
            }
        }
        (hits, misses)
    }

    #[test]
    fn concrete_and_builder_caches_agree() {
        let keys: Vec<u64> = (0..2_000).map(|i| (i * 7919) % 97).collect();

        let lru = read_through(&mut LruCache::new(32), &keys);
        let mut built = CacheBuilder::new(32).build::<u64, u64>(CachePolicy::Lru);
        let lru_built = read_through(&mut built, &keys);
        assert_eq!(lru, lru_built);

        let lfu = read_through(&mut LfuCache::new(32), &keys);
        let mut built = CacheBuilder::new(32).build::<u64, u64>(CachePolicy::Lfu);
        let lfu_built = read_through(&mut built, &keys);
        assert_eq!(lfu, lfu_built);

        assert_eq!(lru.0 + lru.1, 2_000);
        assert_eq!(lfu.0 + lfu.1, 2_000);
    }
}

// ==============================================
// Property Tests
// ==============================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn policy_strategy() -> impl Strategy<Value = CachePolicy> {
        prop_oneof![Just(CachePolicy::Lru), Just(CachePolicy::Lfu)]
    }

    proptest! {
        #[test]
        fn read_after_write(
            policy in policy_strategy(),
            capacity in 1usize..32,
            prefix in prop::collection::vec((0u16..64, any::<u32>()), 0..64),
            key in 0u16..64,
            value in any::<u32>(),
        ) {
            let mut cache = CacheBuilder::new(capacity).build::<u16, u32>(policy);
            for (k, v) in prefix {
                cache.put(k, v);
            }
            cache.put(key, value);
            prop_assert_eq!(cache.get(&key), Some(&value));
        }

        #[test]
        fn miss_leaves_contents_unchanged(
            policy in policy_strategy(),
            capacity in 0usize..16,
            keys in prop::collection::vec(0u8..32, 0..64),
            probe in 32u8..64,
        ) {
            let mut cache = CacheBuilder::new(capacity).build::<u8, u8>(policy);
            for k in keys {
                cache.put(k, k);
            }
            let before: Vec<Option<u8>> = (0..32).map(|k| cache.peek(&k).copied()).collect();
            let len = cache.len();

            prop_assert_eq!(cache.get(&probe), None);

            let after: Vec<Option<u8>> = (0..32).map(|k| cache.peek(&k).copied()).collect();
            prop_assert_eq!(before, after);
            prop_assert_eq!(cache.len(), len);
        }
    }
}
