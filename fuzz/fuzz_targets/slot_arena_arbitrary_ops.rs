#![no_main]

use cachepair::ds::SlotArena;
use libfuzzer_sys::fuzz_target;

// Arbitrary insert/remove/get_mut/clear sequences on SlotArena, checked
// against a shadow Vec of live handles.
fuzz_target!(|data: &[u8]| {
    let mut arena: SlotArena<u32> = SlotArena::new();
    let mut live = Vec::new();

    for chunk in data.chunks_exact(2) {
        let value = u32::from(chunk[1]);

        match chunk[0] % 6 {
            0 => {
                let id = arena.insert(value);
                assert!(!live.iter().any(|&(other, _)| other == id));
                live.push((id, value));
                assert_eq!(arena.get(id), Some(&value));
            },
            1 => {
                if !live.is_empty() {
                    let (id, expected) = live.swap_remove(value as usize % live.len());
                    assert_eq!(arena.remove(id), Some(expected));
                    assert!(!arena.contains(id));
                    assert_eq!(arena.remove(id), None);
                }
            },
            2 => {
                if !live.is_empty() {
                    let pos = value as usize % live.len();
                    let id = live[pos].0;
                    if let Some(slot) = arena.get_mut(id) {
                        *slot = value;
                    }
                    live[pos].1 = value;
                    assert_eq!(arena.get(id), Some(&value));
                }
            },
            3 => {
                assert_eq!(arena.iter().count(), arena.len());
            },
            4 => {
                for &(id, expected) in &live {
                    assert_eq!(arena.get(id), Some(&expected));
                }
            },
            5 => {
                arena.clear();
                live.clear();
                assert!(arena.is_empty());
            },
            _ => unreachable!(),
        }

        assert_eq!(arena.len(), live.len());
    }
});
