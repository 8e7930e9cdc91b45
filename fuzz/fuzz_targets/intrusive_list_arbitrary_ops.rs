#![no_main]

use std::collections::VecDeque;

use cachepair::ds::{IntrusiveList, SlotId};
use libfuzzer_sys::fuzz_target;

// Arbitrary push/pop/move/remove sequences on IntrusiveList, compared with
// a VecDeque holding (handle, value) front to back.
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u8> = IntrusiveList::new();
    let mut model: VecDeque<(SlotId, u8)> = VecDeque::new();

    for chunk in data.chunks_exact(2) {
        let arg = chunk[1];

        match chunk[0] % 5 {
            0 => {
                let id = list.push_front(arg);
                model.push_front((id, arg));
            },
            1 => {
                let expected = model.pop_back().map(|(_, v)| v);
                assert_eq!(list.pop_back(), expected);
            },
            2 => {
                if !model.is_empty() {
                    let pos = arg as usize % model.len();
                    if let Some(entry) = model.remove(pos) {
                        assert!(list.move_to_front(entry.0));
                        model.push_front(entry);
                    }
                }
            },
            3 => {
                if !model.is_empty() {
                    let pos = arg as usize % model.len();
                    if let Some((id, value)) = model.remove(pos) {
                        assert_eq!(list.remove(id), Some(value));
                        assert!(!list.contains(id));
                    }
                }
            },
            4 => {
                list.clear();
                model.clear();
            },
            _ => unreachable!(),
        }

        list.debug_validate_invariants();
        assert_eq!(list.len(), model.len());
        assert_eq!(list.front_id(), model.front().map(|(id, _)| *id));
        assert_eq!(list.back_id(), model.back().map(|(id, _)| *id));
    }

    let order: Vec<u8> = list.iter().copied().collect();
    let expected: Vec<u8> = model.iter().map(|(_, v)| *v).collect();
    assert_eq!(order, expected);
});
