use std::collections::HashSet;
use std::thread;

use rollcall_core::Entity;
use rollcall_people::{Person, PersonRegistry};

const THREADS: u64 = 8;
const PER_THREAD: u64 = 1_000;

// Only test in this binary: it owns the process-wide registry.
#[test]
fn concurrent_creates_get_unique_dense_ids() {
    let ids: Vec<u64> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                s.spawn(move || {
                    (0..PER_THREAD)
                        .map(|i| Person::new(format!("t{t}-{i}"), Some(i as u32)).id().get())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let total = THREADS * PER_THREAD;
    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(ids.len() as u64, total);
    assert_eq!(unique, (0..total).collect::<HashSet<_>>());
    assert_eq!(PersonRegistry::global().issued(), total);
}
