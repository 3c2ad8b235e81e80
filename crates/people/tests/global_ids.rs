use rollcall_core::Entity;
use rollcall_people::{Person, PersonId, PersonRegistry};

// Only test in this binary: it owns the process-wide registry.
#[test]
fn process_wide_ids_start_at_zero_and_stay_dense() {
    const N: u64 = 100;

    let ids: Vec<u64> = (0..N)
        .map(|i| Person::new(format!("p{i}"), None).id().get())
        .collect();
    assert_eq!(ids, (0..N).collect::<Vec<_>>());

    // Creating through the registry handle continues the same sequence.
    let alice = Person::new("Alice", None);
    let bob = PersonRegistry::global().create("Bob", None);
    assert_eq!(alice.id(), PersonId::from_raw(N));
    assert_eq!(bob.id(), PersonId::from_raw(N + 1));
    assert_ne!(alice.id(), bob.id());
    assert_eq!(PersonRegistry::global().issued(), N + 2);
}
