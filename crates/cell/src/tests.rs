use super::*;

#[test]
fn alloc_and_get() {
    let mut arena = CellArena::new();
    let id = arena.alloc(42u64);
    assert_eq!(arena.len(), 1);
    assert_eq!(arena.get(id), Some(&42));
}

#[test]
fn handles_are_ordered_by_allocation() {
    let mut arena = CellArena::new();
    let a = arena.alloc("a");
    let b = arena.alloc("b");
    let c = arena.alloc("c");
    assert!(a < b);
    assert!(b < c);
}

#[test]
fn cells_survive_later_allocations() {
    let mut arena = CellArena::new();
    let first = arena.alloc("first".to_string());
    // Grow well past the initial capacity so the backing storage reallocates.
    for i in 0..10_000 {
        arena.alloc(format!("v{}", i));
    }
    assert_eq!(arena.get(first), Some(&"first".to_string()));
}

#[test]
fn get_foreign_handle_returns_none() {
    let mut donor = CellArena::new();
    donor.alloc(1);
    let stale = donor.alloc(2);

    let receiver: CellArena<i32> = CellArena::new();
    assert!(receiver.get(stale).is_none());
}

#[test]
fn resolve_returns_payload() {
    let mut arena = CellArena::new();
    let id = arena.alloc(vec![1u8, 2, 3]);
    assert_eq!(arena.resolve(id), &vec![1u8, 2, 3]);
}

#[test]
#[should_panic]
fn resolve_foreign_handle_panics() {
    let mut donor = CellArena::new();
    let id = donor.alloc(1);
    let empty: CellArena<i32> = CellArena::new();
    let _ = empty.resolve(id);
}

#[test]
fn with_capacity_starts_empty() {
    let arena: CellArena<String> = CellArena::with_capacity(128);
    assert!(arena.is_empty());
    assert_eq!(arena.len(), 0);
}

#[test]
fn index_matches_allocation_order() {
    let mut arena = CellArena::new();
    for i in 0..100usize {
        let id = arena.alloc(i);
        assert_eq!(id.index(), i);
    }
}

#[test]
fn same_handle_resolves_identically_twice() {
    let mut arena = CellArena::new();
    let id = arena.alloc("stable".to_string());
    let a = arena.get(id);
    let b = arena.get(id);
    assert_eq!(a, b);
}

#[test]
fn default_is_empty() {
    let arena: CellArena<u8> = CellArena::default();
    assert!(arena.is_empty());
}
