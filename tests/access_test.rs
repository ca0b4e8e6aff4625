//! Exact-key operations: access, insert, at, test, find, erase, remove.

use multikey_map::prelude::*;

type Grid = MultiKeyMap<(u8, char, &'static str, u32)>;

fn grid() -> Grid {
    [
        ((1, 'a', "x"), 10),
        ((1, 'a', "y"), 11),
        ((1, 'b', "x"), 12),
        ((2, 'a', "x"), 20),
    ]
    .into_iter()
    .collect()
}

// =============================================================================
// Creation
// =============================================================================

#[test]
fn test_access_creates_default() {
    let mut map = Grid::new();
    assert_eq!(*map.access((5, 'q', "new")), 0);
    assert!(map.test((5, 'q', "new")));
    assert_eq!(map.len(), 1);
    // root + one level per remaining key above the leaf
    assert_eq!(map.node_count(), 3);
}

#[test]
fn test_access_existing_does_not_grow() {
    let mut map = grid();
    *map.access((1, 'a', "x")) += 5;
    assert_eq!(map.at((1, 'a', "x")), Ok(&15));
    assert_eq!(map.len(), 4);
}

#[test]
fn test_get_or_insert_with_runs_once() {
    let mut map = Grid::new();
    let mut calls = 0;
    for _ in 0..3 {
        map.get_or_insert_with((7, 'z', "k"), || {
            calls += 1;
            99
        });
    }
    assert_eq!(calls, 1);
    assert_eq!(map[(7, 'z', "k")], 99);
}

#[test]
fn test_insert_replaces() {
    let mut map = grid();
    assert_eq!(map.insert((2, 'a', "x"), 21), Some(20));
    assert_eq!(map.insert((3, 'a', "x"), 30), None);
    assert_eq!(map.get((2, 'a', "x")), Some(&21));
    assert_eq!(map.len(), 5);
}

// =============================================================================
// Checked lookups
// =============================================================================

#[test]
fn test_at_reports_missing_level() {
    let map = grid();
    assert_eq!(map.at((9, 'a', "x")), Err(KeyNotFound { level: 0 }));
    assert_eq!(map.at((1, 'z', "x")), Err(KeyNotFound { level: 1 }));
    assert_eq!(map.at((1, 'a', "z")), Err(KeyNotFound { level: 2 }));
}

#[test]
fn test_checked_lookups_create_nothing() {
    let mut map = grid();
    let before = map.node_count();

    assert!(map.at((9, 'q', "x")).is_err());
    assert!(!map.test((9, 'q', "x")));
    assert!(map.get_mut((1, 'q', "x")).is_none());
    assert!(map.find((9, 'q', "x")).is_end());
    assert!(!map.erase((9, 'q', "x")));

    assert_eq!(map.node_count(), before);
    assert_eq!(map.len(), 4);
}

#[test]
fn test_at_mut_updates_in_place() {
    let mut map = grid();
    *map.at_mut((1, 'b', "x")).unwrap() = 0;
    assert_eq!(map[(1, 'b', "x")], 0);
}

#[test]
fn test_key_not_found_display() {
    let err = KeyNotFound { level: 2 };
    assert_eq!(err.to_string(), "no entry for the key at level 2");
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "no entry for the key at level 2");
}

#[test]
#[should_panic(expected = "no entry for the key at level 1")]
fn test_index_panics_on_miss() {
    let map = grid();
    let _value = &map[(1, 'q', "x")];
}

// =============================================================================
// find
// =============================================================================

#[test]
fn test_find_positions_on_value() {
    let map = grid();
    let mut cursor = map.find((1, 'a', "y"));
    assert_eq!(cursor.current(), Some(&11));
    assert_eq!(cursor.next(), Some(11));
    assert!(cursor.is_end());
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn test_erase_is_idempotent() {
    let mut map = grid();
    assert!(map.erase((1, 'a', "x")));
    assert!(!map.erase((1, 'a', "x")));
    assert!(!map.test((1, 'a', "x")));
    assert_eq!(map.len(), 3);
    assert_eq!(map.at((1, 'a', "y")), Ok(&11));
}

#[test]
fn test_remove_returns_value() {
    let mut map = grid();
    assert_eq!(map.remove((2, 'a', "x")), Some(20));
    assert_eq!(map.remove((2, 'a', "x")), None);
    assert_eq!(map.len(), 3);
}

#[test]
fn test_prune_after_erasing_everything() {
    let mut map = grid();
    let keys: Vec<_> = map.query(()).keys().to_vec();
    for key in keys {
        assert!(map.erase(key));
    }
    assert!(map.is_empty());
    assert!(map.node_count() > 1);

    map.prune();
    assert_eq!(map.node_count(), 1);
}

#[test]
fn test_clear() {
    let mut map = grid();
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.node_count(), 1);
    assert!(map.query(()).is_empty());
}
