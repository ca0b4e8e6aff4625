//! The reference walkthrough: schema `(String, String, i32)` with three entries.

use multikey_map::prelude::*;

type Names = MultiKeyMap<(String, String, i32)>;

fn s(v: &str) -> String {
    v.to_string()
}

fn sample() -> Names {
    let mut map = Names::new();
    *map.access((s("a"), s("x"))) = 1;
    *map.access((s("a"), s("y"))) = 2;
    *map.access((s("b"), s("x"))) = 3;
    map
}

// =============================================================================
// Exact access
// =============================================================================

#[test]
fn test_at_returns_written_value() {
    let map = sample();
    assert_eq!(map.at((s("a"), s("x"))), Ok(&1));
    assert_eq!(map.at((s("a"), s("y"))), Ok(&2));
    assert_eq!(map.at((s("b"), s("x"))), Ok(&3));
    assert_eq!(map.len(), 3);
}

// =============================================================================
// Subtree queries
// =============================================================================

#[test]
fn test_values_under_first_key() {
    let mut map = sample();
    let below_a = map.values((s("a"),));
    assert_eq!(below_a.keys(), [(s("x"),), (s("y"),)]);
    assert_eq!(below_a.values(), [1, 2]);
}

#[test]
fn test_values_with_empty_prefix() {
    let mut map = sample();
    let all = map.values(());
    assert_eq!(
        all.keys(),
        [(s("a"), s("x")), (s("a"), s("y")), (s("b"), s("x"))]
    );
    assert_eq!(all.values(), [1, 2, 3]);
}

// =============================================================================
// Erase
// =============================================================================

#[test]
fn test_erase_leaves_siblings() {
    let mut map = sample();
    assert!(map.erase((s("a"), s("x"))));
    assert!(!map.test((s("a"), s("x"))));
    assert!(map.test((s("a"), s("y"))));
    assert_eq!(map.len(), 2);
}

// =============================================================================
// Absence
// =============================================================================

#[test]
fn test_absent_keys() {
    let mut map = sample();
    assert_eq!(map.at((s("z"), s("q"))), Err(KeyNotFound { level: 0 }));
    assert!(map.find((s("z"), s("q"))) == map.end(()));
    assert!(map.find((s("a"), s("x"))) != map.end(()));
}
