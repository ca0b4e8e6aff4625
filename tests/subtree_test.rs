//! Subtree collection: prefix queries at every depth, ordering, and the
//! empty levels that `values` leaves behind.

use multikey_map::prelude::*;

type Catalog = MultiKeyMap<(&'static str, u16, char, f32)>;

fn catalog() -> Catalog {
    let mut map = Catalog::new();
    // Inserted out of order on purpose
    map.insert(("tools", 20, 'b'), 2.5);
    map.insert(("books", 7, 'a'), 9.0);
    map.insert(("tools", 3, 'z'), 1.0);
    map.insert(("tools", 20, 'a'), 4.0);
    map.insert(("books", 7, 'c'), 8.0);
    map
}

// =============================================================================
// Prefix depth
// =============================================================================

#[test]
fn test_empty_prefix_is_everything() {
    let map = catalog();
    let all = map.query(());
    assert_eq!(
        all.keys(),
        [
            ("books", 7, 'a'),
            ("books", 7, 'c'),
            ("tools", 3, 'z'),
            ("tools", 20, 'a'),
            ("tools", 20, 'b'),
        ]
    );
    assert_eq!(all.values(), [9.0, 8.0, 1.0, 4.0, 2.5]);
    assert_eq!(all.len(), map.len());
}

#[test]
fn test_one_key_prefix() {
    let map = catalog();
    let tools = map.query(("tools",));
    assert_eq!(tools.keys(), [(3, 'z'), (20, 'a'), (20, 'b')]);
    assert_eq!(tools.values(), [1.0, 4.0, 2.5]);
}

#[test]
fn test_two_key_prefix() {
    let map = catalog();
    let shelf = map.query(("tools", 20u16));
    assert_eq!(shelf.keys(), [('a',), ('b',)]);
    assert_eq!(shelf.values(), [4.0, 2.5]);
}

#[test]
fn test_full_key_prefix() {
    let map = catalog();
    let one = map.query(("books", 7u16, 'c'));
    assert_eq!(one.keys(), [()]);
    assert_eq!(one.values(), [8.0]);

    assert!(map.query(("books", 7u16, 'q')).is_empty());
}

#[test]
fn test_iter_pairs() {
    let map = catalog();
    let pairs: Vec<_> = map
        .query(("books",))
        .iter()
        .map(|(keys, value)| (*keys, *value))
        .collect();
    assert_eq!(pairs, [((7, 'a'), 9.0), ((7, 'c'), 8.0)]);
}

// =============================================================================
// Repeatability
// =============================================================================

#[test]
fn test_values_is_repeatable() {
    let mut map = catalog();
    let first = map.values(("tools",));
    let second = map.values(("tools",));
    assert_eq!(first, second);
    assert_eq!(map.query(("tools",)), first);
}

// =============================================================================
// Level creation
// =============================================================================

#[test]
fn test_values_creates_levels_query_does_not() {
    let mut map = catalog();
    let before = map.node_count();

    assert!(map.query(("garden", 1u16)).is_empty());
    assert_eq!(map.node_count(), before);

    assert!(map.values(("garden", 1u16)).is_empty());
    assert_eq!(map.node_count(), before + 2);
    assert_eq!(map.len(), 5);

    // The created levels are empty, so they add no entries anywhere
    assert_eq!(map.query(()).len(), 5);
    assert!(!map.test(("garden", 1, 'a')));
}

#[test]
fn test_values_on_unseen_prefix_stores_nothing() {
    let mut map = catalog();

    map.values(());
    assert_eq!(map.len(), map.query(()).len());

    map.values(("garden",));
    assert_eq!(map.len(), map.query(()).len());

    map.values(("garden", 4u16));
    map.values(("tools", 99u16));
    assert_eq!(map.len(), map.query(()).len());
    assert_eq!(map.len(), 5);

    map.begin(("cellar", 1u16));
    map.end(("attic", 2u16));
    assert_eq!(map.len(), map.query(()).len());
    assert_eq!(map.len(), 5);
    assert!(!map.test(("garden", 4, 'a')));
    assert!(map.query(("cellar", 1u16)).is_empty());
}

#[test]
fn test_begin_end_on_unseen_prefix() {
    let mut map = catalog();
    let begin = map.begin(("garden",));
    assert!(begin.is_end());
    assert!(begin == map.end(("garden",)));
}

#[test]
fn test_erased_subtree_keeps_levels_until_pruned() {
    let mut map = catalog();
    let before = map.node_count();

    for keys in [("tools", 3, 'z'), ("tools", 20, 'a'), ("tools", 20, 'b')] {
        assert!(map.erase(keys));
    }

    assert!(map.values(("tools",)).is_empty());
    assert!(map.query(("tools", 20u16)).is_empty());
    assert_eq!(map.node_count(), before);
    assert_eq!(map.len(), 2);

    // "tools" level, plus its "3" and "20" children
    assert_eq!(map.prune(), 3);
    assert_eq!(map.node_count(), before - 3);
    assert_eq!(map.prune(), 0);
    assert_eq!(map.query(()).len(), 2);
}

// =============================================================================
// Walking the structure directly
// =============================================================================

#[test]
fn test_root_levels() {
    let map = catalog();
    let root = map.root();
    assert_eq!(root.len(), 2);
    let books = root.get(&"books").unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books.get(&7).map(|shelf| shelf.len()), Some(2));
}
