//! Subtree collection into an owned snapshot.

use alloc::vec::Vec;

use super::node::Level;
use crate::primitives::Flatten;
use crate::snapshot::Snapshot;

/// Suffix key tuple produced when collecting below node `N`.
pub type SuffixOf<N> = <<N as Level>::Path as Flatten>::Tuple;

/// Enumerate every live leaf below `node`, pairing each cloned value with the
/// keys that lead to it from `node` (not from the root).
///
/// Entries come out in lexicographic key order. Nothing is cached: every call
/// walks the subtree again.
pub fn collect<N>(node: &N) -> Snapshot<SuffixOf<N>, N::Value>
where
    N: Level,
    N::Path: Flatten,
    N::Value: Clone,
{
    let mut keys = Vec::new();
    let mut values = Vec::new();
    node.walk(&mut |path: N::Path, value: &N::Value| {
        keys.push(path.flatten());
        values.push(value.clone());
    });
    trace!(depth = N::DEPTH, entries = values.len(), "collected subtree");
    Snapshot::from_parts(keys, values)
}
