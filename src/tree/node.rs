//! Map node types: Branch, Leaf
//!
//! A schema `(K1, K2, V)` resolves to `Branch<K1, Branch<K2, Leaf<V>>>`.
//! Every level is an ordered map, so walking children in map order visits
//! keys in ascending order at every depth.

use alloc::collections::btree_map::{self, BTreeMap};

use crate::primitives::{HCons, HNil};

// =============================================================================
// Node Types
// =============================================================================

/// Terminal node holding one stored value. Only ever created with a value,
/// never defaulted, so descending through levels cannot store one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Leaf<V>(pub V);

/// One key level: an ordered map from `K` to the next level.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Branch<K, N> {
    entries: BTreeMap<K, N>,
}

impl<K, N> Default for Branch<K, N> {
    fn default() -> Self {
        Branch { entries: BTreeMap::new() }
    }
}

impl<K: core::fmt::Debug, N: core::fmt::Debug> core::fmt::Debug for Branch<K, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Ord, N> Branch<K, N> {
    /// Number of direct children (not leaves below).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&N> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut N> {
        self.entries.get_mut(key)
    }

    pub fn entry(&mut self, key: K) -> btree_map::Entry<'_, K, N> {
        self.entries.entry(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<N> {
        self.entries.remove(key)
    }

    /// Children in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, K, N> {
        self.entries.iter()
    }
}

// =============================================================================
// Level: per-node recursion
// =============================================================================

/// One level of the nested structure, with the operations that recurse over
/// everything below it.
///
/// `Leaf` is the base case; `Branch<K, N>` delegates to `N` for each child.
/// The recursion depth is fixed by the type, so it is always finite.
pub trait Level {
    /// Value stored at the leaves.
    type Value;

    /// Keys consumed between this node and a leaf.
    type Path;

    /// Key levels remaining below this node (0 for a leaf).
    const DEPTH: usize;

    /// Visit every live leaf in ascending key order with its suffix path.
    fn walk<F>(&self, f: &mut F)
    where
        F: FnMut(Self::Path, &Self::Value);

    /// Live leaves below this node.
    fn leaves(&self) -> usize;

    /// Allocated branch nodes, this one included.
    fn nodes(&self) -> usize;

    /// Drop every descendant branch that holds no leaves. Returns how many
    /// branch nodes were dropped. The node itself is never dropped.
    fn prune(&mut self) -> usize;

    /// A branch with no entries.
    fn is_vacant(&self) -> bool;
}

impl<V> Level for Leaf<V> {
    type Value = V;
    type Path = HNil;
    const DEPTH: usize = 0;

    #[inline]
    fn walk<F>(&self, f: &mut F)
    where
        F: FnMut(Self::Path, &Self::Value),
    {
        f(HNil, &self.0)
    }

    fn leaves(&self) -> usize {
        1
    }

    fn nodes(&self) -> usize {
        0
    }

    fn prune(&mut self) -> usize {
        0
    }

    fn is_vacant(&self) -> bool {
        false
    }
}

impl<K, N> Level for Branch<K, N>
where
    K: Ord + Clone,
    N: Level,
{
    type Value = N::Value;
    type Path = HCons<K, N::Path>;
    const DEPTH: usize = N::DEPTH + 1;

    fn walk<F>(&self, f: &mut F)
    where
        F: FnMut(Self::Path, &Self::Value),
    {
        for (key, child) in &self.entries {
            child.walk(&mut |rest, value| f(HCons::new(key.clone(), rest), value));
        }
    }

    fn leaves(&self) -> usize {
        self.entries.values().map(Level::leaves).sum()
    }

    fn nodes(&self) -> usize {
        1 + self.entries.values().map(Level::nodes).sum::<usize>()
    }

    fn prune(&mut self) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, child| {
            // Prune bottom-up so a branch emptied by its own pruning goes too
            let below = child.prune();
            removed += below;
            if child.is_vacant() {
                removed += child.nodes();
                false
            } else {
                true
            }
        });
        removed
    }

    fn is_vacant(&self) -> bool {
        self.entries.is_empty()
    }
}
