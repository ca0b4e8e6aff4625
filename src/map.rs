//! The nested-key map.

use alloc::collections::btree_map::Entry;
use alloc::vec;
use core::fmt;
use core::mem;
use core::ops::Index;

use crate::error::KeyNotFound;
use crate::primitives::{Flatten, IntoPath};
use crate::snapshot::{Cursor, Snapshot};
use crate::tree::{collect, Branch, Descend, Leaf, Level, Miss, Schema, SuffixOf, Tree, Vivify};

/// Node reached from the root of schema `S` by key prefix `P`.
pub type Subtree<S, P> = <Tree<S> as Descend<<P as IntoPath>::Path>>::Target;

/// Key tuple left over below prefix `P` of schema `S`.
///
/// For `S = (A, B, C, V)`: `Suffix<S, ()>` is `(A, B, C)`, `Suffix<S, (A,)>`
/// is `(B, C)`, and `Suffix<S, (A, B, C)>` is `()`.
pub type Suffix<S, P> = SuffixOf<Subtree<S, P>>;

/// A map indexed by a fixed sequence of heterogeneous keys.
///
/// The schema `S` is a tuple `(K1, ..., Kn, V)`: `n` key levels, then the
/// value type. Internally every level is an ordered map into the next, so a
/// prefix of the keys selects a whole subtree.
///
/// # Examples
///
/// ```
/// use multikey_map::MultiKeyMap;
///
/// let mut map: MultiKeyMap<(&str, &str, i32)> = MultiKeyMap::new();
/// map.insert(("a", "x"), 1);
/// map.insert(("a", "y"), 2);
/// map.insert(("b", "x"), 3);
///
/// assert_eq!(map.at(("a", "x")), Ok(&1));
/// assert!(!map.test(("b", "y")));
///
/// let below_a = map.values(("a",));
/// assert_eq!(below_a.keys(), [("x",), ("y",)]);
/// assert_eq!(below_a.values(), [1, 2]);
///
/// let everything = map.query(());
/// assert_eq!(everything.keys(), [("a", "x"), ("a", "y"), ("b", "x")]);
/// ```
///
/// # Empty levels
///
/// Removing a value never removes the levels above it. They stay allocated,
/// show up as empty subtrees, and count towards [`node_count`]. Call
/// [`prune`] to drop them explicitly.
///
/// [`node_count`]: MultiKeyMap::node_count
/// [`prune`]: MultiKeyMap::prune
pub struct MultiKeyMap<S: Schema> {
    root: Tree<S>,
    len: usize,
}

impl<S: Schema> MultiKeyMap<S> {
    pub fn new() -> Self {
        MultiKeyMap { root: <Tree<S> as Default>::default(), len: 0 }
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every value and every level.
    pub fn clear(&mut self) {
        self.root = <Tree<S> as Default>::default();
        self.len = 0;
    }

    /// The root level, for walking the structure directly.
    pub fn root(&self) -> &Tree<S> {
        &self.root
    }

    /// Allocated map levels, the root included. Empty levels left behind by
    /// removals are counted until [`prune`](Self::prune) drops them.
    pub fn node_count(&self) -> usize {
        self.root.nodes()
    }

    /// Drop every empty level below the root. Returns how many were dropped.
    pub fn prune(&mut self) -> usize {
        let removed = self.root.prune();
        trace!(removed, "pruned empty levels");
        removed
    }

    fn not_found(miss: Miss) -> KeyNotFound {
        KeyNotFound { level: S::ARITY - miss.depth }
    }

    /// Last key level along `init`, created on the way down if missing.
    fn last_level_mut(root: &mut Tree<S>, init: S::Init) -> &mut Branch<S::Last, Leaf<S::Value>> {
        <Tree<S> as Vivify<S::Init>>::vivify(root, init)
    }

    // =========================================================================
    // Element access
    // =========================================================================

    /// Value under `keys`, inserting the result of `make` first if absent.
    /// Missing levels along the way are created.
    pub fn get_or_insert_with<F>(&mut self, keys: S::Keys, make: F) -> &mut S::Value
    where
        F: FnOnce() -> S::Value,
    {
        let (init, last) = S::split(keys);
        match Self::last_level_mut(&mut self.root, init).entry(last) {
            Entry::Occupied(slot) => &mut slot.into_mut().0,
            Entry::Vacant(slot) => {
                self.len += 1;
                &mut slot.insert(Leaf(make())).0
            }
        }
    }

    /// Value under `keys`, inserting `V::default()` first if absent.
    pub fn access(&mut self, keys: S::Keys) -> &mut S::Value
    where
        S::Value: Default,
    {
        self.get_or_insert_with(keys, <S::Value as Default>::default)
    }

    /// Store `value` under `keys`, returning the value it replaced.
    pub fn insert(&mut self, keys: S::Keys, value: S::Value) -> Option<S::Value> {
        let (init, last) = S::split(keys);
        match Self::last_level_mut(&mut self.root, init).entry(last) {
            Entry::Occupied(mut slot) => Some(mem::replace(&mut slot.get_mut().0, value)),
            Entry::Vacant(slot) => {
                slot.insert(Leaf(value));
                self.len += 1;
                None
            }
        }
    }

    /// Value under `keys`. Creates nothing.
    ///
    /// # Errors
    ///
    /// [`KeyNotFound`] naming the first key level without an entry.
    pub fn at(&self, keys: S::Keys) -> Result<&S::Value, KeyNotFound> {
        let (init, last) = S::split(keys);
        let level = <Tree<S> as Descend<S::Init>>::descend(&self.root, &init)
            .map_err(Self::not_found)?;
        match level.get(&last) {
            Some(leaf) => Ok(&leaf.0),
            None => Err(KeyNotFound { level: S::ARITY - 1 }),
        }
    }

    /// Mutable value under `keys`. Creates nothing.
    ///
    /// # Errors
    ///
    /// [`KeyNotFound`] naming the first key level without an entry.
    pub fn at_mut(&mut self, keys: S::Keys) -> Result<&mut S::Value, KeyNotFound> {
        let (init, last) = S::split(keys);
        let level = <Tree<S> as Descend<S::Init>>::descend_mut(&mut self.root, &init)
            .map_err(Self::not_found)?;
        match level.get_mut(&last) {
            Some(leaf) => Ok(&mut leaf.0),
            None => Err(KeyNotFound { level: S::ARITY - 1 }),
        }
    }

    pub fn get(&self, keys: S::Keys) -> Option<&S::Value> {
        self.at(keys).ok()
    }

    pub fn get_mut(&mut self, keys: S::Keys) -> Option<&mut S::Value> {
        self.at_mut(keys).ok()
    }

    /// Whether a value is stored under `keys`.
    pub fn test(&self, keys: S::Keys) -> bool {
        self.at(keys).is_ok()
    }

    /// Cursor at the value under `keys`, or an exhausted cursor (equal to any
    /// `end`) when there is none.
    pub fn find(&self, keys: S::Keys) -> Cursor<S::Value>
    where
        S::Value: Clone,
    {
        match self.get(keys) {
            Some(value) => Snapshot::from_parts(vec![()], vec![value.clone()]).begin(),
            None => Cursor::empty(),
        }
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove and return the value under `keys`. The levels above it stay.
    pub fn remove(&mut self, keys: S::Keys) -> Option<S::Value> {
        let (init, last) = S::split(keys);
        let level = <Tree<S> as Descend<S::Init>>::descend_mut(&mut self.root, &init).ok()?;
        let Leaf(value) = level.remove(&last)?;
        self.len -= 1;
        trace!(level = S::ARITY - 1, "removed leaf");
        Some(value)
    }

    /// Remove the value under `keys`; `false` if there was none.
    pub fn erase(&mut self, keys: S::Keys) -> bool {
        self.remove(keys).is_some()
    }

    // =========================================================================
    // Subtree queries
    // =========================================================================

    /// Every value below `prefix`, with the keys after the prefix.
    ///
    /// Levels along `prefix` that do not exist yet are created (empty), which
    /// is visible through [`node_count`](Self::node_count). Use
    /// [`query`](Self::query) to leave the structure untouched.
    ///
    /// `prefix` holds at most every key but the last; a full key would have
    /// to create the value itself:
    ///
    /// ```compile_fail,E0277
    /// use multikey_map::MultiKeyMap;
    ///
    /// let mut map: MultiKeyMap<(&str, &str, i32)> = MultiKeyMap::new();
    /// map.values(("a", "x"));
    /// ```
    pub fn values<P>(&mut self, prefix: P) -> Snapshot<Suffix<S, P>, S::Value>
    where
        P: IntoPath,
        Tree<S>: Vivify<P::Path>,
        Subtree<S, P>: Level<Value = S::Value>,
        <Subtree<S, P> as Level>::Path: Flatten,
        S::Value: Clone,
    {
        let node = <Tree<S> as Vivify<P::Path>>::vivify(&mut self.root, prefix.into_path());
        collect(node)
    }

    /// Every value below `prefix`, with the keys after the prefix. Creates
    /// nothing; a prefix that leads nowhere gives an empty snapshot.
    pub fn query<P>(&self, prefix: P) -> Snapshot<Suffix<S, P>, S::Value>
    where
        P: IntoPath,
        Tree<S>: Descend<P::Path>,
        Subtree<S, P>: Level<Value = S::Value>,
        <Subtree<S, P> as Level>::Path: Flatten,
        S::Value: Clone,
    {
        match <Tree<S> as Descend<P::Path>>::descend(&self.root, &prefix.into_path()) {
            Ok(node) => collect(node),
            Err(_) => Snapshot::default(),
        }
    }

    /// Cursor at the first value below `prefix`. Same side effects and prefix
    /// limit as [`values`](Self::values).
    pub fn begin<P>(&mut self, prefix: P) -> Cursor<S::Value>
    where
        P: IntoPath,
        Tree<S>: Vivify<P::Path>,
        Subtree<S, P>: Level<Value = S::Value>,
        <Subtree<S, P> as Level>::Path: Flatten,
        S::Value: Clone,
    {
        let node = <Tree<S> as Vivify<P::Path>>::vivify(&mut self.root, prefix.into_path());
        collect(node).begin()
    }

    /// Cursor past the last value below `prefix`. Same side effects and prefix
    /// limit as [`values`](Self::values).
    pub fn end<P>(&mut self, prefix: P) -> Cursor<S::Value>
    where
        P: IntoPath,
        Tree<S>: Vivify<P::Path>,
        Subtree<S, P>: Level<Value = S::Value>,
        <Subtree<S, P> as Level>::Path: Flatten,
        S::Value: Clone,
    {
        let node = <Tree<S> as Vivify<P::Path>>::vivify(&mut self.root, prefix.into_path());
        collect(node).end()
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<S: Schema> Default for MultiKeyMap<S> {
    fn default() -> Self {
        MultiKeyMap::new()
    }
}

impl<S: Schema> Clone for MultiKeyMap<S>
where
    Tree<S>: Clone,
{
    fn clone(&self) -> Self {
        MultiKeyMap { root: self.root.clone(), len: self.len }
    }
}

impl<S: Schema> fmt::Debug for MultiKeyMap<S>
where
    Tree<S>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiKeyMap")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<S: Schema> Index<S::Keys> for MultiKeyMap<S> {
    type Output = S::Value;

    /// # Panics
    ///
    /// When no value is stored under `keys`.
    fn index(&self, keys: S::Keys) -> &S::Value {
        match self.at(keys) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<S: Schema> Extend<(S::Keys, S::Value)> for MultiKeyMap<S> {
    fn extend<I: IntoIterator<Item = (S::Keys, S::Value)>>(&mut self, iter: I) {
        for (keys, value) in iter {
            self.insert(keys, value);
        }
    }
}

impl<S: Schema> FromIterator<(S::Keys, S::Value)> for MultiKeyMap<S> {
    fn from_iter<I: IntoIterator<Item = (S::Keys, S::Value)>>(iter: I) -> Self {
        let mut map = MultiKeyMap::new();
        map.extend(iter);
        map
    }
}
