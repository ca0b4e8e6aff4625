//! Traversal: applying a key path to descend through levels
//!
//! Two flavours, both recursive over the path:
//! - [`Descend`] looks children up and stops at the first missing key.
//! - [`Vivify`] creates any missing child on the way down and never fails.

use alloc::collections::btree_map::Entry;

use super::node::{Branch, Level};
use crate::primitives::{HCons, HNil};

/// A key had no entry during a checked descent.
///
/// Records the remaining depth of the branch whose lookup failed; the
/// container turns that into an absolute level for [`KeyNotFound`].
///
/// [`KeyNotFound`]: crate::KeyNotFound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Miss {
    pub depth: usize,
}

// =============================================================================
// Descend (checked)
// =============================================================================

/// Checked descent along path `P`. Never creates nodes.
pub trait Descend<P> {
    /// Node reached after consuming every key in `P`.
    type Target: Level;

    fn descend(&self, path: &P) -> Result<&Self::Target, Miss>;

    fn descend_mut(&mut self, path: &P) -> Result<&mut Self::Target, Miss>;
}

// Empty path: the node itself
impl<N: Level> Descend<HNil> for N {
    type Target = N;

    #[inline]
    fn descend(&self, _path: &HNil) -> Result<&N, Miss> {
        Ok(self)
    }

    #[inline]
    fn descend_mut(&mut self, _path: &HNil) -> Result<&mut N, Miss> {
        Ok(self)
    }
}

// One key, then the rest of the path in the child
impl<K, N, P> Descend<HCons<K, P>> for Branch<K, N>
where
    K: Ord + Clone,
    N: Level + Descend<P>,
{
    type Target = <N as Descend<P>>::Target;

    fn descend(&self, path: &HCons<K, P>) -> Result<&Self::Target, Miss> {
        let child = self.get(&path.head).ok_or(Miss { depth: Self::DEPTH })?;
        child.descend(&path.tail)
    }

    fn descend_mut(&mut self, path: &HCons<K, P>) -> Result<&mut Self::Target, Miss> {
        let child = self.get_mut(&path.head).ok_or(Miss { depth: Self::DEPTH })?;
        child.descend_mut(&path.tail)
    }
}

// =============================================================================
// Vivify (mutating)
// =============================================================================

/// Mutating descent along path `P`: missing children are default-constructed
/// and inserted, so a usable target always comes back.
pub trait Vivify<P>: Descend<P> {
    fn vivify(&mut self, path: P) -> &mut Self::Target;
}

impl<N: Level> Vivify<HNil> for N {
    #[inline]
    fn vivify(&mut self, _path: HNil) -> &mut N {
        self
    }
}

impl<K, N, P> Vivify<HCons<K, P>> for Branch<K, N>
where
    K: Ord + Clone,
    N: Level + Default + Vivify<P>,
{
    fn vivify(&mut self, path: HCons<K, P>) -> &mut Self::Target {
        let HCons { head, tail } = path;
        let child = match self.entry(head) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                trace!(depth = N::DEPTH, "created map level");
                slot.insert(N::default())
            }
        };
        child.vivify(tail)
    }
}
