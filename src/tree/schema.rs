//! Schema resolution: from a tuple of types to a nested node type.
//!
//! The last element of the schema tuple is the value type, everything before
//! it is a key level:
//!
//! ```text
//! (K1, K2, K3, V)
//!   Root  = Branch<K1, Branch<K2, Branch<K3, Leaf<V>>>>
//!   Keys  = (K1, K2, K3)
//!   Init  = HCons<K1, HCons<K2, HNil>>
//!   Last  = K3
//! ```

use super::descend::Vivify;
use super::node::{Branch, Leaf, Level};
use crate::primitives::{HCons, HNil};

/// A key schema `(K1, ..., Kn, V)` with 1 to 12 keys.
///
/// Implemented for every supported tuple; there is nothing to implement by
/// hand. A tuple with only a value and no key is rejected:
///
/// ```compile_fail,E0277
/// use multikey_map::MultiKeyMap;
///
/// let map: MultiKeyMap<(i32,)> = MultiKeyMap::new();
/// ```
///
/// So is a key type without an ordering:
///
/// ```compile_fail,E0277
/// use multikey_map::MultiKeyMap;
///
/// struct Unordered;
/// let map: MultiKeyMap<(Unordered, i32)> = MultiKeyMap::new();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a key schema",
    label = "expected a tuple of 1 to 12 key types followed by the value type",
    note = "a schema looks like `(K1, K2, V)`; every key type must be `Ord + Clone`"
)]
pub trait Schema {
    /// Full key tuple `(K1, ..., Kn)`.
    type Keys;

    /// Stored value type.
    type Value;

    /// Path through every key level but the last.
    type Init;

    /// Key of the last level.
    type Last: Ord + Clone;

    /// Root node of the nested structure.
    type Root: Level<Value = Self::Value>
        + Default
        + Vivify<Self::Init, Target = Branch<Self::Last, Leaf<Self::Value>>>;

    /// Number of key levels.
    const ARITY: usize;

    /// Separate a full key tuple into the keys to descend through and the
    /// terminal key.
    fn split(keys: Self::Keys) -> (Self::Init, Self::Last);
}

// =============================================================================
// Convenience Type Aliases
// =============================================================================

/// Root node type of schema `S`.
pub type Tree<S> = <S as Schema>::Root;

/// Full key tuple of schema `S`.
pub type Keys<S> = <S as Schema>::Keys;

/// Value type of schema `S`.
pub type Value<S> = <S as Schema>::Value;

// Generates Schema for (K1, V), (K1, K2, V), ..., (K1, ..., K12, V)
macros::schemas!(12);
