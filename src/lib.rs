#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, links std (the crate only ever needs alloc)
// - tracing: TRACE events for level creation, removal, pruning, collection

//! # multikey-map
//!
//! A map indexed by a compile-time sequence of heterogeneous keys.
//!
//! `MultiKeyMap<(K1, K2, ..., Kn, V)>` looks like one map keyed by
//! `(K1, ..., Kn)`, but is stored as ordered maps nested one per key level.
//! Supplying only the first few keys selects a whole subtree.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - HNil / HCons key paths, tuple <-> path conversion              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Tree Core                                               |
//! |  - Branch, Leaf, Level (nodes)                                    |
//! |  - Descend, Vivify (traversal), collect (subtree enumeration)     |
//! |  - Schema (tuple of types -> nested node type)                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - MultiKeyMap, Snapshot, Cursor, KeyNotFound                     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Schema resolution
//!
//! The schema is a plain tuple; the last element is the value type:
//!
//! ```text
//! (String, u32, bool, f64)
//!   -> Branch<String, Branch<u32, Branch<bool, Leaf<f64>>>>
//! ```
//!
//! Schemas with 1 to 12 keys are supported. Every key type must be
//! `Ord + Clone`.
//!
//! ## Quick Start
//!
//! ```
//! use multikey_map::prelude::*;
//!
//! let mut scores: MultiKeyMap<(String, u32, u64)> = MultiKeyMap::new();
//! scores.insert(("alice".to_string(), 1), 90);
//! scores.insert(("alice".to_string(), 2), 75);
//! scores.insert(("bob".to_string(), 1), 60);
//!
//! // Exact access
//! assert_eq!(scores[("bob".to_string(), 1)], 60);
//! *scores.access(("bob".to_string(), 2)) += 5;
//!
//! // Subtree query: everything under "alice"
//! let alice = scores.query(("alice".to_string(),));
//! assert_eq!(alice.keys(), [(1,), (2,)]);
//! assert_eq!(alice.values(), [90, 75]);
//!
//! // Snapshots are detached from the map
//! scores.erase(("alice".to_string(), 1));
//! assert_eq!(alice.len(), 2);
//! assert_eq!(scores.query(("alice".to_string(),)).len(), 1);
//! ```

extern crate alloc;

// =============================================================================
// Logging
// =============================================================================

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => { ::tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Tree Core
// =============================================================================
pub mod tree;

// =============================================================================
// Layer 2: User API
// =============================================================================
pub mod error;
pub mod map;
pub mod snapshot;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use error::KeyNotFound;
pub use map::{MultiKeyMap, Subtree, Suffix};
pub use primitives::{Flatten, HCons, HNil, IntoPath, PathLen};
pub use snapshot::{Cursor, Snapshot};
pub use tree::{Branch, Descend, Keys, Leaf, Level, Schema, Tree, Value, Vivify};

/// Common items for working with the map.
pub mod prelude {
    pub use crate::error::KeyNotFound;
    pub use crate::map::MultiKeyMap;
    pub use crate::snapshot::{Cursor, Snapshot};
    pub use crate::tree::Schema;
}
