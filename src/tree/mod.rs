//! # Layer 1: Tree Core
//!
//! The nested map-of-maps and the recursion over it.
//!
//! - **Nodes**: `Branch` (one key level), `Leaf` (stored value), `Level` (per-node recursion).
//! - **Traversal**: `Descend` (checked), `Vivify` (creates missing levels).
//! - **Collection**: `collect` (subtree → owned snapshot).
//! - **Schema**: `Schema` resolves `(K1, ..., Kn, V)` into `Branch<K1, ... Leaf<V>>`.

pub mod collect;
pub mod descend;
pub mod node;
pub mod schema;

pub use collect::{collect, SuffixOf};
pub use descend::{Descend, Miss, Vivify};
pub use node::{Branch, Leaf, Level};
pub use schema::{Keys, Schema, Tree, Value};
