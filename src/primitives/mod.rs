//! # Layer 0: Primitives
//!
//! - `path.rs`: key paths (`HNil` / `HCons`) and tuple conversions.

pub mod path;

pub use path::{Flatten, HCons, HNil, IntoPath, PathLen};
