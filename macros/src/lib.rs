//! Procedural macros for multikey-map
//!
//! These generate the per-arity trait impls that plain generics cannot
//! express: converting flat tuples to cons-list key paths and back, and
//! resolving a schema tuple `(K1, ..., Kn, V)` into its nested node type.
//!
//! | Macro | Emits |
//! |-------|-------|
//! | `tuple_paths!(N)` | `IntoPath` for tuples of 0..=N elements, `Flatten` for cons paths of 0..=N keys |
//! | `schemas!(N)` | `Schema` for tuples of 1..=N keys plus a value |
//!
//! Both are invoked exactly once, from inside `multikey-map`, where the names
//! they emit (`HCons`, `HNil`, `Branch`, `Leaf`, ...) are in scope.

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod inner;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate tuple ⇄ key path conversions up to the given arity.
///
/// # Usage
/// ```ignore
/// tuple_paths!(12);  // (), (T1,), ..., (T1, ..., T12)
/// ```
#[proc_macro]
pub fn tuple_paths(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::ArityInput);
    inner::tuple_paths::expand_tuple_paths(input).into()
}

/// Generate `Schema` impls for 1..=N keys.
///
/// # Usage
/// ```ignore
/// schemas!(12);  // (K1, V), (K1, K2, V), ..., (K1, ..., K12, V)
/// ```
#[proc_macro]
pub fn schemas(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::ArityInput);
    inner::schema::expand_schemas(input).into()
}
