//! Key paths: runtime keys held in a type-level cons list.
//!
//! A caller hands the container a flat tuple `(K1, K2, ...)`. Traversal needs
//! to peel one key per level, so tuples are converted to `HCons<K1, HCons<K2,
//! HNil>>` on the way in ([`IntoPath`]) and collected suffix paths are turned
//! back into tuples on the way out ([`Flatten`]).

/// Empty key path (no levels left to descend).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HNil;

/// Key path cell: the key for the current level, then the rest of the path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

impl<H, T> HCons<H, T> {
    #[inline]
    pub const fn new(head: H, tail: T) -> Self {
        HCons { head, tail }
    }
}

/// Number of keys in a path, known at compile time.
pub trait PathLen {
    const LEN: usize;
}

impl PathLen for HNil {
    const LEN: usize = 0;
}

impl<H, T: PathLen> PathLen for HCons<H, T> {
    const LEN: usize = T::LEN + 1;
}

/// Flat tuple → key path.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a key tuple",
    label = "expected a tuple of keys such as `()`, `(k1,)` or `(k1, k2)`",
    note = "key tuples hold at most 12 keys; a single key still needs the trailing comma: `(k,)`"
)]
pub trait IntoPath {
    type Path: PathLen;
    fn into_path(self) -> Self::Path;
}

/// Key path → flat tuple.
pub trait Flatten {
    type Tuple;
    fn flatten(self) -> Self::Tuple;
}

// Generates IntoPath for (), (T1,), ..., (T1, ..., T12)
// and Flatten for HNil, HCons<T1, HNil>, ...
macros::tuple_paths!(12);
