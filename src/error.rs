//! Lookup failure.

use core::fmt;

/// A checked lookup found no entry for one of the supplied keys.
///
/// `level` is the 0-based position, within the key tuple, of the first key
/// that had no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyNotFound {
    pub level: usize,
}

impl fmt::Display for KeyNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no entry for the key at level {}", self.level)
    }
}

impl core::error::Error for KeyNotFound {}
