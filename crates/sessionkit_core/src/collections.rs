//! Shared empty collection singletons.
//!
//! These are the only collections the detector treats as immutable: they hold
//! nothing and expose no mutating API. General collections (`Vec`, `HashMap`,
//! `HashSet`, ...) are always classified as mutable.

/// Empty, read-only list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptyList;

/// Empty, read-only map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptyMap;

/// Empty, read-only set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptySet;

/// Process-wide empty list.
pub static EMPTY_LIST: EmptyList = EmptyList;
/// Process-wide empty map.
pub static EMPTY_MAP: EmptyMap = EmptyMap;
/// Process-wide empty set.
pub static EMPTY_SET: EmptySet = EmptySet;

impl EmptyList {
    pub fn len(&self) -> usize {
        0
    }

    pub fn is_empty(&self) -> bool {
        true
    }

    /// Always `None`.
    pub fn get(&self, _index: usize) -> Option<&'static ()> {
        None
    }
}

impl EmptyMap {
    pub fn len(&self) -> usize {
        0
    }

    pub fn is_empty(&self) -> bool {
        true
    }

    pub fn contains_key<K: ?Sized>(&self, _key: &K) -> bool {
        false
    }
}

impl EmptySet {
    pub fn len(&self) -> usize {
        0
    }

    pub fn is_empty(&self) -> bool {
        true
    }

    pub fn contains<T: ?Sized>(&self, _value: &T) -> bool {
        false
    }
}
