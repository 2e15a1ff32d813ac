//! Immutability marker conventions.
//!
//! # Responsibility
//! - Declare the crate's own `Immutable` marker trait.
//! - Recognize `zerocopy::Immutable` as an equivalent third-party marker.
//! - Collect marks declared with [`crate::mark_immutable!`] and
//!   [`crate::mark_zerocopy_immutable!`] at link time.
//! - Record marked types per convention for `TypeId` lookup.
//!
//! # Invariants
//! - A type can only be recorded under a convention whose trait it implements.
//! - Declared marks are fixed before `main`; no query can observe a change.
//! - Conventions are checked in declaration order; the first match wins.
//! - Marks are trusted; the detector never verifies them.

use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// Marker asserting that instances of a type never change observable state
/// after construction.
///
/// Declare it with [`crate::mark_immutable!`], which writes the impl and
/// publishes the type to the process-wide detector. A bare `impl` is only seen
/// by detectors built with [`crate::MutabilityDetectorBuilder::mark`].
pub trait Immutable: Any {}

/// Source of an immutability marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkerConvention {
    /// `sessionkit_core::Immutable`.
    Native,
    /// `zerocopy::Immutable`.
    Zerocopy,
}

impl MarkerConvention {
    /// Evaluation order used by marker lookup.
    pub const ALL: [MarkerConvention; 2] = [Self::Native, Self::Zerocopy];

    /// Stable id used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Zerocopy => "zerocopy",
        }
    }
}

impl Display for MarkerConvention {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One link-time mark emitted by the marking macros.
#[doc(hidden)]
pub struct DeclaredMark {
    convention: MarkerConvention,
    type_id: fn() -> TypeId,
}

impl DeclaredMark {
    #[doc(hidden)]
    pub const fn new(convention: MarkerConvention, type_id: fn() -> TypeId) -> Self {
        Self {
            convention,
            type_id,
        }
    }
}

inventory::collect!(DeclaredMark);

static DECLARED: Lazy<MarkerTable> = Lazy::new(|| {
    let mut table = MarkerTable::default();
    table.extend_declared();
    table
});

/// Implements [`Immutable`] for each type and declares it to the
/// process-wide detector.
///
/// ```
/// use sessionkit_core::{is_mutable, mark_immutable};
///
/// struct SessionToken(u64);
/// mark_immutable!(SessionToken);
///
/// assert!(!is_mutable(Some(&SessionToken(7))));
/// ```
#[macro_export]
macro_rules! mark_immutable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Immutable for $ty {}

            const _: () = {
                fn declared_type_id() -> ::core::any::TypeId {
                    ::core::any::TypeId::of::<$ty>()
                }

                $crate::__private::inventory::submit! {
                    $crate::marker::DeclaredMark::new(
                        $crate::MarkerConvention::Native,
                        declared_type_id,
                    )
                }
            };
        )+
    };
}

/// Declares types deriving `zerocopy::Immutable` to the process-wide
/// detector.
///
/// Fails to compile for a type that does not implement `zerocopy::Immutable`.
#[macro_export]
macro_rules! mark_zerocopy_immutable {
    ($($ty:ty),+ $(,)?) => {
        $(
            const _: () = {
                fn declared_type_id() -> ::core::any::TypeId {
                    fn assert_marked<T: $crate::__private::zerocopy::Immutable + ?Sized>() {}
                    assert_marked::<$ty>();
                    ::core::any::TypeId::of::<$ty>()
                }

                $crate::__private::inventory::submit! {
                    $crate::marker::DeclaredMark::new(
                        $crate::MarkerConvention::Zerocopy,
                        declared_type_id,
                    )
                }
            };
        )+
    };
}

/// Marks collected from every linked `mark_*` macro invocation.
pub(crate) fn declared_marks() -> &'static MarkerTable {
    &DECLARED
}

#[derive(Debug, Clone)]
struct MarkedTypes {
    convention: MarkerConvention,
    types: HashSet<TypeId>,
}

/// Marked types grouped by convention.
#[derive(Debug, Clone)]
pub(crate) struct MarkerTable {
    entries: Vec<MarkedTypes>,
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self {
            entries: MarkerConvention::ALL
                .iter()
                .map(|&convention| MarkedTypes {
                    convention,
                    types: HashSet::new(),
                })
                .collect(),
        }
    }
}

impl MarkerTable {
    pub(crate) fn insert_native<T: Immutable>(&mut self) {
        self.insert(MarkerConvention::Native, TypeId::of::<T>());
    }

    pub(crate) fn insert_zerocopy<T: zerocopy::Immutable + Any>(&mut self) {
        self.insert(MarkerConvention::Zerocopy, TypeId::of::<T>());
    }

    pub(crate) fn extend_declared(&mut self) {
        for mark in inventory::iter::<DeclaredMark> {
            self.insert(mark.convention, (mark.type_id)());
        }
    }

    pub(crate) fn merge(&mut self, other: &MarkerTable) {
        for entry in &other.entries {
            for type_id in &entry.types {
                self.insert(entry.convention, *type_id);
            }
        }
    }

    fn insert(&mut self, convention: MarkerConvention, type_id: TypeId) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.convention == convention)
        {
            entry.types.insert(type_id);
        }
    }

    /// Returns the first convention marking `type_id`.
    pub(crate) fn lookup(&self, type_id: TypeId) -> Option<MarkerConvention> {
        self.entries
            .iter()
            .find(|entry| entry.types.contains(&type_id))
            .map(|entry| entry.convention)
    }

    /// Number of distinct marked types across all conventions.
    pub(crate) fn len(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|entry| entry.types.iter())
            .collect::<HashSet<_>>()
            .len()
    }
}
