//! Mutability detector for values of unknown type.
//!
//! # Responsibility
//! - Decide whether a value is definitely immutable or possibly mutable.
//! - Serve the process-wide detector behind the free functions.
//!
//! # Invariants
//! - Classification is total: it never panics and never fails.
//! - Order is absence, then allow-list by exact type, then markers.
//! - Anything not proven immutable is reported as mutable.
//! - The process-wide detector sees exactly the marks declared with the
//!   `mark_*` macros; it has no install step and never changes.
//!
//! Checks are shallow: containers are not inspected element-wise.

use crate::known;
use crate::marker::{declared_marks, Immutable, MarkerConvention, MarkerTable};
use once_cell::sync::Lazy;
use std::any::Any;

static PROCESS: Lazy<MutabilityDetector> =
    Lazy::new(|| MutabilityDetector::builder().declared().build());

/// Reason behind one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No value was supplied.
    Absent,
    /// Concrete type is allow-listed; carries the type name.
    KnownImmutable(&'static str),
    /// Concrete type carries an immutability marker.
    Marked(MarkerConvention),
    /// Nothing proves immutability.
    Mutable,
}

impl Classification {
    /// `true` only for [`Classification::Mutable`].
    pub fn is_mutable(self) -> bool {
        matches!(self, Self::Mutable)
    }
}

/// Read-only detector combining the static allow-list with marked types.
///
/// `MutabilityDetector::default()` knows only the allow-list.
#[derive(Debug, Clone, Default)]
pub struct MutabilityDetector {
    markers: MarkerTable,
}

impl MutabilityDetector {
    /// Starts an empty builder; marks are added explicitly.
    pub fn builder() -> MutabilityDetectorBuilder {
        MutabilityDetectorBuilder::default()
    }

    /// Classifies `value` by its concrete type.
    ///
    /// Pass the value itself, not a box around it: for a `Box<dyn Any>` use
    /// `boxed.as_ref()`, otherwise the box type is what gets classified.
    pub fn classify(&self, value: Option<&dyn Any>) -> Classification {
        let Some(value) = value else {
            return Classification::Absent;
        };

        let type_id = value.type_id();
        if let Some(name) = known::known_immutable_name(type_id) {
            return Classification::KnownImmutable(name);
        }
        match self.markers.lookup(type_id) {
            Some(convention) => Classification::Marked(convention),
            None => Classification::Mutable,
        }
    }

    /// Returns `false` only when `value` is absent or provably immutable.
    pub fn is_mutable(&self, value: Option<&dyn Any>) -> bool {
        self.classify(value).is_mutable()
    }

    /// Number of types registered under any marker convention.
    pub fn marked_type_count(&self) -> usize {
        self.markers.len()
    }
}

/// Collects marked types for a [`MutabilityDetector`].
#[derive(Debug, Default)]
pub struct MutabilityDetectorBuilder {
    markers: MarkerTable,
}

impl MutabilityDetectorBuilder {
    /// Adds every mark declared with the `mark_*` macros.
    pub fn declared(mut self) -> Self {
        self.markers.merge(declared_marks());
        self
    }

    /// Registers a type implementing [`Immutable`].
    pub fn mark<T: Immutable>(mut self) -> Self {
        self.markers.insert_native::<T>();
        self
    }

    /// Registers a type implementing `zerocopy::Immutable`.
    pub fn mark_zerocopy<T: zerocopy::Immutable + Any>(mut self) -> Self {
        self.markers.insert_zerocopy::<T>();
        self
    }

    /// Freezes the collected marks into a detector.
    pub fn build(self) -> MutabilityDetector {
        MutabilityDetector {
            markers: self.markers,
        }
    }
}

/// Returns the process-wide detector: allow-list plus declared marks.
pub fn process_detector() -> &'static MutabilityDetector {
    &PROCESS
}

/// Classifies `value` with the process-wide detector.
pub fn classify(value: Option<&dyn Any>) -> Classification {
    process_detector().classify(value)
}

/// Returns `false` when `value` is absent, allow-listed, or marked.
pub fn is_mutable(value: Option<&dyn Any>) -> bool {
    process_detector().is_mutable(value)
}

/// Typed shorthand for `is_mutable(Some(value))`.
pub fn is_mutable_value<T: Any>(value: &T) -> bool {
    is_mutable(Some(value))
}
