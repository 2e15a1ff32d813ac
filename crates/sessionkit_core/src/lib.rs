//! Core helpers for SessionKit session attribute handling.
//!
//! The main entry point is [`is_mutable`], a best-effort heuristic telling a
//! caching or replication layer whether a value may be shared without a
//! defensive copy. A value is reported immutable when it is absent, when its
//! concrete type is a known immutable value type, or when its type carries an
//! immutability marker declared with [`mark_immutable!`] or
//! [`mark_zerocopy_immutable!`].
//!
//! ```
//! use sessionkit_core::{is_mutable, mark_immutable};
//!
//! struct SessionToken(u64);
//! mark_immutable!(SessionToken);
//!
//! assert!(!is_mutable(Some(&"hello")));
//! assert!(!is_mutable(Some(&SessionToken(7))));
//! assert!(is_mutable(Some(&vec![1, 2, 3])));
//! assert!(!is_mutable(None));
//! ```

pub mod collections;
pub mod config;
pub mod detector;
pub mod known;
pub mod logging;
pub mod marker;

pub use collections::{EmptyList, EmptyMap, EmptySet, EMPTY_LIST, EMPTY_MAP, EMPTY_SET};
pub use config::{default_log_level, LoggingConfig};
pub use detector::{
    classify, is_mutable, is_mutable_value, process_detector, Classification,
    MutabilityDetector, MutabilityDetectorBuilder,
};
pub use known::{is_known_immutable, known_immutable_type_names};
pub use logging::{init_logging, logging_status, LoggingError};
pub use marker::{Immutable, MarkerConvention};

#[doc(hidden)]
pub mod __private {
    pub use inventory;
    pub use zerocopy;
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
