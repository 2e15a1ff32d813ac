//! Static allow-list of value types that are immutable by construction.
//!
//! # Responsibility
//! - Enumerate concrete types whose instances never change observable state
//!   once shared.
//! - Answer exact-type membership queries by `TypeId`.
//!
//! # Invariants
//! - The table is built once on first access and never mutated.
//! - Lookup is by exact concrete type; generic wrappers such as `Option<T>`
//!   or `Vec<T>` are never members.
//! - `std::fs::File` is excluded; only value-like path/URL representations are
//!   members.

use crate::collections::{EmptyList, EmptyMap, EmptySet};
use once_cell::sync::Lazy;
use std::any::{type_name, Any, TypeId};
use std::borrow::Cow;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

static KNOWN_IMMUTABLE: Lazy<HashMap<TypeId, &'static str>> = Lazy::new(build_table);

fn entry<T: Any + ?Sized>() -> (TypeId, &'static str) {
    (TypeId::of::<T>(), type_name::<T>())
}

fn build_table() -> HashMap<TypeId, &'static str> {
    [
        // primitives
        entry::<()>(),
        entry::<bool>(),
        entry::<char>(),
        entry::<i8>(),
        entry::<i16>(),
        entry::<i32>(),
        entry::<i64>(),
        entry::<i128>(),
        entry::<isize>(),
        entry::<u8>(),
        entry::<u16>(),
        entry::<u32>(),
        entry::<u64>(),
        entry::<u128>(),
        entry::<usize>(),
        entry::<f32>(),
        entry::<f64>(),
        entry::<NonZeroI8>(),
        entry::<NonZeroI16>(),
        entry::<NonZeroI32>(),
        entry::<NonZeroI64>(),
        entry::<NonZeroI128>(),
        entry::<NonZeroIsize>(),
        entry::<NonZeroU8>(),
        entry::<NonZeroU16>(),
        entry::<NonZeroU32>(),
        entry::<NonZeroU64>(),
        entry::<NonZeroU128>(),
        entry::<NonZeroUsize>(),
        // arbitrary precision and rounding
        entry::<num_bigint::BigInt>(),
        entry::<num_bigint::BigUint>(),
        entry::<rust_decimal::Decimal>(),
        entry::<rust_decimal::RoundingStrategy>(),
        // strings
        entry::<String>(),
        entry::<&'static str>(),
        entry::<Box<str>>(),
        entry::<Arc<str>>(),
        entry::<Rc<str>>(),
        entry::<Cow<'static, str>>(),
        // identifiers and enumerated constants
        entry::<uuid::Uuid>(),
        entry::<std::cmp::Ordering>(),
        entry::<unic_langid::LanguageIdentifier>(),
        entry::<iso_currency::Currency>(),
        entry::<chrono::Weekday>(),
        entry::<chrono::Month>(),
        // time zones and offsets
        entry::<chrono::Utc>(),
        entry::<chrono::FixedOffset>(),
        entry::<chrono::Local>(),
        entry::<chrono_tz::Tz>(),
        entry::<chrono_tz::TzOffset>(),
        // date/time values
        entry::<Duration>(),
        entry::<Instant>(),
        entry::<SystemTime>(),
        entry::<chrono::NaiveDate>(),
        entry::<chrono::NaiveTime>(),
        entry::<chrono::NaiveDateTime>(),
        entry::<chrono::DateTime<chrono::Utc>>(),
        entry::<chrono::DateTime<chrono::FixedOffset>>(),
        entry::<chrono::DateTime<chrono::Local>>(),
        entry::<chrono::DateTime<chrono_tz::Tz>>(),
        entry::<chrono::TimeDelta>(),
        entry::<chrono::Months>(),
        entry::<chrono::Days>(),
        entry::<chrono::IsoWeek>(),
        entry::<chrono::SecondsFormat>(),
        // network addresses
        entry::<IpAddr>(),
        entry::<Ipv4Addr>(),
        entry::<Ipv6Addr>(),
        entry::<SocketAddr>(),
        entry::<SocketAddrV4>(),
        entry::<SocketAddrV6>(),
        // paths and URLs
        entry::<PathBuf>(),
        entry::<&'static Path>(),
        entry::<Box<Path>>(),
        entry::<Arc<Path>>(),
        entry::<url::Url>(),
        // permissions
        entry::<std::fs::Permissions>(),
        entry::<std::fs::FileType>(),
        // empty collection singletons
        entry::<EmptyList>(),
        entry::<EmptyMap>(),
        entry::<EmptySet>(),
    ]
    .into_iter()
    .collect()
}

/// Returns whether `type_id` names an allow-listed immutable type.
pub fn is_known_immutable(type_id: TypeId) -> bool {
    KNOWN_IMMUTABLE.contains_key(&type_id)
}

/// Returns the allow-listed type name for `type_id`, if any.
pub fn known_immutable_name(type_id: TypeId) -> Option<&'static str> {
    KNOWN_IMMUTABLE.get(&type_id).copied()
}

/// Returns all allow-listed type names, sorted.
pub fn known_immutable_type_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = KNOWN_IMMUTABLE.values().copied().collect();
    names.sort_unstable();
    names
}

/// Number of allow-listed types.
pub fn known_immutable_count() -> usize {
    KNOWN_IMMUTABLE.len()
}
