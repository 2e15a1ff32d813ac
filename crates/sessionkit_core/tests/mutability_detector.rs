use chrono::{
    Datelike, Days, FixedOffset, Local, Month, Months, NaiveDate, NaiveTime, SecondsFormat,
    TimeDelta, Utc, Weekday,
};
use chrono_tz::Tz;
use num_bigint::{BigInt, BigUint};
use rust_decimal::{Decimal, RoundingStrategy};
use sessionkit_core::{
    classify, is_mutable, is_mutable_value, mark_immutable, mark_zerocopy_immutable,
    Classification, Immutable, MarkerConvention, MutabilityDetector, EMPTY_LIST, EMPTY_MAP,
    EMPTY_SET,
};
use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI32, AtomicI64, AtomicU64};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};
use url::Url;
use uuid::Uuid;

#[derive(Debug, Default)]
struct PlainObject {
    _hits: u32,
}

#[derive(Debug)]
struct ImmutableObject;
mark_immutable!(ImmutableObject);

#[derive(Debug, zerocopy::Immutable)]
struct ZerocopyImmutableObject {
    _id: u64,
}
mark_zerocopy_immutable!(ZerocopyImmutableObject);

#[derive(Debug)]
struct UndeclaredObject;
impl Immutable for UndeclaredObject {}

fn assert_immutable(values: &[&dyn Any]) {
    for value in values {
        assert!(
            !is_mutable(Some(*value)),
            "expected immutable: {:?}",
            classify(Some(*value))
        );
    }
}

fn assert_mutable(values: &[&dyn Any]) {
    for value in values {
        assert!(is_mutable(Some(*value)));
    }
}

#[test]
fn absent_value_is_not_mutable() {
    assert!(!is_mutable(None));
    assert_eq!(classify(None), Classification::Absent);
}

#[test]
fn plain_objects_and_counters_are_mutable() {
    assert_mutable(&[
        &PlainObject::default(),
        &AtomicI32::new(0),
        &AtomicI64::new(0),
        &AtomicU64::new(0),
        &TypeId::of::<PlainObject>(),
        &Some(1_u32),
    ]);
}

#[test]
fn primitives_and_strings_are_immutable() {
    assert_immutable(&[
        &true,
        &'a',
        &(),
        &1_i8,
        &1_i16,
        &1_i32,
        &1_i64,
        &1_i128,
        &1_u8,
        &1_usize,
        &1.0_f32,
        &1.0_f64,
        &NonZeroU32::MIN,
        &"test",
        &String::from("test"),
        &Box::<str>::from("test"),
        &Arc::<str>::from("test"),
        &Cow::<'static, str>::Borrowed("test"),
        &Uuid::new_v4(),
        &std::cmp::Ordering::Less,
    ]);
}

#[test]
fn precision_locale_and_zone_values_are_immutable() {
    use chrono::TimeZone;

    let berlin: Tz = chrono_tz::Europe::Berlin;
    let now = Utc::now();
    let locale: unic_langid::LanguageIdentifier = "en-US".parse().expect("language id");

    assert_immutable(&[
        &BigInt::from(-1),
        &BigUint::from(1_u32),
        &Decimal::new(1, 0),
        &RoundingStrategy::MidpointNearestEven,
        &berlin,
        &berlin.offset_from_utc_datetime(&now.naive_utc()),
        &now.with_timezone(&berlin),
        &locale,
        &iso_currency::Currency::USD,
    ]);
}

#[test]
fn date_and_time_values_are_immutable() {
    let today = Local::now().date_naive();
    let offset = FixedOffset::east_opt(3600).expect("valid offset");

    assert_immutable(&[
        &Duration::ZERO,
        &Instant::now(),
        &SystemTime::now(),
        &Utc,
        &offset,
        &Utc::now(),
        &Local::now(),
        &Utc::now().with_timezone(&offset),
        &today,
        &today.iso_week(),
        &NaiveTime::MIN,
        &Utc::now().naive_utc(),
        &NaiveDate::from_ymd_opt(2024, 2, 29).expect("leap day"),
        &TimeDelta::zero(),
        &Days::new(1),
        &Months::new(1),
        &Weekday::Sun,
        &Month::January,
        &SecondsFormat::Millis,
    ]);
}

#[test]
fn network_addresses_are_immutable() {
    let localhost = IpAddr::V4(Ipv4Addr::LOCALHOST);
    assert_immutable(&[
        &localhost,
        &Ipv4Addr::LOCALHOST,
        &Ipv6Addr::LOCALHOST,
        &SocketAddr::new(localhost, 80),
        &"127.0.0.1:80"
            .parse::<std::net::SocketAddrV4>()
            .expect("socket addr"),
    ]);
}

#[test]
fn path_values_are_immutable_but_file_handles_are_not() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("attributes.bin");
    std::fs::write(&path, b"session").expect("write file");
    let url = Url::from_file_path(&path).expect("file url");
    let static_path: &'static Path = Path::new("/");
    let metadata = std::fs::metadata(&path).expect("metadata");

    assert_immutable(&[
        &path,
        &static_path,
        &path.clone().into_boxed_path(),
        &Arc::<Path>::from(path.as_path()),
        &url,
        &metadata.permissions(),
        &metadata.file_type(),
    ]);

    let file = std::fs::File::open(&path).expect("open file");
    assert!(is_mutable_value(&file));
}

#[test]
fn empty_singletons_are_immutable_but_populated_collections_are_not() {
    assert_immutable(&[&EMPTY_LIST, &EMPTY_MAP, &EMPTY_SET]);

    let mut map = HashMap::new();
    map.insert("user", 1_u32);
    let set: HashSet<u32> = [1, 2].into_iter().collect();
    let mut ordered = BTreeMap::new();
    ordered.insert(1_u8, "one");

    assert_mutable(&[&vec![1, 2, 3], &map, &set, &ordered]);
}

#[test]
fn declared_markers_apply_from_the_first_call() {
    assert_eq!(
        classify(Some(&ImmutableObject)),
        Classification::Marked(MarkerConvention::Native)
    );
    assert_eq!(
        classify(Some(&ZerocopyImmutableObject { _id: 1 })),
        Classification::Marked(MarkerConvention::Zerocopy)
    );
}

#[test]
fn undeclared_impl_is_only_seen_by_explicit_detector() {
    assert!(is_mutable_value(&UndeclaredObject));

    let detector = MutabilityDetector::builder()
        .mark::<UndeclaredObject>()
        .build();
    assert_eq!(
        detector.classify(Some(&UndeclaredObject)),
        Classification::Marked(MarkerConvention::Native)
    );
    assert!(detector.is_mutable(Some(&ImmutableObject)));
    assert!(detector.is_mutable(Some(&PlainObject::default())));

    let detector = MutabilityDetector::builder().declared().build();
    assert!(!detector.is_mutable(Some(&ImmutableObject)));
    assert!(detector.is_mutable(Some(&UndeclaredObject)));
}

#[test]
fn allow_list_takes_precedence_over_markers() {
    let detector = MutabilityDetector::builder().mark_zerocopy::<u32>().build();
    assert_eq!(
        detector.classify(Some(&5_u32)),
        Classification::KnownImmutable("u32")
    );
}

#[test]
fn classification_is_idempotent() {
    let plain = PlainObject::default();
    let path = PathBuf::from("/srv");
    let values: [&dyn Any; 4] = [&"hello", &plain, &path, &ImmutableObject];
    for value in values {
        let first = classify(Some(value));
        for _ in 0..3 {
            assert_eq!(classify(Some(value)), first);
        }
    }
}
