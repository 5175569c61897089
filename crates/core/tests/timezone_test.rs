use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::{
    errors::{BookingError, BookingResult},
    timezone::{OffsetResolver, TimeNormalizer},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_to_utc_time_of_day_winter_offset() {
    let normalizer = TimeNormalizer::tzdb();

    // New York is UTC-5 in January.
    let utc = normalizer
        .to_utc_time_of_day("09:00", "America/New_York", date(2024, 1, 15))
        .unwrap();

    assert_eq!(utc, time(14, 0));
}

#[test]
fn test_to_utc_time_of_day_follows_dst() {
    let normalizer = TimeNormalizer::tzdb();

    // Same wall-clock time, summer anchor date: UTC-4.
    let utc = normalizer
        .to_utc_time_of_day("09:00", "America/New_York", date(2024, 7, 15))
        .unwrap();

    assert_eq!(utc, time(13, 0));
}

#[test]
fn test_time_of_day_wraps_across_utc_midnight() {
    let normalizer = TimeNormalizer::tzdb();

    // 09:00 in Tokyo (UTC+9) is midnight UTC; only the time-of-day is kept.
    let utc = normalizer
        .to_utc_time_of_day("09:00", "Asia/Tokyo", date(2024, 3, 1))
        .unwrap();

    assert_eq!(utc, time(0, 0));
}

#[rstest]
#[case("00:00")]
#[case("09:30")]
#[case("16:45")]
#[case("23:59")]
fn test_local_round_trip(#[case] local: &str) {
    let normalizer = TimeNormalizer::tzdb();
    let anchor = date(2024, 6, 15);

    let utc = normalizer
        .to_utc_time_of_day(local, "Europe/Warsaw", anchor)
        .unwrap();
    let back = normalizer
        .to_local_time_of_day(utc, "Europe/Warsaw", anchor)
        .unwrap();

    assert_eq!(back, local);
}

#[rstest]
#[case("9am")]
#[case("0930")]
#[case("25:00")]
#[case("12:61")]
#[case("")]
fn test_invalid_time_format(#[case] input: &str) {
    let normalizer = TimeNormalizer::tzdb();
    let result = normalizer.to_utc_time_of_day(input, "UTC", date(2024, 6, 15));

    assert!(matches!(result, Err(BookingError::InvalidTimeFormat(_))));
}

#[rstest]
#[case("Mars/Olympus")]
#[case("NotAZone")]
#[case("")]
fn test_invalid_timezone(#[case] zone: &str) {
    let normalizer = TimeNormalizer::tzdb();
    let result = normalizer.to_utc_time_of_day("09:00", zone, date(2024, 6, 15));

    assert!(matches!(result, Err(BookingError::InvalidTimezone(_))));
}

#[test]
fn test_to_utc_instant() {
    let normalizer = TimeNormalizer::tzdb();
    let local = date(2024, 7, 1).and_time(time(14, 0));

    let utc = normalizer.to_utc_instant(local, "Europe/Warsaw").unwrap();

    assert_eq!(utc, Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap());
}

#[test]
fn test_to_local_instant() {
    let normalizer = TimeNormalizer::tzdb();
    let utc = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();

    let local = normalizer.to_local_instant(utc, "Europe/Warsaw").unwrap();

    // Warsaw is UTC+2 in July.
    assert_eq!(local, date(2024, 7, 1).and_time(time(14, 0)));
}

struct FixedResolver(FixedOffset);

impl OffsetResolver for FixedResolver {
    fn resolve(&self, _zone: &str, _date: NaiveDate) -> BookingResult<FixedOffset> {
        Ok(self.0)
    }
}

#[test]
fn test_injected_resolver_is_used() {
    // Three-hour offset regardless of zone name or date.
    let resolver = Arc::new(FixedResolver(FixedOffset::east_opt(3 * 3600).unwrap()));
    let normalizer = TimeNormalizer::new(resolver);

    let utc = normalizer
        .to_utc_time_of_day("10:00", "Anything/Goes", date(2024, 1, 1))
        .unwrap();

    assert_eq!(utc, time(7, 0));
}

#[test]
fn test_check_zone() {
    let normalizer = TimeNormalizer::tzdb();

    assert!(normalizer.check_zone("Europe/Warsaw", date(2024, 6, 15)).is_ok());
    assert!(matches!(
        normalizer.check_zone("Atlantis/Lost", date(2024, 6, 15)),
        Err(BookingError::InvalidTimezone(_))
    ));
}
