use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::slots::{AvailableSlots, Interval};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 9).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn instant(h: u32, m: u32) -> chrono::DateTime<Utc> {
    Utc.from_utc_datetime(&date().and_time(time(h, m)))
}

#[test]
fn test_open_day_slot_enumeration() {
    // 09:00-17:00, 30 minute service, 15 minute granularity, no bookings.
    let slots: Vec<_> = AvailableSlots::new(
        date(),
        time(9, 0),
        time(17, 0),
        Duration::minutes(30),
        Duration::minutes(15),
        vec![],
    )
    .collect();

    assert_eq!(slots.first(), Some(&instant(9, 0)));
    assert_eq!(slots.get(1), Some(&instant(9, 15)));
    // Last slot 16:30-17:00 fits exactly against closing time.
    assert_eq!(slots.last(), Some(&instant(16, 30)));
    assert_eq!(slots.len(), 31);
}

#[test]
fn test_duration_spaced_granularity() {
    let slots: Vec<_> = AvailableSlots::new(
        date(),
        time(9, 0),
        time(17, 0),
        Duration::minutes(30),
        Duration::minutes(30),
        vec![],
    )
    .collect();

    assert_eq!(slots.len(), 16);
    assert_eq!(slots.first(), Some(&instant(9, 0)));
    assert_eq!(slots.last(), Some(&instant(16, 30)));
}

#[test]
fn test_existing_reservation_blocks_overlapping_candidates() {
    // One active reservation 10:00-10:30.
    let booked = vec![Interval::starting_at(instant(10, 0), Duration::minutes(30))];

    let slots: Vec<_> = AvailableSlots::new(
        date(),
        time(9, 0),
        time(17, 0),
        Duration::minutes(30),
        Duration::minutes(15),
        booked,
    )
    .collect();

    // 09:45 would run 09:45-10:15, overlapping the reservation.
    assert!(!slots.contains(&instant(9, 45)));
    assert!(!slots.contains(&instant(10, 0)));
    assert!(!slots.contains(&instant(10, 15)));

    // 09:30-10:00 and 10:30-11:00 touch the reservation but do not overlap.
    assert!(slots.contains(&instant(9, 30)));
    assert!(slots.contains(&instant(10, 30)));
}

#[test]
fn test_candidate_must_fit_before_close() {
    let slots: Vec<_> = AvailableSlots::new(
        date(),
        time(16, 0),
        time(17, 0),
        Duration::minutes(45),
        Duration::minutes(15),
        vec![],
    )
    .collect();

    // 16:15 ends exactly at close; 16:30 would spill past it.
    assert_eq!(slots, vec![instant(16, 0), instant(16, 15)]);
}

#[test]
fn test_no_slots_when_service_longer_than_window() {
    let slots: Vec<_> = AvailableSlots::new(
        date(),
        time(9, 0),
        time(10, 0),
        Duration::minutes(90),
        Duration::minutes(15),
        vec![],
    )
    .collect();

    assert!(slots.is_empty());
}

#[test]
fn test_iterator_is_restartable() {
    let slots = AvailableSlots::new(
        date(),
        time(9, 0),
        time(12, 0),
        Duration::minutes(30),
        Duration::minutes(15),
        vec![],
    );

    let first: Vec<_> = slots.clone().collect();
    let second: Vec<_> = slots.collect();
    assert_eq!(first, second);
}

#[test]
fn test_non_positive_granularity_falls_back_to_default() {
    let slots: Vec<_> = AvailableSlots::new(
        date(),
        time(9, 0),
        time(10, 0),
        Duration::minutes(30),
        Duration::zero(),
        vec![],
    )
    .collect();

    // 15 minute default spacing: 09:00, 09:15, 09:30.
    assert_eq!(slots.len(), 3);
}

#[rstest]
// Identical intervals overlap.
#[case((10, 0), 30, (10, 0), 30, true)]
// Contained interval overlaps.
#[case((10, 0), 60, (10, 15), 15, true)]
// Partial overlap in either direction.
#[case((10, 0), 30, (10, 15), 30, true)]
#[case((10, 15), 30, (10, 0), 30, true)]
// Back-to-back intervals share only an endpoint and do not overlap.
#[case((10, 0), 30, (10, 30), 30, false)]
#[case((10, 30), 30, (10, 0), 30, false)]
// Disjoint intervals.
#[case((9, 0), 30, (11, 0), 30, false)]
fn test_half_open_overlap(
    #[case] a_start: (u32, u32),
    #[case] a_minutes: i64,
    #[case] b_start: (u32, u32),
    #[case] b_minutes: i64,
    #[case] expected: bool,
) {
    let a = Interval::starting_at(instant(a_start.0, a_start.1), Duration::minutes(a_minutes));
    let b = Interval::starting_at(instant(b_start.0, b_start.1), Duration::minutes(b_minutes));

    assert_eq!(a.overlaps(&b), expected);
    assert_eq!(b.overlaps(&a), expected);
}
