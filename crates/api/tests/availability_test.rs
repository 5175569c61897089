use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use slotbook_core::errors::BookingError;
use slotbook_core::slots::{AvailableSlots, Interval};
use slotbook_core::timezone::TimeNormalizer;
use slotbook_db::mock::repositories::{MockReservationRepo, MockWorkingHoursRepo};
use slotbook_db::models::{weekday_to_db, DbBookedInterval, DbWorkingHours};

fn hours_row(business_id: Uuid, weekday: i16, start: (u32, u32), end: (u32, u32)) -> DbWorkingHours {
    DbWorkingHours {
        id: Uuid::new_v4(),
        business_id,
        weekday,
        start_time: chrono::NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end_time: chrono::NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
    }
}

/// Drives the slot computation the way the availability handler does,
/// with the repositories swapped for mocks.
async fn compute_slots(
    hours_repo: &MockWorkingHoursRepo,
    reservation_repo: &MockReservationRepo,
    business_id: Uuid,
    employee_id: Uuid,
    date: NaiveDate,
    duration_minutes: i64,
    timezone: &str,
) -> Result<Vec<NaiveDateTime>, BookingError> {
    let normalizer = TimeNormalizer::tzdb();
    normalizer.check_zone(timezone, date)?;

    let weekday = weekday_to_db(date.weekday());
    let hours = hours_repo
        .get_for_day(business_id, weekday)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::BusinessClosed(date.weekday().to_string()))?;

    let booked = reservation_repo
        .list_active_intervals_for_employee_on_date(employee_id, date)
        .await
        .map_err(BookingError::Database)?
        .into_iter()
        .map(|row| {
            Interval::starting_at(row.start_time, Duration::minutes(row.duration_minutes as i64))
        })
        .collect();

    let slots = AvailableSlots::new(
        date,
        hours.start_time,
        hours.end_time,
        Duration::minutes(duration_minutes),
        Duration::minutes(15),
        booked,
    );

    slots
        .map(|start| normalizer.to_local_instant(start, timezone))
        .collect()
}

#[test_log::test(tokio::test)]
async fn test_open_day_yields_all_candidate_starts() {
    let business_id = Uuid::new_v4();
    let employee_id = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(); // a Monday

    let mut hours_repo = MockWorkingHoursRepo::new();
    hours_repo
        .expect_get_for_day()
        .with(predicate::eq(business_id), predicate::eq(0i16))
        .returning(move |_, weekday| Ok(Some(hours_row(business_id, weekday, (9, 0), (17, 0)))));

    let mut reservation_repo = MockReservationRepo::new();
    reservation_repo
        .expect_list_active_intervals_for_employee_on_date()
        .with(predicate::eq(employee_id), predicate::eq(date))
        .returning(|_, _| Ok(Vec::new()));

    let slots = compute_slots(
        &hours_repo,
        &reservation_repo,
        business_id,
        employee_id,
        date,
        30,
        "UTC",
    )
    .await
    .unwrap();

    // 09:00 through 16:30 inclusive, every 15 minutes
    assert_eq!(slots.len(), 31);
    assert_eq!(slots[0], date.and_hms_opt(9, 0, 0).unwrap());
    assert_eq!(slots[30], date.and_hms_opt(16, 30, 0).unwrap());
}

#[tokio::test]
async fn test_booked_interval_removes_overlapping_starts() {
    let business_id = Uuid::new_v4();
    let employee_id = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    let mut hours_repo = MockWorkingHoursRepo::new();
    hours_repo
        .expect_get_for_day()
        .returning(move |_, weekday| Ok(Some(hours_row(business_id, weekday, (9, 0), (12, 0)))));

    // One active reservation at 10:00 for 30 minutes
    let mut reservation_repo = MockReservationRepo::new();
    reservation_repo
        .expect_list_active_intervals_for_employee_on_date()
        .returning(move |_, _| {
            Ok(vec![DbBookedInterval {
                start_time: Utc
                    .from_utc_datetime(&date.and_hms_opt(10, 0, 0).unwrap()),
                duration_minutes: 30,
            }])
        });

    let slots = compute_slots(
        &hours_repo,
        &reservation_repo,
        business_id,
        employee_id,
        date,
        30,
        "UTC",
    )
    .await
    .unwrap();

    // 09:45, 10:00 and 10:15 would overlap the booking
    assert!(!slots.contains(&date.and_hms_opt(9, 45, 0).unwrap()));
    assert!(!slots.contains(&date.and_hms_opt(10, 0, 0).unwrap()));
    assert!(!slots.contains(&date.and_hms_opt(10, 15, 0).unwrap()));
    // Back-to-back neighbors survive
    assert!(slots.contains(&date.and_hms_opt(9, 30, 0).unwrap()));
    assert!(slots.contains(&date.and_hms_opt(10, 30, 0).unwrap()));
}

#[tokio::test]
async fn test_closed_day_reports_business_closed() {
    let business_id = Uuid::new_v4();
    let employee_id = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(); // a Sunday

    let mut hours_repo = MockWorkingHoursRepo::new();
    hours_repo.expect_get_for_day().returning(|_, _| Ok(None));

    let reservation_repo = MockReservationRepo::new();

    let err = compute_slots(
        &hours_repo,
        &reservation_repo,
        business_id,
        employee_id,
        date,
        30,
        "UTC",
    )
    .await
    .unwrap_err();

    assert!(matches!(err, BookingError::BusinessClosed(_)));
}

#[tokio::test]
async fn test_results_follow_the_client_timezone() {
    let business_id = Uuid::new_v4();
    let employee_id = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(); // winter, UTC+1

    let mut hours_repo = MockWorkingHoursRepo::new();
    hours_repo
        .expect_get_for_day()
        .returning(move |_, weekday| Ok(Some(hours_row(business_id, weekday, (8, 0), (10, 0)))));

    let mut reservation_repo = MockReservationRepo::new();
    reservation_repo
        .expect_list_active_intervals_for_employee_on_date()
        .returning(|_, _| Ok(Vec::new()));

    let slots = compute_slots(
        &hours_repo,
        &reservation_repo,
        business_id,
        employee_id,
        date,
        60,
        "Europe/Warsaw",
    )
    .await
    .unwrap();

    // 08:00 UTC renders as 09:00 in Warsaw
    assert_eq!(slots[0], date.and_hms_opt(9, 0, 0).unwrap());
}

#[tokio::test]
async fn test_unknown_zone_is_rejected_before_any_lookup() {
    let hours_repo = MockWorkingHoursRepo::new();
    let reservation_repo = MockReservationRepo::new();

    let err = compute_slots(
        &hours_repo,
        &reservation_repo,
        Uuid::new_v4(),
        Uuid::new_v4(),
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        30,
        "Mars/Olympus",
    )
    .await
    .unwrap_err();

    assert!(matches!(err, BookingError::InvalidTimezone(_)));
}
