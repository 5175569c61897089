use chrono::Weekday;
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_db::models::{weekday_from_db, weekday_to_db};

#[rstest]
#[case(Weekday::Mon, 0)]
#[case(Weekday::Tue, 1)]
#[case(Weekday::Wed, 2)]
#[case(Weekday::Thu, 3)]
#[case(Weekday::Fri, 4)]
#[case(Weekday::Sat, 5)]
#[case(Weekday::Sun, 6)]
fn test_weekday_round_trip(#[case] weekday: Weekday, #[case] stored: i16) {
    assert_eq!(weekday_to_db(weekday), stored);
    assert_eq!(weekday_from_db(stored), weekday);
}

#[test]
fn test_out_of_range_weekday_wraps() {
    // The schema constrains the column to 0..=6; the mapping wraps anyway.
    assert_eq!(weekday_from_db(7), Weekday::Mon);
    assert_eq!(weekday_from_db(-1), Weekday::Sun);
}
