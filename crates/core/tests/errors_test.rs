use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::errors::BookingError;

#[rstest]
#[case(BookingError::NotFound("service".into()), "not_found")]
#[case(BookingError::Validation("missing field".into()), "validation")]
#[case(BookingError::Authentication("no identity".into()), "authentication")]
#[case(BookingError::Forbidden("not the owner".into()), "forbidden")]
#[case(BookingError::InvalidTimezone("Mars/Olympus".into()), "invalid_timezone")]
#[case(BookingError::InvalidTimeFormat("9am".into()), "invalid_time_format")]
#[case(BookingError::BusinessClosed("Sunday".into()), "business_closed")]
#[case(BookingError::SlotConflict, "slot_conflict")]
fn test_stable_error_codes(#[case] error: BookingError, #[case] code: &str) {
    assert_eq!(error.code(), code);
}

#[test]
fn test_database_errors_share_the_generic_code() {
    let error = BookingError::Database(eyre::eyre!("connection refused"));
    assert_eq!(error.code(), "server_fault");
}

#[test]
fn test_display_messages() {
    let error = BookingError::NotFound("Service abc".to_string());
    assert_eq!(error.to_string(), "Resource not found: Service abc");

    let error = BookingError::SlotConflict;
    assert_eq!(error.to_string(), "That time has already been reserved");

    let error = BookingError::BusinessClosed("Sunday".to_string());
    assert_eq!(error.to_string(), "Business is closed on Sunday");
}
