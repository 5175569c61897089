use chrono::{NaiveTime, Utc, Weekday};
use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_decimal::Decimal;
use serde_json::{from_str, to_string};
use slotbook_core::models::{
    business::{Address, Business},
    reservation::{CreateReservationRequest, Reservation, ReservationStatus},
    service::Service,
    working_hours::WorkingHours,
};
use uuid::Uuid;

#[test]
fn test_reservation_serialization() {
    let reservation = Reservation {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
        start_time: Utc::now(),
        status: ReservationStatus::Active,
        created_at: Utc::now(),
    };

    let json = to_string(&reservation).expect("Failed to serialize reservation");
    let deserialized: Reservation = from_str(&json).expect("Failed to deserialize reservation");

    assert_eq!(deserialized.id, reservation.id);
    assert_eq!(deserialized.user_id, reservation.user_id);
    assert_eq!(deserialized.service_id, reservation.service_id);
    assert_eq!(deserialized.start_time, reservation.start_time);
    assert_eq!(deserialized.status, reservation.status);
}

#[test]
fn test_status_uses_lowercase_wire_format() {
    let json = to_string(&ReservationStatus::Cancelled).unwrap();
    assert_eq!(json, "\"cancelled\"");

    let parsed: ReservationStatus = from_str("\"active\"").unwrap();
    assert_eq!(parsed, ReservationStatus::Active);
}

#[rstest]
#[case(ReservationStatus::Active, "active", true)]
#[case(ReservationStatus::Pending, "pending", true)]
#[case(ReservationStatus::Cancelled, "cancelled", false)]
fn test_status_string_mapping(
    #[case] status: ReservationStatus,
    #[case] text: &str,
    #[case] blocks: bool,
) {
    assert_eq!(status.as_str(), text);
    assert_eq!(ReservationStatus::from_str(text), status);
    assert_eq!(status.blocks_slot(), blocks);
}

#[test]
fn test_unknown_status_text_defaults_to_pending() {
    assert_eq!(
        ReservationStatus::from_str("completed"),
        ReservationStatus::Pending
    );
}

#[test]
fn test_working_hours_serialization() {
    let hours = WorkingHours {
        business_id: Uuid::new_v4(),
        weekday: Weekday::Wed,
        start_time_utc: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        end_time_utc: NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
    };

    let json = to_string(&hours).expect("Failed to serialize working hours");
    let deserialized: WorkingHours = from_str(&json).expect("Failed to deserialize working hours");

    assert_eq!(deserialized.business_id, hours.business_id);
    assert_eq!(deserialized.weekday, hours.weekday);
    assert_eq!(deserialized.start_time_utc, hours.start_time_utc);
    assert_eq!(deserialized.end_time_utc, hours.end_time_utc);
}

#[test]
fn test_create_reservation_request_optional_status() {
    let json = r#"{
        "service_id": "a1a2a3a4-b1b2-c1c2-d1d2-e1e2e3e4e5e6",
        "start_local": "2024-09-09T10:00:00",
        "timezone": "Europe/Warsaw"
    }"#;

    let request: CreateReservationRequest = from_str(json).expect("Failed to deserialize request");

    assert_eq!(request.timezone, "Europe/Warsaw");
    assert_eq!(request.status, None);
}

#[test]
fn test_business_serialization() {
    let business = Business {
        id: Uuid::new_v4(),
        owner_id: Uuid::new_v4(),
        category: "Barber".to_string(),
        name: "Clippers".to_string(),
        email: "owner@clippers.example".to_string(),
        phone_number: "+48123456789".to_string(),
        address: Address {
            region: "Mazowieckie".to_string(),
            city: "Warszawa".to_string(),
            street: "Prosta".to_string(),
            building_number: "12".to_string(),
            room_number: "3".to_string(),
            postal_code: "00-001".to_string(),
        },
    };

    let json = to_string(&business).expect("Failed to serialize business");
    let deserialized: Business = from_str(&json).expect("Failed to deserialize business");

    assert_eq!(deserialized.id, business.id);
    assert_eq!(deserialized.name, business.name);
    assert_eq!(deserialized.address, business.address);
}

#[test]
fn test_service_price_round_trips_as_decimal() {
    let service = Service {
        id: Uuid::new_v4(),
        employee_id: Uuid::new_v4(),
        business_id: Uuid::new_v4(),
        name: "Haircut".to_string(),
        description: "Classic cut".to_string(),
        price: Decimal::new(4950, 2),
        duration_minutes: 30,
        is_featured: true,
        group: Some("Hair".to_string()),
    };

    let json = to_string(&service).expect("Failed to serialize service");
    let deserialized: Service = from_str(&json).expect("Failed to deserialize service");

    assert_eq!(deserialized.price, Decimal::new(4950, 2));
    assert_eq!(deserialized.duration_minutes, 30);
    assert_eq!(deserialized.group, service.group);
}
