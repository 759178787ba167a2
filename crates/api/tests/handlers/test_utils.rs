use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use groombook_db::mock::repositories::{MockBookingRepo, MockContactRepo, MockServiceRepo};
use groombook_db::models::{DbBooking, DbContact, DbService};
use uuid::Uuid;

/// Mock repositories standing in for the database in handler tests.
pub struct TestContext {
    pub contact_repo: MockContactRepo,
    pub service_repo: MockServiceRepo,
    pub booking_repo: MockBookingRepo,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            contact_repo: MockContactRepo::new(),
            service_repo: MockServiceRepo::new(),
            booking_repo: MockBookingRepo::new(),
        }
    }
}

pub fn t(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

/// Contact row open 08:00 - 09:00 on Tuesdays only.
pub fn contact_row() -> DbContact {
    DbContact {
        id: "x".to_string(),
        phone_number: "+36301234567".to_string(),
        email: "info@groombook.example".to_string(),
        address: "1 Grooming Street".to_string(),
        opening_hour_monday: None,
        closing_hour_monday: None,
        opening_hour_tuesday: Some(t(8, 0)),
        closing_hour_tuesday: Some(t(9, 0)),
        opening_hour_wednesday: None,
        closing_hour_wednesday: None,
        opening_hour_thursday: None,
        closing_hour_thursday: None,
        opening_hour_friday: None,
        closing_hour_friday: None,
        opening_hour_saturday: None,
        closing_hour_saturday: None,
        opening_hour_sunday: None,
        closing_hour_sunday: None,
    }
}

pub fn service_row(max_duration: i16) -> DbService {
    DbService {
        id: 1,
        name: "Quick wash".to_string(),
        description: "Bath and blow-dry".to_string(),
        price_default: 6000,
        price_small: None,
        price_big: None,
        max_duration,
        active: true,
    }
}

pub fn booking_row(date: NaiveDate, time: NaiveTime) -> DbBooking {
    DbBooking {
        id: Uuid::new_v4(),
        service_id: 1,
        date,
        time,
        comment: None,
        cancelled: false,
        created_at: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
    }
}
