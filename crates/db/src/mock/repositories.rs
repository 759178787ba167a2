use chrono::NaiveDate;
use mockall::mock;

use crate::models::{DbBooking, DbContact, DbService};

// Mock repositories for testing
mock! {
    pub ContactRepo {
        pub async fn get_contact(&self) -> eyre::Result<Option<DbContact>>;
    }
}

mock! {
    pub ServiceRepo {
        pub async fn get_service_by_id(&self, id: i32) -> eyre::Result<Option<DbService>>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn get_bookings_for_day(&self, day: NaiveDate) -> eyre::Result<Vec<DbBooking>>;
    }
}
