use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use groombook_core::models::booking::Booking;
use groombook_core::models::contact::{Contact, DaySchedule, WeeklySchedule};
use groombook_core::models::service::Service;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The salon's single contact row. Opening and closing hours are stored per
/// weekday; a NULL in either column marks the day as closed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbContact {
    pub id: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub opening_hour_monday: Option<NaiveTime>,
    pub closing_hour_monday: Option<NaiveTime>,
    pub opening_hour_tuesday: Option<NaiveTime>,
    pub closing_hour_tuesday: Option<NaiveTime>,
    pub opening_hour_wednesday: Option<NaiveTime>,
    pub closing_hour_wednesday: Option<NaiveTime>,
    pub opening_hour_thursday: Option<NaiveTime>,
    pub closing_hour_thursday: Option<NaiveTime>,
    pub opening_hour_friday: Option<NaiveTime>,
    pub closing_hour_friday: Option<NaiveTime>,
    pub opening_hour_saturday: Option<NaiveTime>,
    pub closing_hour_saturday: Option<NaiveTime>,
    pub opening_hour_sunday: Option<NaiveTime>,
    pub closing_hour_sunday: Option<NaiveTime>,
}

impl DbContact {
    /// Folds the per-weekday columns into the core weekly schedule.
    pub fn weekly_schedule(&self) -> WeeklySchedule {
        WeeklySchedule::new([
            DaySchedule {
                opening: self.opening_hour_monday,
                closing: self.closing_hour_monday,
            },
            DaySchedule {
                opening: self.opening_hour_tuesday,
                closing: self.closing_hour_tuesday,
            },
            DaySchedule {
                opening: self.opening_hour_wednesday,
                closing: self.closing_hour_wednesday,
            },
            DaySchedule {
                opening: self.opening_hour_thursday,
                closing: self.closing_hour_thursday,
            },
            DaySchedule {
                opening: self.opening_hour_friday,
                closing: self.closing_hour_friday,
            },
            DaySchedule {
                opening: self.opening_hour_saturday,
                closing: self.closing_hour_saturday,
            },
            DaySchedule {
                opening: self.opening_hour_sunday,
                closing: self.closing_hour_sunday,
            },
        ])
    }
}

impl From<DbContact> for Contact {
    fn from(row: DbContact) -> Self {
        let schedule = row.weekly_schedule();
        Contact {
            phone_number: row.phone_number,
            email: row.email,
            address: row.address,
            schedule,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price_default: i32,
    pub price_small: Option<i32>,
    pub price_big: Option<i32>,
    pub max_duration: i16,
    pub active: bool,
}

impl From<DbService> for Service {
    fn from(row: DbService) -> Self {
        Service {
            id: row.id,
            name: row.name,
            description: row.description,
            price_default: row.price_default,
            price_small: row.price_small,
            price_big: row.price_big,
            max_duration: row.max_duration,
            active: row.active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub service_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub comment: Option<String>,
    pub cancelled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DbBooking> for Booking {
    fn from(row: DbBooking) -> Self {
        Booking {
            id: row.id,
            service_id: row.service_id,
            date: row.date,
            time: row.time,
            cancelled: row.cancelled,
        }
    }
}
