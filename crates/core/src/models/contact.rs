use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Opening and closing hours for a single weekday.
///
/// A missing opening or closing hour means the salon is closed that day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub opening: Option<NaiveTime>,
    pub closing: Option<NaiveTime>,
}

impl DaySchedule {
    pub fn open(opening: NaiveTime, closing: NaiveTime) -> Self {
        Self {
            opening: Some(opening),
            closing: Some(closing),
        }
    }

    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.opening.is_none() || self.closing.is_none()
    }
}

/// The salon's weekly opening hours, one entry per weekday.
///
/// Indexed by `chrono::Weekday` so lookups stay decoupled from however the
/// hours are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: [DaySchedule; 7],
}

impl WeeklySchedule {
    /// Builds a schedule from seven day entries ordered Monday to Sunday.
    pub fn new(days: [DaySchedule; 7]) -> Self {
        Self { days }
    }

    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    pub fn for_date(&self, date: NaiveDate) -> &DaySchedule {
        self.day(date.weekday())
    }
}

/// The salon's contact details together with its weekly hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub schedule: WeeklySchedule,
}
