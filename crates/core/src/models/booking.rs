use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label returned when the salon is closed on the requested day.
pub const CLOSED_LABEL: &str = "Closed";

/// Label returned when the day is open but no slot fits.
pub const NO_SLOTS_LABEL: &str = "No available slots";

/// An existing, non-cancelled appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub service_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub cancelled: bool,
}

/// The occupied time range of an existing booking, end inclusive of the
/// post-service break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedInterval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl BookedInterval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Interval for a booking starting at `start`, with the end computed
    /// through the full date so the arithmetic matches the slot scan.
    pub fn from_start(day: NaiveDate, start: NaiveTime, with_break: Duration) -> Self {
        let end = (day.and_time(start) + with_break).time();
        Self { start, end }
    }
}

/// A bookable start time and its display label, or one of the sentinel
/// entries for closed days and fully booked days.
///
/// Serializes as a two-element JSON array, e.g. `["08:00", "08:00 - 08:15"]`
/// or `["", "Closed"]`, the shape the booking form consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableSlot {
    pub value: String,
    pub label: String,
}

impl AvailableSlot {
    /// Slot starting at `start` for a service displayed as ending at `end`
    /// (break excluded from the label).
    pub fn starting_at(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            value: start.format("%H:%M").to_string(),
            label: format!("{} - {}", start.format("%H:%M"), end.format("%H:%M")),
        }
    }

    pub fn closed() -> Self {
        Self {
            value: String::new(),
            label: CLOSED_LABEL.to_string(),
        }
    }

    pub fn none_available() -> Self {
        Self {
            value: String::new(),
            label: NO_SLOTS_LABEL.to_string(),
        }
    }
}

impl Serialize for AvailableSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.value, &self.label).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AvailableSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (value, label) = <(String, String)>::deserialize(deserializer)?;
        Ok(Self { value, label })
    }
}

/// Response envelope for the booking-slots endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSlotsResponse {
    pub status: String,
    pub booking_slots: Vec<AvailableSlot>,
}
