use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Buffer in minutes appended after every service before the next
/// appointment may start.
pub const SERVICE_BREAK_MINUTES: i64 = 15;

/// A grooming service offered by the salon.
///
/// `max_duration` is the service length in minutes; the availability engine
/// derives its slot arithmetic from it via [`Service::duration`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price_default: i32,
    pub price_small: Option<i32>,
    pub price_big: Option<i32>,
    pub max_duration: i16,
    pub active: bool,
}

impl Service {
    pub fn duration(&self) -> ServiceDuration {
        ServiceDuration::from_minutes(i64::from(self.max_duration))
    }
}

/// A service's length with and without the post-service break.
///
/// `with_break` bounds the conflict checks and booked-slot end markers;
/// `without_break` governs whether a slot still fits before closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDuration {
    without_break: Duration,
    with_break: Duration,
}

impl ServiceDuration {
    /// Duration from service minutes, using the standard break.
    pub fn from_minutes(minutes: i64) -> Self {
        Self::from_minutes_with_break(minutes, SERVICE_BREAK_MINUTES)
    }

    pub fn from_minutes_with_break(minutes: i64, break_minutes: i64) -> Self {
        Self {
            without_break: Duration::minutes(minutes),
            with_break: Duration::minutes(minutes + break_minutes),
        }
    }

    pub fn without_break(&self) -> Duration {
        self.without_break
    }

    pub fn with_break(&self) -> Duration {
        self.with_break
    }
}
