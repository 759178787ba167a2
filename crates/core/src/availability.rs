//! # Booking Slot Availability
//!
//! This module computes the free booking slots for a single day: given the
//! salon's hours for that weekday, the duration of the service being booked
//! and the day's existing bookings, it returns the ordered list of start
//! times a customer can pick.
//!
//! ## Algorithm
//!
//! 1. If the day has no opening or no closing hour, return the `Closed`
//!    sentinel immediately
//! 2. Starting at the opening hour, probe candidate start times at a fixed
//!    search interval (15 minutes by default), independent of the service
//!    length, so every service is offered the same start-time grid
//! 3. A candidate survives unless it overlaps a booked interval: either its
//!    start falls inside a booking, or its own break-inclusive end does
//! 4. Stop once the service no longer fits before the closing hour; if
//!    nothing survived, return the `No available slots` sentinel
//!
//! Time arithmetic goes through the full date (combine, add, take the
//! time-of-day back) so additions roll over midnight instead of panicking;
//! callers are expected to keep the closing hour within the same day.
//!
//! The computation is pure and owns no state, so it is safe to call from
//! concurrent requests. It does not arbitrate two callers racing to book the
//! same slot; that belongs to the storage layer.

use chrono::{Duration, NaiveDate};

use crate::models::booking::{AvailableSlot, BookedInterval, Booking};
use crate::models::contact::{Contact, DaySchedule};
use crate::models::service::{Service, ServiceDuration};

/// Time interval in minutes after which we check if there is an available
/// booking slot.
pub const SLOT_SEARCH_INTERVAL_MINUTES: u32 = 15;

/// Returns the list of free time slots that can be booked on `day`.
///
/// `booked` holds the day's existing bookings with break-inclusive ends, in
/// any order. `search_interval_minutes` is the probing granularity; pass
/// [`SLOT_SEARCH_INTERVAL_MINUTES`] for the standard grid.
///
/// Always yields a result: `[("", "Closed")]` when the day has no hours,
/// `[("", "No available slots")]` when nothing fits, otherwise the slots in
/// ascending start-time order.
pub fn available_slots(
    day: NaiveDate,
    schedule: &DaySchedule,
    duration: &ServiceDuration,
    booked: &[BookedInterval],
    search_interval_minutes: u32,
) -> Vec<AvailableSlot> {
    // If there is no opening or closing time, then the salon is closed.
    let (Some(opening), Some(closing)) = (schedule.opening, schedule.closing) else {
        return vec![AvailableSlot::closed()];
    };

    // Scan the booked intervals in start order for deterministic output.
    let mut booked = booked.to_vec();
    booked.sort_by(|a, b| a.start.cmp(&b.start));

    // A zero interval would never advance the scan.
    let step = Duration::minutes(i64::from(search_interval_minutes.max(1)));

    let mut slots = Vec::new();
    let mut cur_time = opening;
    while (day.and_time(cur_time) + duration.without_break()).time() <= closing {
        let cur_time_with_break = (day.and_time(cur_time) + duration.with_break()).time();

        // The candidate conflicts if its start falls inside a booking, or
        // its break-inclusive end does. Interval ends are exclusive on the
        // start side: a booking ending exactly at `cur_time` does not block.
        let conflict = booked.iter().any(|slot| {
            (slot.start <= cur_time && cur_time < slot.end)
                || (slot.start < cur_time_with_break && cur_time_with_break <= slot.end)
        });

        if !conflict {
            let end = (day.and_time(cur_time) + duration.without_break()).time();
            slots.push(AvailableSlot::starting_at(cur_time, end));
        }

        let next = (day.and_time(cur_time) + step).time();
        if next <= cur_time {
            // Advancing wrapped past midnight; the day is exhausted.
            break;
        }
        cur_time = next;
    }

    if slots.is_empty() {
        return vec![AvailableSlot::none_available()];
    }
    slots
}

/// Computes the bookable slots for `day` from the salon's contact record,
/// the requested service and the day's bookings, on the standard search
/// grid.
///
/// Cancelled bookings are ignored. Each remaining booking occupies its start
/// time plus the requested service's break-inclusive duration, the same
/// arithmetic the slot scan applies to candidates.
pub fn free_booking_slots(
    day: NaiveDate,
    contact: &Contact,
    service: &Service,
    bookings: &[Booking],
) -> Vec<AvailableSlot> {
    let schedule = contact.schedule.for_date(day);
    let duration = service.duration();
    let booked: Vec<BookedInterval> = bookings
        .iter()
        .filter(|b| !b.cancelled)
        .map(|b| BookedInterval::from_start(day, b.time, duration.with_break()))
        .collect();
    available_slots(day, schedule, &duration, &booked, SLOT_SEARCH_INTERVAL_MINUTES)
}
