//! # Booking Handlers
//!
//! This module contains the handler that lists the available booking slots
//! for a given day and service. It is the caller side of the availability
//! engine:
//!
//! 1. Resolve the salon's weekly schedule from the contact row
//! 2. Resolve the requested service and its duration
//! 3. Load the day's non-cancelled bookings
//! 4. Hand everything to `groombook_core::availability::free_booking_slots`
//!    and serialize the result under the response envelope
//!
//! The engine encodes "closed" and "no free slots" as ordinary slot lists,
//! so this handler only fails when an upstream record is missing (404) or
//! the database errors (500).

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use groombook_core::availability::free_booking_slots;
use groombook_core::errors::SalonError;
use groombook_core::models::booking::{Booking, BookingSlotsResponse};
use serde::Deserialize;
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the available booking slots endpoint.
///
/// # Fields
///
/// * `day` - The day to list slots for, `YYYY-MM-DD`
/// * `service_id` - The ID of the service being booked
#[derive(Debug, Deserialize)]
pub struct BookingSlotsQuery {
    /// The day for which free slots are listed
    pub day: NaiveDate,

    /// The service being booked
    pub service_id: i32,
}

/// Lists the available booking slots for a day and a service.
///
/// # Endpoint
///
/// ```text
/// GET /api/bookings/slots?day=2023-12-12&service_id=1
/// ```
///
/// # Returns
///
/// A JSON envelope whose `booking_slots` field is an array of
/// `[value, label]` pairs: the bookable start times, or a single
/// `["", "Closed"]` / `["", "No available slots"]` entry.
///
/// # Errors
///
/// * `SalonError::NotFound` - No contact row exists, or the service id is
///   unknown
/// * `SalonError::Database` - Database error
#[axum::debug_handler]
pub async fn available_booking_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<BookingSlotsQuery>,
) -> Result<Json<BookingSlotsResponse>, AppError> {
    // The contact row carries the weekly opening hours.
    let contact = groombook_db::repositories::contact::get_contact(&state.db_pool)
        .await
        .map_err(SalonError::Database)?
        .ok_or_else(|| SalonError::NotFound("Salon contact details not found".to_string()))?;

    let service =
        groombook_db::repositories::service::get_service_by_id(&state.db_pool, query.service_id)
            .await
            .map_err(SalonError::Database)?
            .ok_or_else(|| {
                SalonError::NotFound(format!("Service with ID {} not found", query.service_id))
            })?;

    let bookings: Vec<Booking> =
        groombook_db::repositories::booking::get_bookings_for_day(&state.db_pool, query.day)
            .await
            .map_err(SalonError::Database)?
            .into_iter()
            .map(Into::into)
            .collect();

    let booking_slots =
        free_booking_slots(query.day, &contact.into(), &service.into(), &bookings);

    Ok(Json(BookingSlotsResponse {
        status: "OK".to_string(),
        booking_slots,
    }))
}
