use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use groombook_api::middleware::error_handling::AppError;
use groombook_core::availability::free_booking_slots;
use groombook_core::errors::SalonError;
use groombook_core::models::booking::{Booking, BookingSlotsResponse};
use mockall::predicate;
use pretty_assertions::assert_eq;

use crate::test_utils::{booking_row, contact_row, service_row, t, TestContext};

/// 2023-12-12, a Tuesday — the one open day of the test contact row.
fn tuesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, 12).unwrap()
}

/// Drives the same composition as the `available_booking_slots` handler,
/// with the repositories replaced by mocks.
async fn fetch_booking_slots(
    ctx: &mut TestContext,
    day: NaiveDate,
    service_id: i32,
) -> Result<Json<BookingSlotsResponse>, AppError> {
    let contact = ctx
        .contact_repo
        .get_contact()
        .await
        .map_err(SalonError::Database)?
        .ok_or_else(|| SalonError::NotFound("Salon contact details not found".to_string()))?;

    let service = ctx
        .service_repo
        .get_service_by_id(service_id)
        .await
        .map_err(SalonError::Database)?
        .ok_or_else(|| SalonError::NotFound(format!("Service with ID {} not found", service_id)))?;

    let bookings: Vec<Booking> = ctx
        .booking_repo
        .get_bookings_for_day(day)
        .await
        .map_err(SalonError::Database)?
        .into_iter()
        .map(Into::into)
        .collect();

    let booking_slots = free_booking_slots(day, &contact.into(), &service.into(), &bookings);

    Ok(Json(BookingSlotsResponse {
        status: "OK".to_string(),
        booking_slots,
    }))
}

#[tokio::test]
async fn test_missing_contact_row_is_not_found() {
    let mut ctx = TestContext::new();
    ctx.contact_repo.expect_get_contact().returning(|| Ok(None));

    let result = fetch_booking_slots(&mut ctx, tuesday(), 1).await;

    let err = result.err().expect("expected an error");
    assert!(matches!(err.0, SalonError::NotFound(_)));
    let response = err.into_response();
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_service_is_not_found() {
    let mut ctx = TestContext::new();
    ctx.contact_repo
        .expect_get_contact()
        .returning(|| Ok(Some(contact_row())));
    ctx.service_repo
        .expect_get_service_by_id()
        .with(predicate::eq(99))
        .returning(|_| Ok(None));

    let result = fetch_booking_slots(&mut ctx, tuesday(), 99).await;

    let err = result.err().expect("expected an error");
    match &err.0 {
        SalonError::NotFound(message) => assert!(message.contains("99")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_database_error_maps_to_internal() {
    let mut ctx = TestContext::new();
    ctx.contact_repo
        .expect_get_contact()
        .returning(|| Err(eyre::eyre!("connection refused")));

    let result = fetch_booking_slots(&mut ctx, tuesday(), 1).await;

    let err = result.err().expect("expected an error");
    let response = err.into_response();
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_slots_around_existing_booking() {
    let mut ctx = TestContext::new();
    ctx.contact_repo
        .expect_get_contact()
        .returning(|| Ok(Some(contact_row())));
    ctx.service_repo
        .expect_get_service_by_id()
        .with(predicate::eq(1))
        .returning(|_| Ok(Some(service_row(15))));
    ctx.booking_repo
        .expect_get_bookings_for_day()
        .with(predicate::eq(tuesday()))
        .returning(|day| Ok(vec![booking_row(day, t(8, 15))]));

    let result = fetch_booking_slots(&mut ctx, tuesday(), 1).await;

    let Json(response) = result.expect("expected a slot list");
    assert_eq!(response.status, "OK");
    let slots: Vec<(String, String)> = response
        .booking_slots
        .into_iter()
        .map(|s| (s.value, s.label))
        .collect();
    assert_eq!(
        slots,
        vec![("08:45".to_string(), "08:45 - 09:00".to_string())]
    );
}

#[tokio::test]
async fn test_closed_weekday_returns_closed_sentinel() {
    let mut ctx = TestContext::new();
    ctx.contact_repo
        .expect_get_contact()
        .returning(|| Ok(Some(contact_row())));
    ctx.service_repo
        .expect_get_service_by_id()
        .with(predicate::eq(1))
        .returning(|_| Ok(Some(service_row(15))));
    ctx.booking_repo
        .expect_get_bookings_for_day()
        .returning(|_| Ok(vec![]));

    // 2023-12-17 is a Sunday; the test contact only opens on Tuesdays.
    let sunday = NaiveDate::from_ymd_opt(2023, 12, 17).unwrap();
    let result = fetch_booking_slots(&mut ctx, sunday, 1).await;

    let Json(response) = result.expect("expected the closed sentinel");
    let slots: Vec<(String, String)> = response
        .booking_slots
        .into_iter()
        .map(|s| (s.value, s.label))
        .collect();
    assert_eq!(slots, vec![(String::new(), "Closed".to_string())]);
}
