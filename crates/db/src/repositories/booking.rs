use crate::models::DbBooking;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};

/// Fetches the non-cancelled bookings for `day`, ordered by start time.
/// The availability engine sorts its input anyway; the ordering here keeps
/// query output deterministic for logs and tests.
pub async fn get_bookings_for_day(pool: &Pool<Postgres>, day: NaiveDate) -> Result<Vec<DbBooking>> {
    tracing::debug!("Getting bookings for day: {}", day);

    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, service_id, date, time, comment, cancelled, created_at
        FROM bookings
        WHERE date = $1 AND cancelled = FALSE
        ORDER BY time
        "#,
    )
    .bind(day)
    .fetch_all(pool)
    .await?;

    tracing::debug!("Found {} bookings for {}", bookings.len(), day);
    Ok(bookings)
}
