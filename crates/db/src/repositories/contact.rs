use crate::models::DbContact;
use eyre::Result;
use sqlx::{Pool, Postgres};

/// Fetches the salon's contact row, which carries the weekly opening hours.
/// There is at most one row; `None` means the salon has not been set up yet.
pub async fn get_contact(pool: &Pool<Postgres>) -> Result<Option<DbContact>> {
    tracing::debug!("Getting salon contact details");

    let contact = sqlx::query_as::<_, DbContact>(
        r#"
        SELECT id, phone_number, email, address,
               opening_hour_monday, closing_hour_monday,
               opening_hour_tuesday, closing_hour_tuesday,
               opening_hour_wednesday, closing_hour_wednesday,
               opening_hour_thursday, closing_hour_thursday,
               opening_hour_friday, closing_hour_friday,
               opening_hour_saturday, closing_hour_saturday,
               opening_hour_sunday, closing_hour_sunday
        FROM contacts
        WHERE id = 'x'
        "#,
    )
    .fetch_optional(pool)
    .await?;

    if contact.is_some() {
        tracing::debug!("Contact details found");
    } else {
        tracing::debug!("No contact details row exists");
    }
    Ok(contact)
}
