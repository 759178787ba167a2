use crate::models::DbService;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbService>> {
    tracing::debug!("Getting service by id: {}", id);

    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, description, price_default, price_small, price_big,
               max_duration, active
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if let Some(s) = &service {
        tracing::debug!("Service found: id={}, name={}", s.id, s.name);
    } else {
        tracing::debug!("No service found with id: {}", id);
    }
    Ok(service)
}
