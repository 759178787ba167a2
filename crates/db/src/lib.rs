//! Read-side persistence for the Groombook salon backend: the contact row
//! holding the weekly opening hours, the service catalogue and the day's
//! bookings. The availability engine never touches the database itself; the
//! repositories here feed it.

pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}
