use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create contacts table. The CHECK pins the table to its single row; the
    // application always reads and writes id 'x'.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id VARCHAR(1) PRIMARY KEY DEFAULT 'x',
            phone_number VARCHAR(20) NOT NULL,
            email VARCHAR(150) NOT NULL,
            address VARCHAR(300) NOT NULL,
            opening_hour_monday TIME NULL,
            closing_hour_monday TIME NULL,
            opening_hour_tuesday TIME NULL,
            closing_hour_tuesday TIME NULL,
            opening_hour_wednesday TIME NULL,
            closing_hour_wednesday TIME NULL,
            opening_hour_thursday TIME NULL,
            closing_hour_thursday TIME NULL,
            opening_hour_friday TIME NULL,
            closing_hour_friday TIME NULL,
            opening_hour_saturday TIME NULL,
            closing_hour_saturday TIME NULL,
            opening_hour_sunday TIME NULL,
            closing_hour_sunday TIME NULL,
            CONSTRAINT contacts_single_row CHECK (id = 'x')
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            description TEXT NOT NULL,
            price_default INTEGER NOT NULL,
            price_small INTEGER NULL,
            price_big INTEGER NULL,
            max_duration SMALLINT NOT NULL,
            active BOOLEAN NOT NULL DEFAULT TRUE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            service_id INTEGER NOT NULL REFERENCES services(id),
            date DATE NOT NULL,
            time TIME NOT NULL,
            comment TEXT NULL,
            cancelled BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes. The partial unique index is what keeps two concurrent
    // callers from holding the same slot: the availability computation is a
    // plain read and does not arbitrate that race itself.
    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_bookings_active_slot
        ON bookings (date, time) WHERE NOT cancelled;
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_date ON bookings (date);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized");
    Ok(())
}
