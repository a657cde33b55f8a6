use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::RecordId;
use sqlx::{PgPool, Row, postgres::PgPoolOptions, postgres::PgRow};

use crate::{HealthCheck, NewHealthCheck, Result, store::RecordStore};

/// PostgreSQL-backed record store implementation.
#[derive(Clone)]
pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    /// Creates a new PostgreSQL record store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn row_to_record(row: PgRow) -> Result<HealthCheck> {
        Ok(HealthCheck {
            id: RecordId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            feeling: row.try_get("feeling")?,
            date: row.try_get::<DateTime<Utc>, _>("date")?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        })
    }
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    async fn insert(&self, record: NewHealthCheck) -> Result<HealthCheck> {
        let row = sqlx::query(
            r#"
            INSERT INTO team_health (name, feeling, date)
            VALUES ($1, $2, $3)
            RETURNING id, name, feeling, date, created_at
            "#,
        )
        .bind(&record.name)
        .bind(&record.feeling)
        .bind(record.date)
        .fetch_one(&self.pool)
        .await?;

        let stored = Self::row_to_record(row)?;
        tracing::debug!(id = %stored.id, "record inserted");
        Ok(stored)
    }

    async fn list_recent_first(&self) -> Result<Vec<HealthCheck>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, feeling, date, created_at
            FROM team_health
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_record).collect()
    }
}
