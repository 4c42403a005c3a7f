//! Audit storage backends.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::RwLock;

use crate::error::AuditError;
use crate::record::AuditRecord;

/// Trait for audit storage backends.
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Append one audit row.
    async fn insert(&self, record: &AuditRecord) -> Result<(), AuditError>;
}

/// Postgres-backed audit store.
pub struct PgAuditStore {
    pool: PgPool,
}

impl PgAuditStore {
    pub async fn connect(database_url: &str) -> Result<Self, AuditError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AuditStore for PgAuditStore {
    async fn insert(&self, record: &AuditRecord) -> Result<(), AuditError> {
        // Scoped transaction: dropping it before commit rolls the insert back,
        // so every exit path releases cleanly.
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO request_logs \
             (id, timestamp, endpoint, input_data, output_data, status, error_message) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(record.id)
        .bind(record.timestamp)
        .bind(&record.endpoint)
        .bind(&record.input_data)
        .bind(record.output_data.as_deref())
        .bind(record.status.as_str())
        .bind(record.error_message.as_deref())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}

/// In-memory store used by tests and local development.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<AuditRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything stored so far.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.read().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AuditStore for MemoryStore {
    async fn insert(&self, record: &AuditRecord) -> Result<(), AuditError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| AuditError::Storage(format!("failed to acquire write lock: {e}")))?;
        records.push(record.clone());
        Ok(())
    }
}
