//! Audit logger implementation.

use std::sync::Arc;

use chrono::Utc;
use factgate_core::AuditConfig;
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::error::AuditError;
use crate::record::{AuditRecord, RequestStatus};
use crate::store::AuditStore;

/// Writes one audit row per processed request.
///
/// `log_request` never fails the caller: when logging is disabled it returns
/// immediately, when no store is configured it warns, and when the write
/// itself fails the error is caught and reported through tracing.
pub struct AuditLogger {
    enabled: bool,
    store: Option<Arc<dyn AuditStore>>,
}

impl AuditLogger {
    pub fn new(config: &AuditConfig, store: Option<Arc<dyn AuditStore>>) -> Self {
        Self {
            enabled: config.enabled,
            store,
        }
    }

    /// A logger that performs no I/O at all.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            store: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record one request outcome.
    ///
    /// Returns the generated row id, or `None` when logging is disabled or no
    /// store is available. The id is returned even if the write fails after
    /// generation.
    pub async fn log_request(
        &self,
        endpoint: &str,
        input_data: &Value,
        output_data: Option<&Value>,
        status: RequestStatus,
        error_message: Option<&str>,
    ) -> Option<Uuid> {
        if !self.enabled {
            return None;
        }

        let Some(store) = &self.store else {
            warn!("audit store not available, dropping request log");
            return None;
        };

        let id = Uuid::new_v4();
        if let Err(err) = Self::write(
            store.as_ref(),
            id,
            endpoint,
            input_data,
            output_data,
            status,
            error_message,
        )
        .await
        {
            warn!(record_id = %id, error = %err, "failed to write audit record");
        }

        Some(id)
    }

    async fn write(
        store: &dyn AuditStore,
        id: Uuid,
        endpoint: &str,
        input_data: &Value,
        output_data: Option<&Value>,
        status: RequestStatus,
        error_message: Option<&str>,
    ) -> Result<(), AuditError> {
        let record = AuditRecord {
            id,
            timestamp: Utc::now(),
            endpoint: endpoint.to_string(),
            input_data: serde_json::to_string(input_data)?,
            output_data: output_data.map(serde_json::to_string).transpose()?,
            status,
            error_message: error_message.map(str::to_string),
        };

        store.insert(&record).await
    }
}
