use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

// Configuration types shared across all factgate crates
pub mod config;

pub use config::{AppConfig, AuditConfig, EnrichmentConfig, ServerConfig};

/// Response returned to the caller after a successful enrichment pass.
///
/// `received_data` is the inbound payload, byte-for-byte as the caller sent it;
/// no normalization or filtering is applied. `cat_fact` is the upstream result
/// as a generic key-value mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub received_data: Value,
    pub cat_fact: Value,
}

impl ProcessResponse {
    pub fn new(received_data: Value, cat_fact: Value) -> Self {
        Self {
            received_data,
            cat_fact,
        }
    }

    /// The JSON representation persisted as an audit row's `output_data`.
    pub fn to_value(&self) -> Value {
        json!({
            "received_data": self.received_data,
            "cat_fact": self.cat_fact,
        })
    }
}
