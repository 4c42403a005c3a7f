use factgate_audit::{AuditLogger, RequestStatus};
use factgate_core::ProcessResponse;
use factgate_enrich::{EnrichError, FactSource};
use serde_json::Value;

/// Logical operation name stored in every audit row this pipeline writes.
pub const PROCESS_ENDPOINT: &str = "/process_data";

/// Sequences one request end-to-end: enrichment call, result construction,
/// audit write, return.
///
/// Collaborators are injected at construction so tests can substitute fakes.
pub struct Processor<F: FactSource> {
    source: F,
    audit: AuditLogger,
}

impl<F: FactSource> Processor<F> {
    pub fn new(source: F, audit: AuditLogger) -> Self {
        Self { source, audit }
    }

    /// Process one inbound payload.
    ///
    /// Exactly one audit write is attempted per invocation, after the
    /// enrichment outcome is known and before control returns. On failure the
    /// original `EnrichError` value is returned unchanged, so the boundary
    /// layer can still branch on its kind.
    pub async fn process(&self, data: Value) -> Result<ProcessResponse, EnrichError> {
        match self.source.fetch().await {
            Ok(fact) => {
                let response = ProcessResponse::new(data, fact.to_value());
                self.audit
                    .log_request(
                        PROCESS_ENDPOINT,
                        &response.received_data,
                        Some(&response.to_value()),
                        RequestStatus::Success,
                        None,
                    )
                    .await;
                Ok(response)
            }
            Err(err) => {
                self.audit
                    .log_request(
                        PROCESS_ENDPOINT,
                        &data,
                        None,
                        RequestStatus::Error,
                        Some(&err.to_string()),
                    )
                    .await;
                Err(err)
            }
        }
    }
}
