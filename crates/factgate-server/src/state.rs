use std::sync::Arc;

use factgate_audit::{AuditLogger, AuditStore, PgAuditStore};
use factgate_core::AppConfig;
use factgate_enrich::EnrichmentClient;
use factgate_runtime::Processor;

/// Shared application state.
pub struct AppState {
    pub cfg: AppConfig,
    pub processor: Processor<EnrichmentClient>,
}

impl AppState {
    /// Wire the audit store, logger, upstream client, and processor from
    /// configuration. All collaborators are constructed here once and held for
    /// the process lifetime.
    pub async fn init(cfg: &AppConfig) -> anyhow::Result<Self> {
        let store: Option<Arc<dyn AuditStore>> = if !cfg.audit.enabled {
            None
        } else {
            match cfg.audit.database_url.as_deref() {
                Some(url) => {
                    let store = PgAuditStore::connect(url).await?;
                    sqlx::migrate!("./migrations").run(store.pool()).await?;
                    Some(Arc::new(store))
                }
                None => {
                    tracing::warn!(
                        "audit database URL not configured; request logs will be dropped"
                    );
                    None
                }
            }
        };

        let audit = AuditLogger::new(&cfg.audit, store);
        let client = EnrichmentClient::new(&cfg.enrichment)?;

        Ok(Self {
            cfg: cfg.clone(),
            processor: Processor::new(client, audit),
        })
    }
}
