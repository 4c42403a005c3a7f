//! Typed HTTP client for the upstream fact API.
//!
//! Wraps `reqwest::Client` with a bounded total timeout. One invocation means
//! exactly one outbound request: no retries, no caching, no circuit breaking.

use std::time::Duration;

use async_trait::async_trait;
use factgate_core::EnrichmentConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::EnrichError;

/// Upstream response shape. Both fields are required; a body missing either is
/// a validation failure, not a partial success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatFact {
    pub fact: String,
    pub length: u64,
}

impl CatFact {
    /// The generic key-value representation embedded in responses and audit rows.
    pub fn to_value(&self) -> Value {
        json!({
            "fact": self.fact,
            "length": self.length,
        })
    }
}

/// Source of enrichment facts.
///
/// The orchestrator takes this seam as a constructor parameter so tests can
/// substitute a fake for the network client.
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch(&self) -> Result<CatFact, EnrichError>;
}

/// HTTP-backed [`FactSource`] against a fixed configured endpoint.
pub struct EnrichmentClient {
    client: Client,
    url: String,
}

impl EnrichmentClient {
    pub fn new(config: &EnrichmentConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl FactSource for EnrichmentClient {
    async fn fetch(&self) -> Result<CatFact, EnrichError> {
        debug!(url = %self.url, "fetching fact from upstream");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(EnrichError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichError::UpstreamStatus { status });
        }

        let body = response.text().await.map_err(EnrichError::from_reqwest)?;
        let fact: CatFact = serde_json::from_str(&body).map_err(EnrichError::InvalidResponse)?;

        Ok(fact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(url: String, timeout_secs: u64) -> EnrichmentClient {
        EnrichmentClient::new(&EnrichmentConfig { url, timeout_secs }).unwrap()
    }

    #[tokio::test]
    async fn fetch_parses_well_formed_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fact"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "fact": "Cats are awesome!",
                "length": 18,
            })))
            .mount(&server)
            .await;

        let client = client_for(format!("{}/fact", server.uri()), 10);
        let fact = client.fetch().await.unwrap();

        assert_eq!(
            fact,
            CatFact {
                fact: "Cats are awesome!".to_string(),
                length: 18,
            }
        );
    }

    #[tokio::test]
    async fn non_success_status_is_an_upstream_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fact"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(format!("{}/fact", server.uri()), 10);
        let err = client.fetch().await.unwrap_err();

        match err {
            EnrichError::UpstreamStatus { status } => assert_eq!(status.as_u16(), 404),
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_required_field_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fact"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "fact": "no length here" })),
            )
            .mount(&server)
            .await;

        let client = client_for(format!("{}/fact", server.uri()), 10);
        let err = client.fetch().await.unwrap_err();

        assert!(matches!(err, EnrichError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn mistyped_field_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fact"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "fact": "typed wrong",
                "length": "eleven",
            })))
            .mount(&server)
            .await;

        let client = client_for(format!("{}/fact", server.uri()), 10);
        let err = client.fetch().await.unwrap_err();

        assert!(matches!(err, EnrichError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_connection_error() {
        // Bind and immediately drop a listener so the port is known-dead.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{addr}/fact"), 10);
        let err = client.fetch().await.unwrap_err();

        assert!(matches!(err, EnrichError::Connection(_)));
    }

    #[tokio::test]
    async fn exceeding_the_total_timeout_is_a_connection_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fact"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "fact": "slow", "length": 4 }))
                    .set_delay(Duration::from_millis(1500)),
            )
            .mount(&server)
            .await;

        let client = client_for(format!("{}/fact", server.uri()), 1);
        let err = client.fetch().await.unwrap_err();

        assert!(matches!(err, EnrichError::Connection(_)));
    }
}
