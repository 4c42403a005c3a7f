//! Error types for the HTTP boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use factgate_enrich::EnrichError;
use serde_json::json;
use thiserror::Error;

/// Failures mapped to transport responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The enrichment dependency did not return a usable response.
    #[error("{0}")]
    BadGateway(EnrichError),

    /// Anything else raised during processing. The detail is logged but never
    /// reaches the caller.
    #[error("An unexpected error occurred")]
    Internal(#[source] anyhow::Error),
}

impl From<EnrichError> for ApiError {
    fn from(err: EnrichError) -> Self {
        match err {
            EnrichError::UpstreamStatus { .. }
            | EnrichError::Connection(_)
            | EnrichError::InvalidResponse(_) => Self::BadGateway(err),
            EnrichError::Transport(_) => Self::Internal(err.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadGateway(err) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "detail": err.to_string() })),
            )
                .into_response(),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "unexpected error while processing request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "An unexpected error occurred" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factgate_enrich::{CatFact, StatusCode as UpstreamStatusCode};
    use serde_json::Value;

    async fn response_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn upstream_status_maps_to_bad_gateway() {
        let err = ApiError::from(EnrichError::UpstreamStatus {
            status: UpstreamStatusCode::NOT_FOUND,
        });

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = response_body(response).await;
        assert_eq!(body["detail"], "upstream returned 404 Not Found");
    }

    #[tokio::test]
    async fn invalid_response_maps_to_bad_gateway() {
        let serde_err = serde_json::from_str::<CatFact>("{}").unwrap_err();
        let err = ApiError::from(EnrichError::InvalidResponse(serde_err));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = response_body(response).await;
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .starts_with("invalid upstream response")
        );
    }

    #[tokio::test]
    async fn transport_failure_maps_to_opaque_internal_error() {
        // A relative URL never reaches the socket layer; reqwest reports a
        // builder error, which classifies as neither connect nor status.
        let reqwest_err = reqwest::Client::new()
            .get("not-a-url")
            .send()
            .await
            .unwrap_err();
        let err = ApiError::from(EnrichError::Transport(reqwest_err));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response_body(response).await;
        assert_eq!(body["detail"], "An unexpected error occurred");
    }
}
