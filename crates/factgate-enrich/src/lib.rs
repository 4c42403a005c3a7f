//! Upstream fact API client.
//!
//! One outbound GET per call, a bounded total timeout, and a typed failure
//! taxonomy: non-2xx statuses, reachability problems, and malformed response
//! bodies are distinct errors so the boundary layer can map them to the right
//! transport status.

pub mod client;
pub mod error;

pub use client::{CatFact, EnrichmentClient, FactSource};
pub use error::EnrichError;
pub use reqwest::StatusCode;
