//! HTTP boundary for factgate.
//!
//! Maps internal outcomes to transport responses: success to 200,
//! gateway-class enrichment failures to 502, anything else to an opaque 500.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
