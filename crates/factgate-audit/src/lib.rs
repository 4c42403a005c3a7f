//! # factgate-audit
//!
//! One audit row per processed request, written on a best-effort basis.
//!
//! The hard invariant of this crate: **audit logging never causes request
//! processing to fail.** `AuditLogger::log_request` has an infallible
//! signature; every failure on the write path is caught and reported through
//! tracing only.
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Logging disabled | No I/O, no identifier |
//! | No store configured | Warning, no identifier |
//! | Write fails | Warning, identifier still returned |
//! | Write succeeds | Identifier returned |

pub mod error;
pub mod logger;
pub mod record;
pub mod store;

pub use error::AuditError;
pub use logger::AuditLogger;
pub use record::{AuditRecord, RequestStatus};
pub use store::{AuditStore, MemoryStore, PgAuditStore};
