//! Request processing pipeline.
//!
//! `Processor` sequences one enrichment call and one unconditional audit write
//! per request, then returns the result or the original enrichment failure.

pub mod processor;

pub use processor::{PROCESS_ENDPOINT, Processor};
