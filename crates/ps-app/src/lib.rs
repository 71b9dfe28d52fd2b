//! PantryScan Application Orchestration Layer
//!
//! This crate contains business logic use cases built on the ps-core ports:
//! the scan-to-recipes pipeline and the favorite synchronization controller.

pub mod context;
pub mod error;
pub mod usecases;

pub use context::SessionContext;
pub use error::PipelineError;
