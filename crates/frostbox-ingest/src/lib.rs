//! Bulk data-ingestion pipelines.
//!
//! Two independent pipelines driven by the same validate → transform →
//! persist pattern:
//! - image ingestion: downscale an uploaded photo to fit fixed pixel and
//!   byte budgets and persist it under the per-user namespace;
//! - spreadsheet ingestion: parse an uploaded CSV into a row-annotated
//!   import preview without aborting on field-level problems.
//!
//! Neither pipeline performs authorization or persists entity records; they
//! produce storage-ready artifacts for the consuming layer.

pub mod error;
pub mod image;
pub mod service;
pub mod spreadsheet;
pub mod validator;

pub use error::{IngestError, IngestResult};
pub use service::IngestService;
