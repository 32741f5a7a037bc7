//! Report and document export engine.
//!
//! Composers turn records, detail sections and analysis results into
//! [`exports::ExportDocument`]s; delivery surfaces hand those documents to the
//! host (file save or print presentation).

pub mod config;
pub mod error;
pub mod exports;
pub mod telemetry;
