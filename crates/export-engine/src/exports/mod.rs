//! Export composers and delivery.
//!
//! Composers are synchronous string builders that return an
//! [`ExportDocument`]; the [`ExportService`] hands documents to a
//! [`DeliverySurface`] and reports the outcome as an [`ExportNotice`].

pub mod analysis;
pub mod delivery;
pub mod detail;
pub mod document;
pub mod error;
pub mod markup;
pub mod router;
pub mod schema;
pub mod service;
pub mod tabular;
pub mod value;

#[cfg(test)]
mod tests;

pub use analysis::{render_analysis_report, AnalysisResult, ReportComposer, ScoreTier};
pub use delivery::{
    deliver_as_file, deliver_as_printable, Delivery, DeliveryError, DeliveryKind,
    DeliverySurface, FilesystemSurface, MemorySurface,
};
pub use detail::{render_detail, DetailField, DetailSection, DetailSectionSpec, FieldFormat};
pub use document::{ExportDocument, ExportFormat, UnknownFormat};
pub use error::ExportError;
pub use markup::{escape_html, RenderContext};
pub use router::export_router;
pub use schema::{parse_column_list, Column, Record};
pub use service::{
    AnalysisExportRequest, DetailExportRequest, ExportNotice, ExportService, NoticeLevel,
    TableExportRequest,
};
pub use tabular::{export_table, to_delimited_text, to_print_document, to_spreadsheet_markup};
pub use value::{display_value, Rendering};
