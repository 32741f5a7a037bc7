use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::analysis::{render_analysis_report, AnalysisResult};
use super::delivery::{deliver_as_file, deliver_as_printable, DeliveryError, DeliverySurface};
use super::detail::{render_detail, DetailSection, DetailSectionSpec};
use super::document::{ExportDocument, ExportFormat};
use super::error::ExportError;
use super::markup::RenderContext;
use super::schema::{Column, Record};
use super::tabular::export_table;
use crate::config::BrandConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableExportRequest {
    pub format: ExportFormat,
    pub title: String,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailExportRequest {
    pub title: String,
    pub record: Record,
    pub sections: Vec<DetailSectionSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisExportRequest {
    pub subject_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub result: AnalysisResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// User-facing outcome of an export request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportNotice {
    pub level: NoticeLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl ExportNotice {
    fn success(message: impl Into<String>, filename: &str) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            filename: Some(filename.to_string()),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
            filename: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            filename: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }
}

impl fmt::Display for ExportNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filename {
            Some(filename) => write!(f, "{} ({filename})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

pub const NOTHING_TO_EXPORT: &str = "Nothing to export";
pub const SURFACE_UNAVAILABLE: &str =
    "Could not open the output. Allow pop-ups for this site or check the output location, then try again.";

/// Composes exports and hands them to a delivery surface, folding every
/// outcome into an [`ExportNotice`].
#[derive(Debug, Clone)]
pub struct ExportService {
    surface: Arc<dyn DeliverySurface>,
    brand: BrandConfig,
}

impl ExportService {
    pub fn new(surface: Arc<dyn DeliverySurface>, brand: BrandConfig) -> Self {
        Self { surface, brand }
    }

    pub fn brand(&self) -> &BrandConfig {
        &self.brand
    }

    fn context(&self) -> RenderContext {
        RenderContext::now(self.brand.clone())
    }

    pub fn compose_table(
        &self,
        request: &TableExportRequest,
    ) -> Result<ExportDocument, ExportError> {
        export_table(
            &self.context(),
            request.format,
            &request.records,
            &request.columns,
            &request.title,
        )
    }

    pub fn compose_detail(
        &self,
        request: &DetailExportRequest,
    ) -> Result<ExportDocument, ExportError> {
        let sections: Vec<DetailSection> = request
            .sections
            .iter()
            .cloned()
            .map(DetailSection::from)
            .collect();
        render_detail(&self.context(), &request.record, &sections, &request.title)
    }

    pub fn compose_analysis(
        &self,
        request: &AnalysisExportRequest,
    ) -> Result<ExportDocument, ExportError> {
        render_analysis_report(
            &self.context(),
            &request.subject_name,
            request.subject_url.as_deref(),
            request.overall_score,
            &request.result,
        )
    }

    /// CSV and spreadsheet exports are saved; print exports are presented.
    pub fn export_table(&self, request: &TableExportRequest) -> ExportNotice {
        let label = request.format.label();
        match self.compose_table(request) {
            Ok(document) => match request.format {
                ExportFormat::Print => self.print(&document),
                ExportFormat::Csv | ExportFormat::Spreadsheet => self.save(&document, label),
            },
            Err(err) => compose_failed(err),
        }
    }

    pub fn export_detail(&self, request: &DetailExportRequest) -> ExportNotice {
        match self.compose_detail(request) {
            Ok(document) => self.print(&document),
            Err(err) => compose_failed(err),
        }
    }

    pub fn export_analysis(&self, request: &AnalysisExportRequest) -> ExportNotice {
        match self.compose_analysis(request) {
            Ok(document) => self.print(&document),
            Err(err) => compose_failed(err),
        }
    }

    fn save(&self, document: &ExportDocument, label: &str) -> ExportNotice {
        match deliver_as_file(self.surface.as_ref(), document) {
            Ok(()) => {
                info!(filename = %document.filename, "export saved");
                ExportNotice::success(format!("{label} export ready"), &document.filename)
            }
            Err(err) => delivery_failed(err),
        }
    }

    fn print(&self, document: &ExportDocument) -> ExportNotice {
        match deliver_as_printable(self.surface.as_ref(), document) {
            Ok(()) => {
                info!(filename = %document.filename, "print document presented");
                ExportNotice::success("Print document opened", &document.filename)
            }
            Err(err) => delivery_failed(err),
        }
    }
}

fn compose_failed(err: ExportError) -> ExportNotice {
    if err.is_empty_input() {
        info!("export skipped: nothing to export");
        ExportNotice::warning(NOTHING_TO_EXPORT)
    } else {
        warn!(error = %err, "export composition failed");
        ExportNotice::error(format!("Export failed: {err}"))
    }
}

fn delivery_failed(err: DeliveryError) -> ExportNotice {
    if err.is_surface_unavailable() {
        ExportNotice::warning(SURFACE_UNAVAILABLE)
    } else {
        ExportNotice::error(format!("Export failed: {err}"))
    }
}
