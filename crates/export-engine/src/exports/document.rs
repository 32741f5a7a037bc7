use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub(crate) const SPREADSHEET_MIME: &str = "application/vnd.ms-excel";

/// A fully composed export, ready to hand to a delivery surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub content: String,
    pub filename: String,
    pub mime_type: String,
}

impl ExportDocument {
    pub(crate) fn new(content: String, filename: String, mime_type: impl Into<String>) -> Self {
        Self {
            content,
            filename,
            mime_type: mime_type.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

/// Output representation for a tabular export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[serde(alias = "delimited")]
    Csv,
    #[serde(alias = "xls", alias = "excel")]
    Spreadsheet,
    #[serde(alias = "pdf")]
    Print,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Spreadsheet => "xls",
            Self::Print => "html",
        }
    }

    pub fn mime_type(self) -> String {
        match self {
            Self::Csv => mime::TEXT_CSV_UTF_8.to_string(),
            Self::Spreadsheet => SPREADSHEET_MIME.to_string(),
            Self::Print => mime::TEXT_HTML_UTF_8.to_string(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Spreadsheet => "Excel",
            Self::Print => "Print",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown export format '{0}' (expected csv, xls or print)")]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "csv" | "delimited" => Ok(Self::Csv),
            "xls" | "excel" | "spreadsheet" => Ok(Self::Spreadsheet),
            "print" | "pdf" | "html" => Ok(Self::Print),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// `<slug>_<YYYY-MM-DD>.<extension>`
pub(crate) fn export_filename(base: &str, extension: &str, date: NaiveDate) -> String {
    format!("{}_{}.{}", slugify(base), date.format("%Y-%m-%d"), extension)
}

fn slugify(raw: &str) -> String {
    let mut slug = raw
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                '-'
            }
        })
        .collect::<String>();
    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "export".to_string()
    } else {
        trimmed.to_string()
    }
}
