use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("nothing to export")]
    NothingToExport,
    #[error("failed to encode delimited text: {0}")]
    Csv(#[from] csv::Error),
    #[error("export produced invalid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("failed to flush export buffer: {0}")]
    Buffer(#[from] std::io::Error),
    #[error("failed to render document")]
    Render(#[from] fmt::Error),
}

impl ExportError {
    /// Empty input is expected and reported to the user rather than logged as a fault.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::NothingToExport)
    }
}
