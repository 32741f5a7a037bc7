use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::{info, warn};

use super::document::ExportDocument;

/// Host capability that receives composed exports: a file-save channel and a
/// print-presentation channel.
pub trait DeliverySurface: Debug + Send + Sync {
    fn save(&self, content: &[u8], filename: &str, mime_type: &str) -> Result<(), DeliveryError>;

    /// Present a print document so its embedded script can open the print dialog.
    fn present_and_print(&self, document: &ExportDocument) -> Result<(), DeliveryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("delivery surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("failed to write {filename}: {source}")]
    Io {
        filename: String,
        #[source]
        source: io::Error,
    },
}

impl DeliveryError {
    pub fn is_surface_unavailable(&self) -> bool {
        matches!(self, Self::SurfaceUnavailable(_))
    }
}

pub fn deliver_as_file(
    surface: &dyn DeliverySurface,
    document: &ExportDocument,
) -> Result<(), DeliveryError> {
    surface
        .save(document.as_bytes(), &document.filename, &document.mime_type)
        .inspect_err(|err| warn!(filename = %document.filename, error = %err, "file delivery failed"))
}

pub fn deliver_as_printable(
    surface: &dyn DeliverySurface,
    document: &ExportDocument,
) -> Result<(), DeliveryError> {
    surface
        .present_and_print(document)
        .inspect_err(|err| warn!(filename = %document.filename, error = %err, "print delivery failed"))
}

/// Writes deliveries into a directory. Printable documents land as their
/// `.html` file and print when opened.
#[derive(Debug, Clone)]
pub struct FilesystemSurface {
    root: PathBuf,
}

impl FilesystemSurface {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn open(&self) -> Result<&Path, DeliveryError> {
        fs::create_dir_all(&self.root).map_err(|err| {
            DeliveryError::SurfaceUnavailable(format!("{}: {err}", self.root.display()))
        })?;
        Ok(&self.root)
    }

    fn write(&self, content: &[u8], filename: &str) -> Result<PathBuf, DeliveryError> {
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| DeliveryError::Io {
                filename: filename.to_string(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a file name"),
            })?;
        let path = self.open()?.join(name);
        fs::write(&path, content).map_err(|source| DeliveryError::Io {
            filename: filename.to_string(),
            source,
        })?;
        Ok(path)
    }
}

impl DeliverySurface for FilesystemSurface {
    fn save(&self, content: &[u8], filename: &str, mime_type: &str) -> Result<(), DeliveryError> {
        let path = self.write(content, filename)?;
        info!(path = %path.display(), mime_type, "saved export");
        Ok(())
    }

    fn present_and_print(&self, document: &ExportDocument) -> Result<(), DeliveryError> {
        let path = self.write(document.as_bytes(), &document.filename)?;
        info!(path = %path.display(), "print document ready");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryKind {
    File,
    Print,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub kind: DeliveryKind,
    pub filename: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}

/// In-memory surface that records every delivery. A blocked surface refuses
/// all deliveries, like a browser blocking the print pop-up.
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    deliveries: Arc<Mutex<Vec<Delivery>>>,
    blocked: bool,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocked() -> Self {
        Self {
            blocked: true,
            ..Self::default()
        }
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<Delivery> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Delivery>> {
        self.deliveries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, delivery: Delivery) -> Result<(), DeliveryError> {
        if self.blocked {
            return Err(DeliveryError::SurfaceUnavailable(
                "surface is blocked".to_string(),
            ));
        }
        self.lock().push(delivery);
        Ok(())
    }
}

impl DeliverySurface for MemorySurface {
    fn save(&self, content: &[u8], filename: &str, mime_type: &str) -> Result<(), DeliveryError> {
        self.record(Delivery {
            kind: DeliveryKind::File,
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            content: content.to_vec(),
        })
    }

    fn present_and_print(&self, document: &ExportDocument) -> Result<(), DeliveryError> {
        self.record(Delivery {
            kind: DeliveryKind::Print,
            filename: document.filename.clone(),
            mime_type: document.mime_type.clone(),
            content: document.as_bytes().to_vec(),
        })
    }
}
