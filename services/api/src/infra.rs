use export_engine::error::AppError;
use export_engine::exports::ExportFormat;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_format(raw: &str) -> Result<ExportFormat, String> {
    raw.parse::<ExportFormat>().map_err(|err| err.to_string())
}

pub(crate) fn read_json<T>(path: &Path) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
