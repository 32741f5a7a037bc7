use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::warn;

use super::document::ExportDocument;
use super::error::ExportError;
use super::service::{
    AnalysisExportRequest, DetailExportRequest, ExportService, TableExportRequest,
};

/// Router exposing one endpoint per composer. Successful responses carry the
/// composed document as an attachment.
pub fn export_router(service: Arc<ExportService>) -> Router {
    Router::new()
        .route("/api/v1/exports/table", post(table_handler))
        .route("/api/v1/exports/detail", post(detail_handler))
        .route("/api/v1/exports/analysis", post(analysis_handler))
        .with_state(service)
}

pub(crate) async fn table_handler(
    State(service): State<Arc<ExportService>>,
    axum::Json(request): axum::Json<TableExportRequest>,
) -> Response {
    document_response(service.compose_table(&request))
}

pub(crate) async fn detail_handler(
    State(service): State<Arc<ExportService>>,
    axum::Json(request): axum::Json<DetailExportRequest>,
) -> Response {
    document_response(service.compose_detail(&request))
}

pub(crate) async fn analysis_handler(
    State(service): State<Arc<ExportService>>,
    axum::Json(request): axum::Json<AnalysisExportRequest>,
) -> Response {
    document_response(service.compose_analysis(&request))
}

fn document_response(result: Result<ExportDocument, ExportError>) -> Response {
    match result {
        Ok(document) => attachment(document),
        Err(ExportError::NothingToExport) => {
            let payload = json!({
                "error": ExportError::NothingToExport.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            warn!(error = %other, "export request failed");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn attachment(document: ExportDocument) -> Response {
    let disposition = content_disposition(&document.filename);
    let content_type = HeaderValue::from_str(&document.mime_type)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

    let mut response = (StatusCode::OK, document.content).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, content_type);
    match HeaderValue::from_str(&disposition) {
        Ok(value) => {
            headers.insert(header::CONTENT_DISPOSITION, value);
        }
        Err(_) => {
            headers.insert(
                header::CONTENT_DISPOSITION,
                HeaderValue::from_static("attachment"),
            );
        }
    }
    response
}

/// `attachment` with an ASCII `filename` fallback and an RFC 5987
/// `filename*` carrying the UTF-8 name.
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|ch| match ch {
            '"' | '\\' => '_',
            ch if ch.is_ascii() && !ch.is_ascii_control() => ch,
            _ => '_',
        })
        .collect();
    if fallback == filename {
        return format!("attachment; filename=\"{fallback}\"");
    }
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        encode_ext_value(filename)
    )
}

fn encode_ext_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'!'
            | b'#'
            | b'$'
            | b'&'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~' => encoded.push(char::from(byte)),
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }
    encoded
}
