use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::config::BrandConfig;
use crate::exports::analysis::AnalysisResult;
use crate::exports::markup::RenderContext;
use crate::exports::schema::{Column, Record};
use crate::exports::service::ExportService;
use crate::exports::{export_router, MemorySurface};

pub(super) fn context() -> RenderContext {
    let generated_at = NaiveDate::from_ymd_opt(2025, 3, 14)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .expect("valid timestamp");
    RenderContext::at(BrandConfig::new("Atlas Digital"), generated_at)
}

pub(super) fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

pub(super) fn lead_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name"),
        Column::new("city", "City"),
        Column::new("notes", "Notes"),
        Column::new("tags", "Tags"),
    ]
}

pub(super) fn leads() -> Vec<Record> {
    vec![
        record(json!({
            "name": "Çağlar Şahin",
            "city": "İstanbul",
            "notes": "Said \"call me\", then hung up",
            "tags": ["seo", "ads"],
        })),
        record(json!({
            "name": "Gülşen Öztürk",
            "city": "Muğla",
            "notes": "line one\nline two",
            "tags": null,
        })),
    ]
}

pub(super) fn analysis_result(value: Value) -> AnalysisResult {
    serde_json::from_value(value).expect("analysis fixture deserializes")
}

pub(super) fn full_analysis() -> AnalysisResult {
    analysis_result(json!({
        "scores": { "seo": 58, "web_design": 84, "social_media": 71 },
        "summary": "Solid design, weak search visibility.",
        "technical_status": {
            "ssl": true,
            "mobile_performance": 62,
            "desktop_performance": 91,
            "load_time": 2.8
        },
        "compliance": { "privacy_policy": true, "cookie_consent": false },
        "social_media": {
            "platforms": { "instagram": "@atlas", "linkedin": null },
            "narrative": "Instagram is active; LinkedIn is missing."
        },
        "ui_review": {
            "narrative": "Clean layout.",
            "findings": ["Small tap targets"],
            "suggestions": ["Larger buttons"],
            "desktop_image": "https://cdn.example.com/desktop.png"
        },
        "pain_points": [
            { "problem": "Low ranking", "solution": "Technical SEO audit", "service": "SEO" }
        ],
        "roadmap": [
            { "title": "Fix meta tags", "horizon": "immediate" },
            { "title": "Launch blog", "horizon": "medium_term" }
        ],
        "recommendations": [
            { "title": "Add cookie banner", "priority": "high", "impact": "Legal", "effort": "Low" }
        ],
        "insights": [
            { "title": "Design above average", "tone": "positive" }
        ]
    }))
}

pub(super) fn memory_service() -> (ExportService, Arc<MemorySurface>) {
    let surface = Arc::new(MemorySurface::new());
    let service = ExportService::new(surface.clone(), BrandConfig::new("Atlas Digital"));
    (service, surface)
}

pub(super) fn router() -> axum::Router {
    let (service, _) = memory_service();
    export_router(Arc::new(service))
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    serde_json::from_slice(&read_body(response).await).expect("json payload")
}

/// Byte offset of `data-section="<id>"`, if rendered.
pub(super) fn section_offset(html: &str, id: &str) -> Option<usize> {
    html.find(&format!("data-section=\"{id}\""))
}
