use super::common::*;
use serde_json::json;

use crate::exports::detail::{render_detail, DetailField, DetailSection, FieldFormat};

fn client_sections() -> Vec<DetailSection> {
    vec![
        DetailSection::new(
            "Contact",
            vec![
                DetailField::new("name", "Name"),
                DetailField::new("phone", "Phone"),
            ],
        ),
        DetailSection::new(
            "Project",
            vec![
                DetailField::new("budget", "Budget").with_format(FieldFormat::Currency {
                    symbol: "₺".to_string(),
                }),
                DetailField::new("services", "Services"),
                DetailField::new("retainer", "Retainer"),
                DetailField::new("stage", "Stage")
                    .with_formatter(|value| match value.and_then(|v| v.as_str()) {
                        Some(stage) => stage.to_uppercase(),
                        None => "UNKNOWN".to_string(),
                    }),
            ],
        ),
    ]
}

#[test]
fn sections_render_in_order_with_labels_and_values() {
    let client = record(json!({
        "name": "Ayşe Yılmaz",
        "budget": 45000,
        "services": ["SEO", "Web Design"],
        "retainer": true,
        "stage": "proposal",
    }));

    let document =
        render_detail(&context(), &client, &client_sections(), "Client Profile").expect("detail");
    let html = document.content;

    let contact = html.find("<h2>Contact</h2>").expect("contact section");
    let project = html.find("<h2>Project</h2>").expect("project section");
    assert!(contact < project);
    assert!(html.contains("Ayşe Yılmaz"));
    assert!(html.contains("₺45,000.00"));
    assert!(html.contains("SEO, Web Design"));
    assert!(html.contains(">Yes<"));
    assert!(html.contains("PROPOSAL"));
    assert_eq!(document.filename, "client-profile_2025-03-14.html");
}

#[test]
fn missing_fields_fall_back_to_dash() {
    let client = record(json!({ "name": "Ayşe Yılmaz" }));
    let html = render_detail(&context(), &client, &client_sections(), "Client")
        .expect("detail")
        .content;

    // phone, budget, services, retainer
    assert_eq!(html.matches("<div class=\"detail-value\">-</div>").count(), 4);
    assert!(html.contains("UNKNOWN"));
}

#[test]
fn empty_section_list_still_renders_the_shell() {
    let html = render_detail(&context(), &record(json!({})), &[], "Client")
        .expect("detail")
        .content;
    assert!(html.contains("<h1>Client</h1>"));
    assert!(!html.contains("detail-section\""));
}
