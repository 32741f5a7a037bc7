use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{self, Write as _};
use std::sync::Arc;
use tracing::debug;

use super::document::{export_filename, ExportDocument, ExportFormat};
use super::error::ExportError;
use super::markup::{escape_html, PageShell, RenderContext};
use super::schema::Record;
use super::value::{display_value, parse_calendar_date, yes_no, Rendering};

/// Custom display logic for one detail field. Receives `None` for missing keys.
pub type Formatter = Arc<dyn Fn(Option<&Value>) -> String + Send + Sync>;

#[derive(Clone)]
pub struct DetailField {
    pub key: String,
    pub label: String,
    pub formatter: Option<Formatter>,
}

impl DetailField {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            formatter: None,
        }
    }

    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(Option<&Value>) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn with_format(self, format: FieldFormat) -> Self {
        self.with_formatter(move |value| format.apply(value))
    }

    fn display(&self, record: &Record) -> String {
        let value = record.get(&self.key);
        match &self.formatter {
            Some(formatter) => formatter(value),
            None => display_value(value, Rendering::Document),
        }
    }
}

impl fmt::Debug for DetailField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetailField")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("formatter", &self.formatter.as_ref().map(|_| "custom"))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct DetailSection {
    pub title: String,
    pub fields: Vec<DetailField>,
}

impl DetailSection {
    pub fn new(title: impl Into<String>, fields: Vec<DetailField>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }
}

/// Named formatters that can travel over the wire where closures cannot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldFormat {
    Text,
    Currency {
        #[serde(default = "default_currency_symbol")]
        symbol: String,
    },
    /// Value is already a percentage: `87` renders `87%`, `1` renders `1%`.
    Percent,
    /// Value is a fraction of one: `0.42` renders `42%`.
    Ratio,
    Date,
    YesNo,
    List,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl FieldFormat {
    pub fn apply(&self, value: Option<&Value>) -> String {
        let placeholder = Rendering::Document.placeholder();
        match (self, value) {
            (_, None | Some(Value::Null)) => placeholder.to_string(),
            (Self::Text, Some(Value::String(text))) => text.clone(),
            (Self::Currency { symbol }, Some(value)) => match as_f64(value) {
                Some(amount) => format!("{symbol}{}", group_thousands(amount)),
                None => display_value(Some(value), Rendering::Document),
            },
            (Self::Percent, Some(value)) => match as_f64(value) {
                Some(percent) => format!("{percent:.0}%"),
                None => display_value(Some(value), Rendering::Document),
            },
            (Self::Ratio, Some(value)) => match as_f64(value) {
                Some(ratio) => format!("{:.0}%", ratio * 100.0),
                None => display_value(Some(value), Rendering::Document),
            },
            (Self::Date, Some(Value::String(raw))) => parse_calendar_date(raw)
                .map(|date| date.format("%B %d, %Y").to_string())
                .unwrap_or_else(|| raw.clone()),
            (Self::YesNo, Some(Value::Bool(flag))) => yes_no(*flag).to_string(),
            (Self::YesNo, Some(Value::String(raw))) => {
                match raw.trim().to_ascii_lowercase().as_str() {
                    "true" | "yes" | "1" => yes_no(true).to_string(),
                    "false" | "no" | "0" => yes_no(false).to_string(),
                    _ => raw.clone(),
                }
            }
            (Self::List, Some(Value::Array(items))) if items.is_empty() => placeholder.to_string(),
            (_, Some(value)) => display_value(Some(value), Rendering::Document),
        }
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|number| number.is_finite())
}

/// `1234567.5` → `1,234,567.50`
fn group_thousands(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Wire form of a detail section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailSectionSpec {
    pub title: String,
    pub fields: Vec<DetailFieldSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailFieldSpec {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FieldFormat>,
}

impl From<DetailSectionSpec> for DetailSection {
    fn from(spec: DetailSectionSpec) -> Self {
        let fields = spec
            .fields
            .into_iter()
            .map(|field| {
                let base = DetailField::new(field.key, field.label);
                match field.format {
                    Some(format) => base.with_format(format),
                    None => base,
                }
            })
            .collect();
        DetailSection::new(spec.title, fields)
    }
}

const DETAIL_STYLES: &str = r#"
.detail-section{border:1px solid #e5e7eb;border-radius:8px;padding:16px;margin-bottom:16px;page-break-inside:avoid}
.detail-section h2{border-left:4px solid #4f46e5;padding-left:8px}
.detail-grid{display:grid;grid-template-columns:repeat(2,minmax(0,1fr));gap:10px 24px}
.detail-label{color:#6b7280;font-size:10px;text-transform:uppercase;letter-spacing:.04em}
.detail-value{font-size:12px;white-space:pre-wrap;word-break:break-word}
"#;

/// Render one record as a sectioned print document. Every section renders,
/// in order; missing keys fall back to the dash placeholder.
pub fn render_detail(
    context: &RenderContext,
    record: &Record,
    sections: &[DetailSection],
    title: &str,
) -> Result<ExportDocument, ExportError> {
    let shell = PageShell {
        context,
        title,
        subtitle: None,
        extra_styles: DETAIL_STYLES,
    };
    let html = shell.render(|out| {
        for section in sections {
            write_section(out, record, section)?;
        }
        Ok(())
    })?;

    debug!(sections = sections.len(), "composed detail document");

    Ok(ExportDocument::new(
        html,
        export_filename(title, ExportFormat::Print.extension(), context.generated_at.date()),
        ExportFormat::Print.mime_type(),
    ))
}

fn write_section(out: &mut String, record: &Record, section: &DetailSection) -> fmt::Result {
    write!(
        out,
        "<section class=\"detail-section\"><h2>{}</h2><div class=\"detail-grid\">",
        escape_html(&section.title)
    )?;
    for field in &section.fields {
        write!(
            out,
            "<div class=\"detail-field\"><div class=\"detail-label\">{}</div><div class=\"detail-value\">{}</div></div>",
            escape_html(&field.label),
            escape_html(&field.display(record))
        )?;
    }
    out.push_str("</div></section>\n");
    Ok(())
}
