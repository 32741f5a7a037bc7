//! Shared HTML scaffolding for print documents: escaping, the branded page
//! shell and the base stylesheet.

use chrono::{Local, NaiveDateTime};
use std::fmt::{self, Write as _};

use crate::config::BrandConfig;

/// Everything a composer needs besides its data: branding and the moment the
/// document is generated (used for the header timestamp and filenames).
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub brand: BrandConfig,
    pub generated_at: NaiveDateTime,
}

impl RenderContext {
    pub fn now(brand: BrandConfig) -> Self {
        Self {
            brand,
            generated_at: Local::now().naive_local(),
        }
    }

    pub fn at(brand: BrandConfig, generated_at: NaiveDateTime) -> Self {
        Self {
            brand,
            generated_at,
        }
    }

    pub(crate) fn timestamp_label(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Prints once the document has loaded and closes the window once the print
/// dialog is dismissed.
pub(crate) const PRINT_SCRIPT: &str = "<script>window.addEventListener('load',function(){window.focus();window.print();});window.addEventListener('afterprint',function(){window.close();});</script>";

pub(crate) const BASE_STYLES: &str = r#"
*{box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,Helvetica,Arial,sans-serif;color:#1f2937;margin:0;padding:32px;font-size:12px;line-height:1.5}
.brand-header{display:flex;align-items:center;justify-content:space-between;border-bottom:2px solid #4f46e5;padding-bottom:12px;margin-bottom:24px}
.brand{display:flex;align-items:center;gap:10px}
.brand-mark{width:36px;height:36px;border-radius:8px;background:#4f46e5;color:#fff;display:flex;align-items:center;justify-content:center;font-weight:700;font-size:18px}
.brand-name{font-size:16px;font-weight:700}
.generated-at{color:#6b7280;font-size:11px}
h1{font-size:22px;margin:0 0 4px}
h2{font-size:16px;margin:0 0 12px;color:#111827}
.summary{color:#4b5563;margin:0 0 16px}
table{width:100%;border-collapse:collapse}
th{background:#4f46e5;color:#fff;text-align:left;padding:8px;font-weight:600}
td{padding:8px;border-bottom:1px solid #e5e7eb;vertical-align:top}
tbody tr:nth-child(even){background:#f9fafb}
.page-break{page-break-before:always;break-before:page}
@media print{body{padding:0}.no-print{display:none}}
"#;

/// A standalone print document: branded header, title block and body.
pub(crate) struct PageShell<'a> {
    pub(crate) context: &'a RenderContext,
    pub(crate) title: &'a str,
    pub(crate) subtitle: Option<String>,
    pub(crate) extra_styles: &'a str,
}

impl PageShell<'_> {
    pub(crate) fn render(
        &self,
        body: impl FnOnce(&mut String) -> fmt::Result,
    ) -> Result<String, fmt::Error> {
        let mut html = String::new();
        let title = escape_html(self.title);
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\"><head><meta charset=\"UTF-8\">")?;
        writeln!(html, "<title>{title}</title>")?;
        writeln!(html, "<style>{}{}</style>", BASE_STYLES, self.extra_styles)?;
        writeln!(html, "</head><body>")?;
        writeln!(
            html,
            "<header class=\"brand-header\"><div class=\"brand\"><span class=\"brand-mark\">{}</span><span class=\"brand-name\">{}</span></div><span class=\"generated-at\">Generated {}</span></header>",
            escape_html(&self.context.brand.mark),
            escape_html(&self.context.brand.name),
            self.context.timestamp_label()
        )?;
        writeln!(html, "<h1>{title}</h1>")?;
        if let Some(subtitle) = &self.subtitle {
            writeln!(html, "<p class=\"summary\">{}</p>", escape_html(subtitle))?;
        }
        body(&mut html)?;
        writeln!(html, "{PRINT_SCRIPT}")?;
        write!(html, "</body></html>")?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn escapes_markup_sensitive_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn shell_carries_brand_timestamp_and_print_script() {
        let generated_at = NaiveDate::from_ymd_opt(2025, 1, 31)
            .and_then(|date| date.and_hms_opt(17, 5, 0))
            .expect("valid timestamp");
        let context = RenderContext::at(BrandConfig::new("Atlas <Digital>"), generated_at);
        let shell = PageShell {
            context: &context,
            title: "Leads",
            subtitle: Some("Total records: 3".to_string()),
            extra_styles: "",
        };

        let html = shell
            .render(|out| {
                out.push_str("<p>body</p>");
                Ok(())
            })
            .expect("shell renders");

        assert!(html.contains("Atlas &lt;Digital&gt;"));
        assert!(html.contains("Generated 2025-01-31 17:05"));
        assert!(html.contains("Total records: 3"));
        assert!(html.contains("window.print()"));
        assert!(html.contains("window.close()"));
        assert!(html.ends_with("</body></html>"));
    }
}
