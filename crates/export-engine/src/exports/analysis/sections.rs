//! One builder per report section. Each section only knows how it looks;
//! which sections exist and where they land is decided by the composer.

use std::f64::consts::PI;
use std::fmt::{self, Write as _};

use super::model::{
    CategoryScores, ComplianceFlags, Insight, PainPoint, Recommendation, RoadmapHorizon,
    RoadmapItem, SocialMediaPresence, TechnicalStatus, UiReview,
};
use super::tier::{clamp_score, ScoreTier, TierPalette};
use crate::exports::markup::escape_html;

/// Position of a section in the report. Declaration order is render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    ScoreRing,
    ScoreCards,
    Summary,
    TechnicalStatus,
    Compliance,
    SocialMedia,
    UiReview,
    PainPoints,
    Roadmap,
    Recommendations,
    Insights,
}

impl SectionKind {
    pub const fn id(self) -> &'static str {
        match self {
            Self::ScoreRing => "score-ring",
            Self::ScoreCards => "score-cards",
            Self::Summary => "summary",
            Self::TechnicalStatus => "technical-status",
            Self::Compliance => "compliance",
            Self::SocialMedia => "social-media",
            Self::UiReview => "ui-review",
            Self::PainPoints => "pain-points",
            Self::Roadmap => "roadmap",
            Self::Recommendations => "recommendations",
            Self::Insights => "insights",
        }
    }

    pub const fn title(self) -> Option<&'static str> {
        match self {
            Self::ScoreRing => None,
            Self::ScoreCards => Some("Category Scores"),
            Self::Summary => Some("Summary"),
            Self::TechnicalStatus => Some("Technical Status"),
            Self::Compliance => Some("Legal Compliance"),
            Self::SocialMedia => Some("Social Media Presence"),
            Self::UiReview => Some("UI / UX Review"),
            Self::PainPoints => Some("Problems & Solutions"),
            Self::Roadmap => Some("Roadmap"),
            Self::Recommendations => Some("Recommendations"),
            Self::Insights => Some("Insights"),
        }
    }

    pub const fn starts_new_page(self) -> bool {
        matches!(self, Self::Roadmap | Self::Recommendations)
    }
}

pub trait ReportSection {
    fn kind(&self) -> SectionKind;

    /// Write the section body. The composer supplies the wrapper and heading.
    fn render(&self, out: &mut String) -> fmt::Result;
}

pub const NO_ITEMS_PLACEHOLDER: &str = "No items";

pub(crate) const REPORT_STYLES: &str = r#"
.report-section{margin-bottom:28px}
.score-ring{display:flex;align-items:center;gap:24px;padding:16px;border-radius:12px}
.score-ring-caption{font-size:14px;font-weight:600}
.tier-icon{display:inline-flex;width:20px;height:20px;border-radius:50%;align-items:center;justify-content:center;font-size:12px;font-weight:700;margin-right:6px}
.card-grid{display:grid;grid-template-columns:repeat(3,minmax(0,1fr));gap:12px}
.card{border:1px solid #e5e7eb;border-radius:10px;padding:12px;page-break-inside:avoid}
.card-label{color:#6b7280;font-size:10px;text-transform:uppercase;letter-spacing:.04em}
.card-value{font-size:20px;font-weight:700}
.bar{height:6px;border-radius:3px;background:#e5e7eb;margin-top:8px;overflow:hidden}
.bar-fill{height:100%}
.narrative{white-space:pre-wrap}
.callout{border-radius:8px;padding:12px;margin-top:12px}
.callout-warning{background:#fef3c7;border-left:4px solid #d97706}
.callout-info{background:#eef2ff;border-left:4px solid #4f46e5}
.two-column{display:grid;grid-template-columns:3fr 2fr;gap:20px}
.image-frame{border:1px solid #d1d5db;border-radius:10px;padding:8px;margin-bottom:12px;text-align:center}
.image-frame img{max-width:100%;border-radius:6px}
.image-frame-label{font-size:10px;color:#6b7280;text-transform:uppercase;margin-bottom:6px}
.image-missing{color:#9ca3af;padding:24px 0}
.pain-pair{display:grid;grid-template-columns:1fr 1fr;gap:12px;margin-bottom:12px;page-break-inside:avoid}
.problem-card{border-left:4px solid #dc2626;background:#fef2f2}
.solution-card{border-left:4px solid #16a34a;background:#f0fdf4}
.card-tag{font-size:10px;font-weight:700;text-transform:uppercase}
.service-tag{display:inline-block;margin-top:8px;padding:2px 8px;border-radius:999px;background:#eef2ff;color:#4f46e5;font-size:10px}
.roadmap-grid{display:grid;grid-template-columns:repeat(4,minmax(0,1fr));gap:12px}
.roadmap-column{border:1px solid #e5e7eb;border-radius:10px;padding:10px}
.roadmap-column h3{font-size:13px;margin:0}
.roadmap-window{color:#6b7280;font-size:10px}
.roadmap-item{margin-top:8px;padding-top:8px;border-top:1px dashed #e5e7eb}
.empty-placeholder{color:#9ca3af;font-style:italic;margin-top:8px}
.recommendations{list-style:none;padding:0;margin:0}
.recommendation{display:flex;gap:12px;margin-bottom:14px;page-break-inside:avoid}
.rec-number{flex:none;width:26px;height:26px;border-radius:50%;background:#4f46e5;color:#fff;display:flex;align-items:center;justify-content:center;font-weight:700}
.priority-badge{display:inline-block;margin-left:8px;padding:1px 8px;border-radius:999px;color:#fff;font-size:10px}
.rec-meta{color:#4b5563;font-size:11px;margin-top:4px}
.insight{display:flex;gap:10px;padding:10px;border-radius:8px;margin-bottom:8px;background:#f9fafb}
.insight-icon{font-weight:700}
"#;

pub struct ScoreRingSection {
    pub score: f64,
}

const RING_RADIUS: f64 = 54.0;

impl ReportSection for ScoreRingSection {
    fn kind(&self) -> SectionKind {
        SectionKind::ScoreRing
    }

    fn render(&self, out: &mut String) -> fmt::Result {
        let score = clamp_score(self.score);
        let tier = ScoreTier::from_score(score);
        let palette = tier.palette();
        let circumference = 2.0 * PI * RING_RADIUS;
        let arc = circumference * score / 100.0;

        write!(
            out,
            "<div class=\"score-ring {}\" style=\"background:{}\">",
            tier.css_class(),
            palette.background
        )?;
        write!(
            out,
            "<svg width=\"140\" height=\"140\" viewBox=\"0 0 140 140\"><circle cx=\"70\" cy=\"70\" r=\"{RING_RADIUS}\" fill=\"none\" stroke=\"#e5e7eb\" stroke-width=\"12\"/><circle cx=\"70\" cy=\"70\" r=\"{RING_RADIUS}\" fill=\"none\" stroke=\"{}\" stroke-width=\"12\" stroke-linecap=\"round\" stroke-dasharray=\"{arc:.2} {circumference:.2}\" transform=\"rotate(-90 70 70)\"/><text x=\"70\" y=\"80\" text-anchor=\"middle\" font-size=\"32\" font-weight=\"700\" fill=\"{}\">{score:.0}</text></svg>",
            palette.color, palette.color
        )?;
        write!(out, "<div class=\"score-ring-caption\">")?;
        write_tier_icon(out, palette)?;
        write!(out, "Overall Score: {}</div></div>", tier.label())
    }
}

pub struct ScoreCardsSection<'a> {
    pub scores: &'a CategoryScores,
}

impl ReportSection for ScoreCardsSection<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::ScoreCards
    }

    fn render(&self, out: &mut String) -> fmt::Result {
        out.push_str("<div class=\"card-grid\">");
        for (name, raw) in self.scores.iter() {
            write_score_card(out, &humanize_key(name), raw)?;
        }
        out.push_str("</div>");
        Ok(())
    }
}

pub struct SummarySection<'a> {
    pub text: &'a str,
}

impl ReportSection for SummarySection<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::Summary
    }

    fn render(&self, out: &mut String) -> fmt::Result {
        write_paragraphs(out, self.text)
    }
}

pub struct TechnicalStatusSection<'a> {
    pub status: &'a TechnicalStatus,
}

impl ReportSection for TechnicalStatusSection<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::TechnicalStatus
    }

    fn render(&self, out: &mut String) -> fmt::Result {
        out.push_str("<div class=\"card-grid\">");

        match self.status.ssl_enabled {
            Some(enabled) => {
                let tier = if enabled {
                    ScoreTier::Good
                } else {
                    ScoreTier::Poor
                };
                write_flag_card(
                    out,
                    "SSL Certificate",
                    if enabled { "Active" } else { "Missing" },
                    tier.palette(),
                )?;
            }
            None => write_plain_card(out, "SSL Certificate", "-")?,
        }

        match self.status.mobile_performance {
            Some(score) => write_score_card(out, "Mobile Performance", score)?,
            None => write_plain_card(out, "Mobile Performance", "-")?,
        }
        match self.status.desktop_performance {
            Some(score) => write_score_card(out, "Desktop Performance", score)?,
            None => write_plain_card(out, "Desktop Performance", "-")?,
        }

        let load_time = self
            .status
            .load_time_seconds
            .filter(|seconds| seconds.is_finite())
            .map(|seconds| format!("{seconds:.1}s"))
            .unwrap_or_else(|| "-".to_string());
        write_plain_card(out, "Load Time", &load_time)?;

        out.push_str("</div>");
        Ok(())
    }
}

pub struct ComplianceSection<'a> {
    pub flags: &'a ComplianceFlags,
}

impl ReportSection for ComplianceSection<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::Compliance
    }

    fn render(&self, out: &mut String) -> fmt::Result {
        out.push_str("<div class=\"card-grid\">");
        for (name, passed) in &self.flags.0 {
            let tier = if *passed {
                ScoreTier::Good
            } else {
                ScoreTier::Poor
            };
            write_flag_card(
                out,
                &humanize_key(name),
                if *passed { "Compliant" } else { "Missing" },
                tier.palette(),
            )?;
        }
        out.push_str("</div>");

        if self.flags.has_gaps() {
            out.push_str("<div class=\"callout callout-warning\"><strong>⚠ Legal requirements missing.</strong> One or more compliance checks failed; missing items can lead to regulatory penalties and should be addressed first.</div>");
        }
        Ok(())
    }
}

pub struct SocialMediaSection<'a> {
    pub presence: &'a SocialMediaPresence,
}

impl ReportSection for SocialMediaSection<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::SocialMedia
    }

    fn render(&self, out: &mut String) -> fmt::Result {
        out.push_str("<div class=\"card-grid\">");
        for (platform, handle) in &self.presence.platforms {
            let handle = handle
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty());
            let (tier, status) = match handle {
                Some(_) => (ScoreTier::Good, "Active"),
                None => (ScoreTier::Poor, "Not found"),
            };
            let palette = tier.palette();
            write!(
                out,
                "<div class=\"card social-card\"><div class=\"card-label\">{}</div><div style=\"color:{}\">",
                escape_html(&humanize_key(platform)),
                palette.color
            )?;
            write_tier_icon(out, palette)?;
            write!(out, "{status}</div>")?;
            if let Some(handle) = handle {
                write!(out, "<div class=\"rec-meta\">{}</div>", escape_html(handle))?;
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");

        if let Some(narrative) = non_blank(self.presence.narrative.as_deref()) {
            out.push_str("<div class=\"callout callout-info\">");
            write_paragraphs(out, narrative)?;
            out.push_str("</div>");
        }
        Ok(())
    }
}

pub struct UiReviewSection<'a> {
    pub review: &'a UiReview,
}

impl ReportSection for UiReviewSection<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::UiReview
    }

    fn render(&self, out: &mut String) -> fmt::Result {
        out.push_str("<div class=\"two-column\"><div>");
        if let Some(narrative) = non_blank(self.review.narrative.as_deref()) {
            write_paragraphs(out, narrative)?;
        }
        write_bullet_list(out, "Findings", &self.review.findings)?;
        write_bullet_list(out, "Suggestions", &self.review.suggestions)?;
        out.push_str("</div><div>");
        write_image_frame(out, "Desktop", self.review.desktop_image.as_deref())?;
        write_image_frame(out, "Mobile", self.review.mobile_image.as_deref())?;
        out.push_str("</div></div>");
        Ok(())
    }
}

pub struct PainPointsSection<'a> {
    pub items: &'a [PainPoint],
}

impl ReportSection for PainPointsSection<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::PainPoints
    }

    fn render(&self, out: &mut String) -> fmt::Result {
        for item in self.items {
            write!(
                out,
                "<div class=\"pain-pair\"><div class=\"card problem-card\"><div class=\"card-tag\" style=\"color:#dc2626\">Problem</div><p>{}</p></div>",
                escape_html(&item.problem)
            )?;
            write!(
                out,
                "<div class=\"card solution-card\"><div class=\"card-tag\" style=\"color:#16a34a\">Solution</div><p>{}</p>",
                escape_html(&item.solution)
            )?;
            if let Some(service) = non_blank(item.service.as_deref()) {
                write!(
                    out,
                    "<span class=\"service-tag\">{}</span>",
                    escape_html(service)
                )?;
            }
            out.push_str("</div></div>");
        }
        Ok(())
    }
}

pub struct RoadmapSection<'a> {
    pub items: &'a [RoadmapItem],
}

impl ReportSection for RoadmapSection<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::Roadmap
    }

    fn render(&self, out: &mut String) -> fmt::Result {
        out.push_str("<div class=\"roadmap-grid\">");
        for horizon in RoadmapHorizon::ordered() {
            write_roadmap_column(out, horizon, self.items)?;
        }
        out.push_str("</div>");
        Ok(())
    }
}

fn write_roadmap_column(
    out: &mut String,
    horizon: RoadmapHorizon,
    items: &[RoadmapItem],
) -> fmt::Result {
    write!(
        out,
        "<div class=\"roadmap-column\" data-horizon=\"{}\"><h3>{}</h3><div class=\"roadmap-window\">{}</div>",
        horizon.id(),
        horizon.label(),
        horizon.window()
    )?;

    let mut matched = items.iter().filter(|item| item.horizon == horizon).peekable();
    if matched.peek().is_none() {
        write!(out, "<p class=\"empty-placeholder\">{NO_ITEMS_PLACEHOLDER}</p>")?;
    }
    for item in matched {
        write!(
            out,
            "<div class=\"roadmap-item\"><strong>{}</strong>",
            escape_html(&item.title)
        )?;
        if let Some(description) = non_blank(item.description.as_deref()) {
            write!(out, "<div class=\"rec-meta\">{}</div>", escape_html(description))?;
        }
        out.push_str("</div>");
    }

    out.push_str("</div>");
    Ok(())
}

pub struct RecommendationsSection<'a> {
    pub items: &'a [Recommendation],
}

impl ReportSection for RecommendationsSection<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::Recommendations
    }

    fn render(&self, out: &mut String) -> fmt::Result {
        out.push_str("<ol class=\"recommendations\">");
        for (index, item) in self.items.iter().enumerate() {
            write!(
                out,
                "<li class=\"recommendation {}\"><span class=\"rec-number\">{}</span><div><strong>{}</strong><span class=\"priority-badge\" style=\"background:{}\">{}</span>",
                item.priority.css_class(),
                index + 1,
                escape_html(&item.title),
                item.priority.color(),
                item.priority.label()
            )?;
            if let Some(description) = non_blank(item.description.as_deref()) {
                write!(out, "<p>{}</p>", escape_html(description))?;
            }

            let impact = non_blank(item.impact.as_deref());
            let effort = non_blank(item.effort.as_deref());
            if impact.is_some() || effort.is_some() {
                out.push_str("<div class=\"rec-meta\">");
                if let Some(impact) = impact {
                    write!(out, "<span>Impact: {}</span>", escape_html(impact))?;
                }
                if impact.is_some() && effort.is_some() {
                    out.push_str(" · ");
                }
                if let Some(effort) = effort {
                    write!(out, "<span>Effort: {}</span>", escape_html(effort))?;
                }
                out.push_str("</div>");
            }
            out.push_str("</div></li>");
        }
        out.push_str("</ol>");
        Ok(())
    }
}

pub struct InsightsSection<'a> {
    pub items: &'a [Insight],
}

impl ReportSection for InsightsSection<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::Insights
    }

    fn render(&self, out: &mut String) -> fmt::Result {
        for item in self.items {
            write!(
                out,
                "<div class=\"insight {}\" style=\"border-left:4px solid {}\"><span class=\"insight-icon\" style=\"color:{}\">{}</span><div><strong>{}</strong>",
                item.tone.css_class(),
                item.tone.color(),
                item.tone.color(),
                item.tone.icon(),
                escape_html(&item.title)
            )?;
            if let Some(description) = non_blank(item.description.as_deref()) {
                write!(out, "<div class=\"rec-meta\">{}</div>", escape_html(description))?;
            }
            out.push_str("</div></div>");
        }
        Ok(())
    }
}

fn write_tier_icon(out: &mut String, palette: TierPalette) -> fmt::Result {
    write!(
        out,
        "<span class=\"tier-icon\" style=\"color:{};background:{}\">{}</span>",
        palette.color, palette.background, palette.icon
    )
}

fn write_score_card(out: &mut String, label: &str, raw: f64) -> fmt::Result {
    let score = clamp_score(raw);
    let tier = ScoreTier::from_score(score);
    let palette = tier.palette();
    write!(
        out,
        "<div class=\"card score-card {}\"><div class=\"card-label\">{}</div><div class=\"card-value\" style=\"color:{}\">",
        tier.css_class(),
        escape_html(label),
        palette.color
    )?;
    write_tier_icon(out, palette)?;
    write!(
        out,
        "{score:.0}</div><div class=\"bar\"><div class=\"bar-fill\" style=\"width:{score:.0}%;background:{}\"></div></div></div>",
        palette.color
    )
}

fn write_flag_card(out: &mut String, label: &str, status: &str, palette: TierPalette) -> fmt::Result {
    write!(
        out,
        "<div class=\"card flag-card\"><div class=\"card-label\">{}</div><div style=\"color:{}\">",
        escape_html(label),
        palette.color
    )?;
    write_tier_icon(out, palette)?;
    write!(out, "{}</div></div>", escape_html(status))
}

fn write_plain_card(out: &mut String, label: &str, value: &str) -> fmt::Result {
    write!(
        out,
        "<div class=\"card\"><div class=\"card-label\">{}</div><div class=\"card-value\">{}</div></div>",
        escape_html(label),
        escape_html(value)
    )
}

fn write_paragraphs(out: &mut String, text: &str) -> fmt::Result {
    for paragraph in text
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
    {
        write!(out, "<p class=\"narrative\">{}</p>", escape_html(paragraph))?;
    }
    Ok(())
}

fn write_bullet_list(out: &mut String, heading: &str, items: &[String]) -> fmt::Result {
    let items: Vec<&str> = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        return Ok(());
    }
    write!(out, "<h3>{heading}</h3><ul>")?;
    for item in items {
        write!(out, "<li>{}</li>", escape_html(item))?;
    }
    out.push_str("</ul>");
    Ok(())
}

fn write_image_frame(out: &mut String, label: &str, source: Option<&str>) -> fmt::Result {
    write!(
        out,
        "<div class=\"image-frame\"><div class=\"image-frame-label\">{label}</div>"
    )?;
    match source.and_then(safe_image_source) {
        Some(src) => write!(
            out,
            "<img src=\"{}\" alt=\"{label} screenshot\">",
            escape_html(src)
        )?,
        None => out.push_str("<div class=\"image-missing\">No screenshot available</div>"),
    }
    out.push_str("</div>");
    Ok(())
}

/// Only web and inline image sources are embedded.
fn safe_image_source(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") || lower.starts_with("data:image/")
    {
        Some(trimmed)
    } else {
        None
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// `web_design` → `Web Design`; well-known acronyms stay upper case.
pub(crate) fn humanize_key(key: &str) -> String {
    const ACRONYMS: [&str; 8] = ["seo", "ui", "ux", "ssl", "gdpr", "kvkk", "cta", "url"];
    key.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            if ACRONYMS.contains(&lower.as_str()) {
                return lower.to_uppercase();
            }
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exports::analysis::model::Priority;

    fn rendered(section: &dyn ReportSection) -> String {
        let mut out = String::new();
        section.render(&mut out).expect("section renders");
        out
    }

    #[test]
    fn humanizes_keys() {
        assert_eq!(humanize_key("web_design"), "Web Design");
        assert_eq!(humanize_key("seo"), "SEO");
        assert_eq!(humanize_key("kvkk-notice"), "KVKK Notice");
    }

    #[test]
    fn score_ring_clamps_and_colors_by_tier() {
        let html = rendered(&ScoreRingSection { score: 120.0 });
        assert!(html.contains("tier-good"));
        assert!(html.contains(">100</text>"));

        let html = rendered(&ScoreRingSection { score: 42.0 });
        assert!(html.contains("tier-poor"));
        assert!(html.contains(ScoreTier::Poor.palette().color));
    }

    #[test]
    fn compliance_warns_only_when_a_flag_fails() {
        let mut flags = ComplianceFlags::default();
        flags.0.insert("privacy_policy".to_string(), true);
        let html = rendered(&ComplianceSection { flags: &flags });
        assert!(!html.contains("callout-warning"));

        flags.0.insert("cookie_consent".to_string(), false);
        let html = rendered(&ComplianceSection { flags: &flags });
        assert!(html.contains("callout-warning"));
        assert!(html.contains("Cookie Consent"));
    }

    #[test]
    fn pain_point_solution_follows_its_problem() {
        let items = vec![
            PainPoint {
                problem: "Slow checkout".to_string(),
                solution: "Single page checkout".to_string(),
                service: Some("E-commerce Development".to_string()),
            },
            PainPoint {
                problem: "No blog".to_string(),
                solution: "Content calendar".to_string(),
                service: None,
            },
        ];
        let html = rendered(&PainPointsSection { items: &items });

        let first_problem = html.find("Slow checkout").expect("first problem");
        let first_solution = html.find("Single page checkout").expect("first solution");
        let second_problem = html.find("No blog").expect("second problem");
        assert!(first_problem < first_solution && first_solution < second_problem);
        assert_eq!(html.matches("service-tag").count(), 1);
    }

    #[test]
    fn unsafe_image_sources_are_not_embedded() {
        let review = UiReview {
            desktop_image: Some("javascript:alert(1)".to_string()),
            mobile_image: Some("https://cdn.example.com/m.png".to_string()),
            ..UiReview::default()
        };
        let html = rendered(&UiReviewSection { review: &review });
        assert!(!html.contains("javascript:"));
        assert!(html.contains("https://cdn.example.com/m.png"));
        assert_eq!(html.matches("No screenshot available").count(), 1);
    }

    #[test]
    fn recommendations_are_numbered_with_priority_badges() {
        let items = vec![
            Recommendation {
                title: "Enable HTTPS".to_string(),
                description: None,
                priority: Priority::High,
                impact: Some("Trust".to_string()),
                effort: Some("Low".to_string()),
            },
            Recommendation {
                title: "Add alt text".to_string(),
                description: Some("Describe product images".to_string()),
                priority: Priority::Low,
                impact: None,
                effort: None,
            },
        ];
        let html = rendered(&RecommendationsSection { items: &items });
        assert!(html.contains("<span class=\"rec-number\">1</span>"));
        assert!(html.contains("<span class=\"rec-number\">2</span>"));
        assert!(html.contains("High Priority"));
        assert!(html.contains("Impact: Trust"));
        assert!(html.contains("Effort: Low"));
        assert_eq!(html.matches("rec-meta").count(), 1);
    }
}
