use std::fmt::{self, Write as _};
use tracing::info;

use super::model::AnalysisResult;
use super::sections::{
    ComplianceSection, InsightsSection, PainPointsSection, RecommendationsSection, ReportSection,
    RoadmapSection, ScoreCardsSection, ScoreRingSection, SectionKind, SocialMediaSection,
    SummarySection, TechnicalStatusSection, UiReviewSection, REPORT_STYLES,
};
use crate::exports::document::{export_filename, ExportDocument, ExportFormat};
use crate::exports::error::ExportError;
use crate::exports::markup::{PageShell, RenderContext};

/// Ordered collection of report sections. Sections may be pushed in any
/// order; rendering always follows [`SectionKind`] order.
#[derive(Default)]
pub struct ReportComposer<'a> {
    sections: Vec<Box<dyn ReportSection + 'a>>,
}

impl<'a> ReportComposer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: impl ReportSection + 'a) -> &mut Self {
        self.sections.push(Box::new(section));
        self
    }

    /// One section per data group present in `result`. Empty groups count as
    /// absent.
    pub fn for_analysis(overall_score: Option<f64>, result: &'a AnalysisResult) -> Self {
        let mut composer = Self::new();

        let scores = result.scores.as_ref().filter(|scores| !scores.is_empty());
        if let Some(score) = overall_score {
            composer.push(ScoreRingSection { score });
        }
        if let Some(scores) = scores {
            composer.push(ScoreCardsSection { scores });
        }
        if let Some(text) = result
            .summary
            .as_deref()
            .filter(|text| !text.trim().is_empty())
        {
            composer.push(SummarySection { text });
        }
        if let Some(status) = &result.technical_status {
            composer.push(TechnicalStatusSection { status });
        }
        if let Some(flags) = result.compliance.as_ref().filter(|flags| !flags.0.is_empty()) {
            composer.push(ComplianceSection { flags });
        }
        if let Some(presence) = &result.social_media {
            composer.push(SocialMediaSection { presence });
        }
        if let Some(review) = &result.ui_review {
            composer.push(UiReviewSection { review });
        }
        if let Some(items) = non_empty(&result.pain_points) {
            composer.push(PainPointsSection { items });
        }
        if let Some(items) = non_empty(&result.roadmap) {
            composer.push(RoadmapSection { items });
        }
        if let Some(items) = non_empty(&result.recommendations) {
            composer.push(RecommendationsSection { items });
        }
        if let Some(items) = non_empty(&result.insights) {
            composer.push(InsightsSection { items });
        }

        composer
    }

    /// Kinds in render order.
    pub fn kinds(&self) -> Vec<SectionKind> {
        let mut kinds: Vec<SectionKind> =
            self.sections.iter().map(|section| section.kind()).collect();
        kinds.sort();
        kinds
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn render(&self, out: &mut String) -> fmt::Result {
        let mut ordered: Vec<_> = self.sections.iter().collect();
        ordered.sort_by_key(|section| section.kind());

        for section in ordered {
            let kind = section.kind();
            let page_break = if kind.starts_new_page() { " page-break" } else { "" };
            write!(
                out,
                "<section class=\"report-section{page_break}\" data-section=\"{}\">",
                kind.id()
            )?;
            if let Some(title) = kind.title() {
                write!(out, "<h2>{title}</h2>")?;
            }
            section.render(out)?;
            out.push_str("</section>\n");
        }
        Ok(())
    }
}

fn non_empty<T>(items: &Option<Vec<T>>) -> Option<&[T]> {
    items.as_deref().filter(|items| !items.is_empty())
}

/// Compose the branded analysis report for one subject (a business and its
/// website).
pub fn render_analysis_report(
    context: &RenderContext,
    subject_name: &str,
    subject_url: Option<&str>,
    overall_score: Option<f64>,
    result: &AnalysisResult,
) -> Result<ExportDocument, ExportError> {
    let composer = ReportComposer::for_analysis(overall_score, result);
    let title = format!("{} Digital Analysis Report", subject_name.trim());
    let shell = PageShell {
        context,
        title: &title,
        subtitle: subject_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string),
        extra_styles: REPORT_STYLES,
    };
    let html = shell.render(|out| composer.render(out))?;

    info!(
        subject = subject_name,
        sections = composer.kinds().len(),
        "composed analysis report"
    );

    Ok(ExportDocument::new(
        html,
        export_filename(
            &format!("{subject_name} analysis"),
            ExportFormat::Print.extension(),
            context.generated_at.date(),
        ),
        ExportFormat::Print.mime_type(),
    ))
}
