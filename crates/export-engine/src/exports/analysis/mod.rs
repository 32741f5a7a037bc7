//! Analysis report composer: a branded, multi-section print document built
//! from a digital-presence analysis.

mod composer;
pub mod model;
mod sections;
pub mod tier;

pub use composer::{render_analysis_report, ReportComposer};
pub use model::{
    AnalysisResult, CategoryScores, ComplianceFlags, Insight, InsightTone, PainPoint, Priority,
    Recommendation, RoadmapHorizon, RoadmapItem, SocialMediaPresence, TechnicalStatus, UiReview,
};
pub use sections::{
    ComplianceSection, InsightsSection, PainPointsSection, RecommendationsSection, ReportSection,
    RoadmapSection, ScoreCardsSection, ScoreRingSection, SectionKind, SocialMediaSection,
    SummarySection, TechnicalStatusSection, UiReviewSection, NO_ITEMS_PLACEHOLDER,
};
pub use tier::{ScoreTier, TierPalette};
