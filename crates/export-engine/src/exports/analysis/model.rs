use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of a digital-presence analysis. Every group is optional and renders
/// only when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<CategoryScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_status: Option<TechnicalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<ComplianceFlags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMediaPresence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_review: Option<UiReview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_points: Option<Vec<PainPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<Vec<RoadmapItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<Vec<Insight>>,
}

/// Named category scores on a 0–100 scale, e.g. `seo`, `web_design`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryScores(pub BTreeMap<String, f64>);

impl CategoryScores {
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalStatus {
    #[serde(default, alias = "ssl", skip_serializing_if = "Option::is_none")]
    pub ssl_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_performance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_performance: Option<f64>,
    /// Page load time in seconds.
    #[serde(default, alias = "load_time", skip_serializing_if = "Option::is_none")]
    pub load_time_seconds: Option<f64>,
}

/// Named legal/compliance checks, e.g. `privacy_policy`, `cookie_consent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplianceFlags(pub BTreeMap<String, bool>);

impl ComplianceFlags {
    pub fn has_gaps(&self) -> bool {
        self.0.values().any(|passed| !passed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaPresence {
    /// Platform name to handle/URL; `None` or blank means no presence.
    #[serde(default)]
    pub platforms: BTreeMap<String, Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiReview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    #[serde(default)]
    pub findings: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainPoint {
    pub problem: String,
    pub solution: String,
    /// Service offered to address the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapHorizon {
    Immediate,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl RoadmapHorizon {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Immediate,
            Self::ShortTerm,
            Self::MediumTerm,
            Self::LongTerm,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::ShortTerm => "short_term",
            Self::MediumTerm => "medium_term",
            Self::LongTerm => "long_term",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::ShortTerm => "Short Term",
            Self::MediumTerm => "Medium Term",
            Self::LongTerm => "Long Term",
        }
    }

    pub const fn window(self) -> &'static str {
        match self {
            Self::Immediate => "0-1 month",
            Self::ShortTerm => "1-3 months",
            Self::MediumTerm => "3-6 months",
            Self::LongTerm => "6-12 months",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "category")]
    pub horizon: RoadmapHorizon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Priority",
            Self::Medium => "Medium Priority",
            Self::Low => "Low Priority",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::High => "#dc2626",
            Self::Medium => "#d97706",
            Self::Low => "#2563eb",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::High => "priority-high",
            Self::Medium => "priority-medium",
            Self::Low => "priority-low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightTone {
    Positive,
    Negative,
    Neutral,
}

impl InsightTone {
    pub const fn color(self) -> &'static str {
        match self {
            Self::Positive => "#16a34a",
            Self::Negative => "#dc2626",
            Self::Neutral => "#6b7280",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Positive => "▲",
            Self::Negative => "▼",
            Self::Neutral => "●",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "insight-positive",
            Self::Negative => "insight-negative",
            Self::Neutral => "insight-neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "type")]
    pub tone: InsightTone,
}
