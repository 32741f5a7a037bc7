use serde::Serialize;

/// Quality band of a 0–100 score. The thresholds live here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Good,
    Medium,
    Poor,
}

pub const GOOD_THRESHOLD: f64 = 80.0;
pub const MEDIUM_THRESHOLD: f64 = 60.0;

impl ScoreTier {
    /// NaN falls through to `Poor`.
    pub fn from_score(score: f64) -> Self {
        if score >= GOOD_THRESHOLD {
            Self::Good
        } else if score >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Medium => "Needs Improvement",
            Self::Poor => "Poor",
        }
    }

    pub const fn palette(self) -> TierPalette {
        match self {
            Self::Good => TierPalette {
                color: "#16a34a",
                background: "#dcfce7",
                icon: "✓",
            },
            Self::Medium => TierPalette {
                color: "#d97706",
                background: "#fef3c7",
                icon: "!",
            },
            Self::Poor => TierPalette {
                color: "#dc2626",
                background: "#fee2e2",
                icon: "✗",
            },
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Good => "tier-good",
            Self::Medium => "tier-medium",
            Self::Poor => "tier-poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPalette {
    pub color: &'static str,
    pub background: &'static str,
    pub icon: &'static str,
}

/// Scores are shown on a 0–100 scale; anything outside is clamped for display.
pub(crate) fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_have_no_off_by_one() {
        let tiers: Vec<ScoreTier> = [59.0, 60.0, 79.0, 80.0, 100.0]
            .into_iter()
            .map(ScoreTier::from_score)
            .collect();
        assert_eq!(
            tiers,
            vec![
                ScoreTier::Poor,
                ScoreTier::Medium,
                ScoreTier::Medium,
                ScoreTier::Good,
                ScoreTier::Good,
            ]
        );
    }

    #[test]
    fn fractional_scores_just_below_threshold_stay_in_lower_tier() {
        assert_eq!(ScoreTier::from_score(79.99), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(59.5), ScoreTier::Poor);
    }

    #[test]
    fn nan_is_poor() {
        assert_eq!(ScoreTier::from_score(f64::NAN), ScoreTier::Poor);
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(140.0), 100.0);
    }

    #[test]
    fn each_tier_has_distinct_color() {
        let good = ScoreTier::Good.palette();
        let medium = ScoreTier::Medium.palette();
        let poor = ScoreTier::Poor.palette();
        assert_ne!(good.color, medium.color);
        assert_ne!(medium.color, poor.color);
        assert_ne!(good.color, poor.color);
    }
}
