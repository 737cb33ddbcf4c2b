use serde::Serialize;

use super::domain::{AssessmentResult, Resource, RiskLevel};

const EMERGENCY_BANNER: &str = "EMERGENCY SIGNS DETECTED: if the person is unconscious, not breathing normally, or in immediate danger, call 911 now.";

impl RiskLevel {
    /// Plain-language summary shown under the headline.
    pub fn message(self) -> &'static str {
        match self {
            RiskLevel::Critical => {
                "Immediate professional intervention required. This situation needs urgent attention."
            }
            RiskLevel::High => {
                "Strong indicators of addiction present. Professional help strongly recommended."
            }
            RiskLevel::Moderate => {
                "Some concerning signs present. Consider professional consultation."
            }
            RiskLevel::Low => "Few concerning signs at this time. Continue monitoring.",
        }
    }

    pub fn headline(self) -> String {
        format!("{} RISK", self.label().to_ascii_uppercase())
    }
}

/// Display-ready projection of a result. Never alters the scored values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub headline: String,
    pub risk_level: RiskLevel,
    pub message: &'static str,
    pub total_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_banner: Option<&'static str>,
    pub recommendations: Vec<String>,
    pub resources: Vec<Resource>,
}

impl ResultView {
    pub fn from_result(result: &AssessmentResult) -> Self {
        Self {
            headline: result.risk_level.headline(),
            risk_level: result.risk_level,
            message: result.risk_level.message(),
            total_score: result.total_score,
            emergency_banner: result.emergency_flag.then_some(EMERGENCY_BANNER),
            recommendations: result.recommendations.clone(),
            resources: result.resources.clone(),
        }
    }
}
