use super::super::domain::{DomainTag, RiskLevel};

const CRITICAL_THRESHOLD: u32 = 20;
const HIGH_THRESHOLD: u32 = 15;
const MODERATE_THRESHOLD: u32 = 8;

/// Fixed guidance lists, one per risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSet {
    Emergency,
    Intervention,
    Conversation,
    Monitoring,
}

impl RecommendationSet {
    pub fn steps(self) -> &'static [&'static str] {
        match self {
            RecommendationSet::Emergency => &[
                "CALL 911 IMMEDIATELY if overdose symptoms are present",
                "Contact SAMHSA National Helpline: 1-800-662-HELP (4357)",
                "Do not leave the person alone",
                "Remove access to substances if safely possible",
                "Prepare for emergency medical intervention",
            ],
            RecommendationSet::Intervention => &[
                "Plan structured intervention within 48 hours",
                "Consult with addiction specialist",
                "Research treatment facilities",
                "Gather support system (family, friends)",
                "Prepare evidence of addiction impact",
            ],
            RecommendationSet::Conversation => &[
                "Have honest conversation about concerns",
                "Express observations without judgment",
                "Offer support and resources",
                "Set clear boundaries if needed",
                "Monitor situation closely",
            ],
            RecommendationSet::Monitoring => &[
                "Continue monitoring behavior patterns",
                "Maintain open communication",
                "Express care and concern",
                "Stay informed about warning signs",
                "Re-assess in 2-4 weeks if concerns persist",
            ],
        }
    }

    pub fn to_vec(self) -> Vec<String> {
        self.steps().iter().map(|step| step.to_string()).collect()
    }
}

/// First matching rule wins; an emergency sign outranks any numeric threshold.
pub(crate) fn classify_risk(total_score: u32, emergency: bool) -> RiskLevel {
    if emergency || total_score >= CRITICAL_THRESHOLD {
        RiskLevel::Critical
    } else if total_score >= HIGH_THRESHOLD {
        RiskLevel::High
    } else if total_score >= MODERATE_THRESHOLD {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Picks the guidance list for a tier.
///
/// The domain is accepted but does not influence the choice: every domain
/// shares the same four lists.
pub fn recommendations_for(
    risk_level: RiskLevel,
    emergency: bool,
    _domain: &DomainTag,
) -> RecommendationSet {
    if emergency || risk_level == RiskLevel::Critical {
        return RecommendationSet::Emergency;
    }

    match risk_level {
        RiskLevel::High => RecommendationSet::Intervention,
        RiskLevel::Moderate => RecommendationSet::Conversation,
        RiskLevel::Low | RiskLevel::Critical => RecommendationSet::Monitoring,
    }
}
