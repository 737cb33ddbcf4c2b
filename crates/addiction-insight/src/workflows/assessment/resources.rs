//! Static directory of emergency contacts, treatment resources, and intervention guidance.

use serde::Serialize;

use super::domain::{
    AssessmentResult, DomainTag, ReportingDomain, Resource, ResourceKind, RiskLevel,
};

/// Urgency of an emergency contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPriority {
    Critical,
    High,
    Moderate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub id: &'static str,
    pub name: &'static str,
    pub phone: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms: Option<&'static str>,
    pub description: &'static str,
    pub priority: ContactPriority,
    pub kind: ResourceKind,
}

impl EmergencyContact {
    fn to_resource(&self) -> Resource {
        Resource {
            id: self.id.to_string(),
            name: self.name.to_string(),
            kind: self.kind,
            phone: Some(self.phone.to_string()),
            sms: self.sms.map(str::to_string),
            website: None,
            description: self.description.to_string(),
            available_24_7: true,
        }
    }
}

/// One do or don't for approaching a loved one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterventionStrategy {
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterventionStrategies {
    pub dos: &'static [InterventionStrategy],
    pub donts: &'static [InterventionStrategy],
}

/// One numbered action in the overdose response sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// Opioid overdose response guide built around naloxone (Narcan).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NaloxoneGuide {
    pub steps: &'static [ResponseStep],
    pub critical_signs: &'static [&'static str],
    pub warning_signs: &'static [&'static str],
    pub where_to_get: &'static [&'static str],
}

const NALOXONE_STEPS: &[ResponseStep] = &[
    ResponseStep {
        step: 1,
        title: "Check for Responsiveness",
        description: "Tap shoulders firmly and shout their name loudly",
    },
    ResponseStep {
        step: 2,
        title: "Call 911 Immediately",
        description: "Even if naloxone works, professional medical attention is needed",
    },
    ResponseStep {
        step: 3,
        title: "Administer Naloxone",
        description: "Follow package instructions for nasal spray or injection",
    },
    ResponseStep {
        step: 4,
        title: "Perform Rescue Breathing",
        description: "If the person is not breathing normally, provide rescue breaths",
    },
    ResponseStep {
        step: 5,
        title: "Stay with the Person",
        description:
            "Naloxone effects wear off in 30-90 minutes. Be prepared to give another dose.",
    },
];

const OVERDOSE_CRITICAL_SIGNS: &[&str] = &[
    "Unconscious or unresponsive",
    "Slow, shallow, or no breathing",
    "Blue lips, fingernails, or skin",
    "Gurgling or choking sounds",
];

const OVERDOSE_WARNING_SIGNS: &[&str] = &[
    "Extremely small pupils",
    "Slow or weak pulse",
    "Disorientation or confusion",
    "Clammy or cold skin",
];

const NALOXONE_SOURCES: &[&str] = &[
    "Most pharmacies (no prescription needed in most states)",
    "Local health departments",
    "Community health centers",
    "Needle exchange programs",
    "Police and fire departments (many carry naloxone)",
    "Online: DanceSafe, NEXT Harm Reduction, GetNaloxoneNow.org",
];

const EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        id: "emergency_services",
        name: "Emergency Services",
        phone: "911",
        sms: None,
        description: "Immediate emergency medical response",
        priority: ContactPriority::Critical,
        kind: ResourceKind::Emergency,
    },
    EmergencyContact {
        id: "samhsa_helpline",
        name: "SAMHSA National Helpline",
        phone: "18006624357",
        sms: None,
        description: "Free, confidential, 24/7 treatment referral service",
        priority: ContactPriority::Critical,
        kind: ResourceKind::Hotline,
    },
    EmergencyContact {
        id: "crisis_lifeline",
        name: "Suicide Crisis Lifeline",
        phone: "988",
        sms: None,
        description: "24/7 suicide prevention and crisis intervention",
        priority: ContactPriority::Critical,
        kind: ResourceKind::Hotline,
    },
    EmergencyContact {
        id: "crisis_text_line",
        name: "Crisis Text Line",
        phone: "741741",
        sms: Some("HOME"),
        description: "24/7 crisis support via text message",
        priority: ContactPriority::High,
        kind: ResourceKind::Hotline,
    },
];

const SAMHSA_LOCATOR: &str = "samhsa_locator";
const AA_MEETINGS: &str = "aa_meetings";
const NA_MEETINGS: &str = "na_meetings";
const SMART_RECOVERY: &str = "smart_recovery";

const DOS: &[InterventionStrategy] = &[
    InterventionStrategy {
        title: "Express Unconditional Love",
        description: "Start with \"I love you and I'm worried about you\"",
        example: "No matter what, I love you and want to help you get better.",
    },
    InterventionStrategy {
        title: "Use Specific Examples",
        description: "Mention concrete behaviors you've observed",
        example: "Yesterday I found you unconscious in the backyard, and I was terrified.",
    },
    InterventionStrategy {
        title: "Offer Practical Support",
        description: "Volunteer to help with treatment logistics",
        example: "I'll drive you to appointments and help with insurance paperwork.",
    },
    InterventionStrategy {
        title: "Set Loving Boundaries",
        description: "Protect yourself while offering appropriate help",
        example: "I won't give you money, but I'll pay for treatment directly.",
    },
];

const DONTS: &[InterventionStrategy] = &[
    InterventionStrategy {
        title: "Don't Enable Addiction",
        description: "Avoid giving money, making excuses, or cleaning up their messes",
        example: "Don't: \"Here's $50, but promise me you won't buy drugs.\"",
    },
    InterventionStrategy {
        title: "Don't Make Empty Threats",
        description: "Only threaten consequences you're prepared to follow through on",
        example: "Don't: \"I'll kick you out\" if you're not ready to do it.",
    },
    InterventionStrategy {
        title: "Don't Try to Control Recovery",
        description: "Recovery must be their choice to be sustainable",
        example: "Don't: Force specific treatment programs or monitor constantly.",
    },
    InterventionStrategy {
        title: "Don't Take It Personally",
        description: "Addiction changes brain chemistry and decision-making",
        example: "Their lying or stealing is about the addiction, not about you.",
    },
];

/// Read-only access to the resource listings and the tier/domain mapping.
#[derive(Debug, Clone)]
pub struct ResourceDirectory {
    treatment: Vec<Resource>,
}

impl Default for ResourceDirectory {
    fn default() -> Self {
        Self::standard()
    }
}

impl ResourceDirectory {
    pub fn standard() -> Self {
        Self {
            treatment: standard_treatment_resources(),
        }
    }

    pub fn emergency_contacts(&self) -> &'static [EmergencyContact] {
        EMERGENCY_CONTACTS
    }

    pub fn treatment_resources(&self) -> &[Resource] {
        &self.treatment
    }

    pub fn intervention_strategies(&self) -> InterventionStrategies {
        InterventionStrategies {
            dos: DOS,
            donts: DONTS,
        }
    }

    /// Steps are in the order they should be carried out.
    pub fn naloxone_guide(&self) -> NaloxoneGuide {
        NaloxoneGuide {
            steps: NALOXONE_STEPS,
            critical_signs: OVERDOSE_CRITICAL_SIGNS,
            warning_signs: OVERDOSE_WARNING_SIGNS,
            where_to_get: NALOXONE_SOURCES,
        }
    }

    /// Resources to show for a tier and domain, most urgent first.
    pub fn resources_for(&self, risk_level: RiskLevel, domain: &DomainTag) -> Vec<Resource> {
        let mut selected: Vec<Resource> = Vec::new();

        if risk_level == RiskLevel::Critical {
            selected.extend(EMERGENCY_CONTACTS.iter().map(EmergencyContact::to_resource));
        }

        self.push_treatment(&mut selected, SAMHSA_LOCATOR);

        let support_group = match domain.resolve() {
            Some(ReportingDomain::Depressant) => AA_MEETINGS,
            Some(ReportingDomain::Opioid) | Some(ReportingDomain::Stimulant) => NA_MEETINGS,
            Some(ReportingDomain::Behavioral) | None => SMART_RECOVERY,
        };
        self.push_treatment(&mut selected, support_group);

        if risk_level >= RiskLevel::High {
            self.push_treatment(&mut selected, SMART_RECOVERY);
        }

        selected
    }

    /// Copy of `result` with its resource list filled for the given domain.
    pub fn populate(&self, result: &AssessmentResult, domain: &DomainTag) -> AssessmentResult {
        AssessmentResult {
            resources: self.resources_for(result.risk_level, domain),
            ..result.clone()
        }
    }

    fn push_treatment(&self, selected: &mut Vec<Resource>, id: &str) {
        if selected.iter().any(|resource| resource.id == id) {
            return;
        }
        if let Some(resource) = self.treatment.iter().find(|resource| resource.id == id) {
            selected.push(resource.clone());
        }
    }
}

fn website(
    id: &str,
    name: &str,
    kind: ResourceKind,
    url: &str,
    description: &str,
    available_24_7: bool,
) -> Resource {
    Resource {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        phone: None,
        sms: None,
        website: Some(url.to_string()),
        description: description.to_string(),
        available_24_7,
    }
}

fn standard_treatment_resources() -> Vec<Resource> {
    vec![
        website(
            SAMHSA_LOCATOR,
            "SAMHSA Treatment Locator",
            ResourceKind::Treatment,
            "https://findtreatment.samhsa.gov",
            "Find addiction treatment facilities near you",
            true,
        ),
        website(
            AA_MEETINGS,
            "Alcoholics Anonymous",
            ResourceKind::SupportGroup,
            "https://aa.org",
            "Find local AA meetings and support groups",
            false,
        ),
        website(
            NA_MEETINGS,
            "Narcotics Anonymous",
            ResourceKind::SupportGroup,
            "https://na.org",
            "Find local NA meetings and support groups",
            false,
        ),
        website(
            SMART_RECOVERY,
            "SMART Recovery",
            ResourceKind::SupportGroup,
            "https://smartrecovery.org",
            "Science-based addiction recovery support",
            false,
        ),
    ]
}
