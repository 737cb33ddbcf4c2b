use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Clinical weight of a single warning sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    High,
    Critical,
}

impl Severity {
    /// Points a selected symptom adds to the running total.
    pub fn weight(self) -> u32 {
        match self {
            Severity::Low => 1,
            Severity::Moderate => 2,
            Severity::High => 3,
            Severity::Critical => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// Section of the questionnaire a symptom is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCategory {
    Physical,
    Behavioral,
    Psychological,
}

impl SymptomCategory {
    pub const ALL: [SymptomCategory; 3] = [
        SymptomCategory::Physical,
        SymptomCategory::Behavioral,
        SymptomCategory::Psychological,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SymptomCategory::Physical => "Physical Signs",
            SymptomCategory::Behavioral => "Behavioral Changes",
            SymptomCategory::Psychological => "Psychological Signs",
        }
    }
}

/// Catalog entry describing one observable warning sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: Severity,
    /// Independently forces the critical tier when selected.
    #[serde(default)]
    pub emergency_flag: bool,
}

/// Closed set of addiction classes the questionnaire can be filled out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportingDomain {
    Opioid,
    Stimulant,
    Depressant,
    Behavioral,
}

impl ReportingDomain {
    pub const ALL: [ReportingDomain; 4] = [
        ReportingDomain::Opioid,
        ReportingDomain::Stimulant,
        ReportingDomain::Depressant,
        ReportingDomain::Behavioral,
    ];

    /// Canonical wire tag.
    pub fn tag(self) -> &'static str {
        match self {
            ReportingDomain::Opioid => "opioid",
            ReportingDomain::Stimulant => "stimulant",
            ReportingDomain::Depressant => "depressant",
            ReportingDomain::Behavioral => "behavioral",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportingDomain::Opioid => "Fentanyl / Opioids",
            ReportingDomain::Stimulant => "Methamphetamine",
            ReportingDomain::Depressant => "Alcohol",
            ReportingDomain::Behavioral => "Gambling",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReportingDomain::Opioid => "Synthetic opioids, heroin, prescription painkillers",
            ReportingDomain::Stimulant => "Crystal meth, speed, amphetamines",
            ReportingDomain::Depressant => "Beer, wine, liquor, chronic drinking",
            ReportingDomain::Behavioral => "Casinos, online betting, compulsive gambling",
        }
    }

    /// Parses canonical tags, long class names, and the concrete substance names.
    pub fn from_tag(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "opioid" | "primary-opioid-class" | "fentanyl" => Some(Self::Opioid),
            "stimulant" | "stimulant-class" | "methamphetamine" => Some(Self::Stimulant),
            "depressant" | "depressant-class" | "alcohol" => Some(Self::Depressant),
            "behavioral" | "behavioral-addiction-class" | "gambling" => Some(Self::Behavioral),
            _ => None,
        }
    }
}

impl fmt::Display for ReportingDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Domain tag as submitted by a caller. Unmatched tags are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DomainTag {
    Known(ReportingDomain),
    Unrecognized(String),
}

impl DomainTag {
    pub fn resolve(&self) -> Option<ReportingDomain> {
        match self {
            DomainTag::Known(domain) => Some(*domain),
            DomainTag::Unrecognized(_) => None,
        }
    }
}

impl From<ReportingDomain> for DomainTag {
    fn from(value: ReportingDomain) -> Self {
        DomainTag::Known(value)
    }
}

impl From<String> for DomainTag {
    fn from(value: String) -> Self {
        match ReportingDomain::from_tag(&value) {
            Some(domain) => DomainTag::Known(domain),
            None => DomainTag::Unrecognized(value),
        }
    }
}

impl From<&str> for DomainTag {
    fn from(value: &str) -> Self {
        DomainTag::from(value.to_string())
    }
}

impl From<DomainTag> for String {
    fn from(value: DomainTag) -> Self {
        match value {
            DomainTag::Known(domain) => domain.tag().to_string(),
            DomainTag::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for DomainTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainTag::Known(domain) => f.write_str(domain.tag()),
            DomainTag::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// When the reporter first noticed the signs. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Days,
    Weeks,
    Months,
    Years,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl Timeline {
    pub fn label(self) -> &'static str {
        match self {
            Timeline::Days => "Within the last few days",
            Timeline::Weeks => "Within the last few weeks",
            Timeline::Months => "Within the last few months",
            Timeline::Years => "Over a year ago",
            Timeline::Unspecified => "Not specified",
        }
    }

    pub fn from_tag(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "days" => Timeline::Days,
            "weeks" => Timeline::Weeks,
            "months" => Timeline::Months,
            "years" => Timeline::Years,
            _ => Timeline::Unspecified,
        }
    }
}

/// Reporter's subjective worry on a 1 to 10 scale. Only constructible in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ConcernLevel(u8);

impl ConcernLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::ConcernLevelOutOfRange { value })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for ConcernLevel {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConcernLevel> for u8 {
    fn from(value: ConcernLevel) -> Self {
        value.0
    }
}

/// Completed questionnaire as submitted by the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    #[serde(alias = "substanceType")]
    pub domain: DomainTag,
    #[serde(default)]
    pub physical_symptoms: BTreeSet<String>,
    #[serde(default)]
    pub behavioral_symptoms: BTreeSet<String>,
    #[serde(default)]
    pub psychological_symptoms: BTreeSet<String>,
    #[serde(default)]
    pub timeline: Timeline,
    pub concern_level: ConcernLevel,
}

impl AssessmentInput {
    pub fn new(domain: impl Into<DomainTag>, concern_level: ConcernLevel) -> Self {
        Self {
            domain: domain.into(),
            physical_symptoms: BTreeSet::new(),
            behavioral_symptoms: BTreeSet::new(),
            psychological_symptoms: BTreeSet::new(),
            timeline: Timeline::Unspecified,
            concern_level,
        }
    }

    pub fn with_symptom(mut self, category: SymptomCategory, id: impl Into<String>) -> Self {
        self.selected_mut(category).insert(id.into());
        self
    }

    pub fn with_timeline(mut self, timeline: Timeline) -> Self {
        self.timeline = timeline;
        self
    }

    pub fn selected(&self, category: SymptomCategory) -> &BTreeSet<String> {
        match category {
            SymptomCategory::Physical => &self.physical_symptoms,
            SymptomCategory::Behavioral => &self.behavioral_symptoms,
            SymptomCategory::Psychological => &self.psychological_symptoms,
        }
    }

    pub fn selected_mut(&mut self, category: SymptomCategory) -> &mut BTreeSet<String> {
        match category {
            SymptomCategory::Physical => &mut self.physical_symptoms,
            SymptomCategory::Behavioral => &mut self.behavioral_symptoms,
            SymptomCategory::Psychological => &mut self.psychological_symptoms,
        }
    }

    /// Every selection in physical, behavioral, psychological order.
    pub fn selections(&self) -> impl Iterator<Item = (SymptomCategory, &str)> + '_ {
        SymptomCategory::ALL.into_iter().flat_map(move |category| {
            self.selected(category)
                .iter()
                .map(move |id| (category, id.as_str()))
        })
    }
}

/// Overall outcome classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of help a resource record points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Hotline,
    Treatment,
    SupportGroup,
    Emergency,
}

/// Concrete help resource attached to a result for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub kind: ResourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub description: String,
    #[serde(rename = "available24_7")]
    pub available_24_7: bool,
}

/// Engine output. Recommendations are already in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub total_score: u32,
    pub risk_level: RiskLevel,
    pub emergency_flag: bool,
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// Caller-facing rejection raised at the input boundary or by strict catalog checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("concern level {value} is outside the range 1-10")]
    ConcernLevelOutOfRange { value: i64 },
    #[error("unknown reporting domain '{tag}'")]
    UnknownDomain { tag: String },
    #[error("symptom '{id}' is not a {category:?} sign for {domain}")]
    UnknownSymptom {
        domain: ReportingDomain,
        category: SymptomCategory,
        id: String,
    },
}
