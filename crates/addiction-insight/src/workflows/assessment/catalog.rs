//! Static symptom reference data keyed by reporting domain.
//!
//! The catalog is built once and shared read-only. Lookups for a domain that has
//! no entry fall back to an empty catalog so scoring never fails on bad tags.

mod standard;

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use super::domain::{
    AssessmentInput, DomainTag, ReportingDomain, Symptom, SymptomCategory, ValidationError,
};

static EMPTY_DOMAIN: DomainCatalog = DomainCatalog::empty();

/// Symptoms for a single reporting domain, partitioned by questionnaire section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainCatalog {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub physical: Vec<Symptom>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub behavioral: Vec<Symptom>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub psychological: Vec<Symptom>,
}

impl DomainCatalog {
    pub const fn empty() -> Self {
        Self {
            physical: Vec::new(),
            behavioral: Vec::new(),
            psychological: Vec::new(),
        }
    }

    pub fn category(&self, category: SymptomCategory) -> &[Symptom] {
        match category {
            SymptomCategory::Physical => &self.physical,
            SymptomCategory::Behavioral => &self.behavioral,
            SymptomCategory::Psychological => &self.psychological,
        }
    }

    /// All symptoms with their section, physical first.
    pub fn iter(&self) -> impl Iterator<Item = (SymptomCategory, &Symptom)> + '_ {
        SymptomCategory::ALL.into_iter().flat_map(move |category| {
            self.category(category)
                .iter()
                .map(move |symptom| (category, symptom))
        })
    }

    pub fn find(&self, id: &str) -> Option<&Symptom> {
        self.iter()
            .map(|(_, symptom)| symptom)
            .find(|symptom| symptom.id == id)
    }

    pub fn len(&self) -> usize {
        self.physical.len() + self.behavioral.len() + self.psychological.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only mapping from reporting domain to its symptom catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomCatalog {
    domains: BTreeMap<ReportingDomain, DomainCatalog>,
}

impl SymptomCatalog {
    /// Built-in catalog shipped with the tool.
    pub fn standard() -> Arc<SymptomCatalog> {
        static STANDARD: OnceLock<Arc<SymptomCatalog>> = OnceLock::new();
        STANDARD
            .get_or_init(|| Arc::new(standard::build()))
            .clone()
    }

    pub fn from_domains(
        domains: impl IntoIterator<Item = (ReportingDomain, DomainCatalog)>,
    ) -> Result<Self, CatalogError> {
        let domains: BTreeMap<_, _> = domains.into_iter().collect();
        for (domain, catalog) in &domains {
            let mut seen = HashSet::new();
            for (_, symptom) in catalog.iter() {
                if !seen.insert(symptom.id.as_str()) {
                    return Err(CatalogError::DuplicateSymptom {
                        domain: *domain,
                        id: symptom.id.clone(),
                    });
                }
            }
        }
        Ok(Self { domains })
    }

    /// Loads a catalog shaped as `{ domain: { physical?, behavioral?, psychological? } }`.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let parsed: BTreeMap<String, DomainCatalog> = serde_json::from_str(raw)?;
        let mut domains = Vec::with_capacity(parsed.len());
        for (tag, catalog) in parsed {
            let domain =
                ReportingDomain::from_tag(&tag).ok_or(CatalogError::UnknownDomain(tag))?;
            domains.push((domain, catalog));
        }
        Self::from_domains(domains)
    }

    pub fn domain(&self, domain: ReportingDomain) -> &DomainCatalog {
        self.domains.get(&domain).unwrap_or(&EMPTY_DOMAIN)
    }

    /// Catalog for a caller-supplied tag; unrecognized tags get the empty catalog.
    pub fn resolve(&self, tag: &DomainTag) -> &DomainCatalog {
        match tag.resolve() {
            Some(domain) => self.domain(domain),
            None => &EMPTY_DOMAIN,
        }
    }

    pub fn domains(&self) -> impl Iterator<Item = (ReportingDomain, &DomainCatalog)> + '_ {
        self.domains.iter().map(|(domain, catalog)| (*domain, catalog))
    }

    /// Strict check that every selection belongs to the stated section of the stated domain.
    pub fn validate_selection(&self, input: &AssessmentInput) -> Result<(), ValidationError> {
        let domain = input
            .domain
            .resolve()
            .ok_or_else(|| ValidationError::UnknownDomain {
                tag: input.domain.to_string(),
            })?;
        let catalog = self.domain(domain);

        for (category, id) in input.selections() {
            if !catalog
                .category(category)
                .iter()
                .any(|symptom| symptom.id == id)
            {
                return Err(ValidationError::UnknownSymptom {
                    domain,
                    category,
                    id: id.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Failure while building a catalog from external data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog references unknown reporting domain '{0}'")]
    UnknownDomain(String),
    #[error("symptom '{id}' appears more than once in the {domain} catalog")]
    DuplicateSymptom { domain: ReportingDomain, id: String },
}
