use crate::infra::{parse_concern, parse_timeline, resolve_state_path};
use addiction_insight::error::AppError;
use addiction_insight::workflows::assessment::{
    AssessmentInput, AssessmentResult, AssessmentService, ConcernLevel, DomainCatalog, DomainTag,
    HistoryEntry, JsonFileStateStore, NaloxoneGuide, ReportingDomain, ResourceDirectory, ResultView,
    SymptomCatalog, SymptomCategory, Timeline, ValidationError,
};
use clap::{Args, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

const DISCLAIMER_POINTS: [&str; 4] = [
    "Not intended to provide medical advice, diagnosis, or treatment",
    "Results do not constitute a medical diagnosis",
    "Always consult qualified healthcare professionals",
    "We are not liable for any actions taken based on this information",
];

#[derive(Args, Debug, Default)]
pub(crate) struct StateArgs {
    /// Local state file (defaults to APP_STATE_PATH or .addiction-insight/state.json)
    #[arg(long, global = true)]
    pub(crate) state_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Reporting domain (opioid, stimulant, depressant, behavioral, or an alias)
    #[arg(long)]
    pub(crate) domain: String,
    /// Comma-separated physical symptom ids
    #[arg(long, value_delimiter = ',')]
    pub(crate) physical: Vec<String>,
    /// Comma-separated behavioral symptom ids
    #[arg(long, value_delimiter = ',')]
    pub(crate) behavioral: Vec<String>,
    /// Comma-separated psychological symptom ids
    #[arg(long, value_delimiter = ',')]
    pub(crate) psychological: Vec<String>,
    /// When the signs were first noticed (days, weeks, months, years)
    #[arg(long, value_parser = parse_timeline)]
    pub(crate) timeline: Option<Timeline>,
    /// How worried you are, from 1 to 10
    #[arg(long, value_parser = parse_concern)]
    pub(crate) concern: ConcernLevel,
    /// Emit the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Score without the disclaimer check and without saving to history
    #[arg(long)]
    pub(crate) no_record: bool,
    #[command(flatten)]
    pub(crate) state: StateArgs,
}

impl AssessArgs {
    fn to_input(&self) -> AssessmentInput {
        let mut input = AssessmentInput::new(self.domain.as_str(), self.concern)
            .with_timeline(self.timeline.unwrap_or_default());
        for (category, ids) in [
            (SymptomCategory::Physical, &self.physical),
            (SymptomCategory::Behavioral, &self.behavioral),
            (SymptomCategory::Psychological, &self.psychological),
        ] {
            input.selected_mut(category).extend(
                ids.iter()
                    .map(|id| id.trim())
                    .filter(|id| !id.is_empty())
                    .map(str::to_string),
            );
        }
        input
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Only list one reporting domain
    #[arg(long)]
    pub(crate) domain: Option<String>,
    /// Emit the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct HistoryArgs {
    /// Emit history as JSON
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) state: StateArgs,
}

#[derive(Subcommand, Debug)]
pub(crate) enum DisclaimerCommand {
    /// Record that the disclaimer has been read and accepted
    Accept,
    /// Show the disclaimer and whether it has been accepted
    Status,
}

fn open_service(state: StateArgs) -> Result<AssessmentService<JsonFileStateStore>, AppError> {
    let path = resolve_state_path(state.state_path)?;
    Ok(AssessmentService::new(Arc::new(JsonFileStateStore::new(path))))
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let input = args.to_input();
    let service = open_service(args.state)?;

    let result = if args.no_record {
        service.preview(&input)
    } else {
        service.assess(&input)?.result
    };

    if args.json {
        println!("{}", to_pretty_json(&result)?);
        return Ok(());
    }

    render_assessment(&input, &result, !args.no_record);
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = SymptomCatalog::standard();
    let domains = match args.domain {
        Some(raw) => match DomainTag::from(raw) {
            DomainTag::Known(domain) => vec![domain],
            DomainTag::Unrecognized(tag) => {
                return Err(ValidationError::UnknownDomain { tag }.into());
            }
        },
        None => ReportingDomain::ALL.to_vec(),
    };

    if args.json {
        let payload: Vec<_> = domains
            .iter()
            .map(|domain| {
                json!({
                    "domain": domain,
                    "label": domain.label(),
                    "symptoms": catalog.domain(*domain),
                })
            })
            .collect();
        println!("{}", to_pretty_json(&payload)?);
        return Ok(());
    }

    for domain in domains {
        render_domain_catalog(domain, catalog.domain(domain));
    }
    Ok(())
}

pub(crate) fn run_resources() -> Result<(), AppError> {
    let directory = ResourceDirectory::standard();

    println!("Emergency contacts");
    for contact in directory.emergency_contacts() {
        match contact.sms {
            Some(keyword) => println!(
                "- {}: text {} to {} | {}",
                contact.name, keyword, contact.phone, contact.description
            ),
            None => println!(
                "- {}: call {} | {}",
                contact.name, contact.phone, contact.description
            ),
        }
    }

    println!("\nTreatment and support");
    for resource in directory.treatment_resources() {
        println!(
            "- {} ({}) | {}",
            resource.name,
            resource.website.as_deref().unwrap_or("no website"),
            resource.description
        );
    }

    let strategies = directory.intervention_strategies();
    println!("\nWhen you talk to them, do:");
    for strategy in strategies.dos {
        println!("- {}: {}", strategy.title, strategy.description);
        println!("    e.g. {}", strategy.example);
    }
    println!("\nAvoid:");
    for strategy in strategies.donts {
        println!("- {}: {}", strategy.title, strategy.description);
        println!("    e.g. {}", strategy.example);
    }

    println!();
    for line in naloxone_lines(&directory.naloxone_guide()) {
        println!("{line}");
    }
    Ok(())
}

fn naloxone_lines(guide: &NaloxoneGuide) -> Vec<String> {
    let mut lines = vec!["Naloxone (Narcan): responding to an opioid overdose".to_string()];
    for step in guide.steps {
        lines.push(format!("  {}. {}: {}", step.step, step.title, step.description));
    }
    lines.push("Critical signs (call 911):".to_string());
    lines.extend(guide.critical_signs.iter().map(|sign| format!("  - {sign}")));
    lines.push("Warning signs:".to_string());
    lines.extend(guide.warning_signs.iter().map(|sign| format!("  - {sign}")));
    lines.push("Where to get naloxone:".to_string());
    lines.extend(guide.where_to_get.iter().map(|source| format!("  - {source}")));
    lines
}

pub(crate) fn run_history(args: HistoryArgs) -> Result<(), AppError> {
    let service = open_service(args.state)?;
    let entries = service.history()?;

    if args.json {
        println!("{}", to_pretty_json(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No assessments recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", history_line(entry));
    }
    Ok(())
}

pub(crate) fn run_disclaimer(command: DisclaimerCommand, state: StateArgs) -> Result<(), AppError> {
    let service = open_service(state)?;

    match command {
        DisclaimerCommand::Accept => {
            print_disclaimer();
            service.accept_disclaimer()?;
            println!("\nDisclaimer accepted. Assessments will now be recorded locally.");
        }
        DisclaimerCommand::Status => {
            print_disclaimer();
            let status = if service.disclaimer_accepted()? {
                "accepted"
            } else {
                "not yet accepted (run `disclaimer accept`)"
            };
            println!("\nStatus: {status}");
        }
    }
    Ok(())
}

fn print_disclaimer() {
    println!("This tool is for educational purposes only:");
    for point in DISCLAIMER_POINTS {
        println!("- {point}");
    }
    println!("If someone is in immediate danger, call 911.");
}

fn render_assessment(input: &AssessmentInput, result: &AssessmentResult, recorded: bool) {
    let view = ResultView::from_result(result);

    if let Some(banner) = view.emergency_banner {
        println!("{banner}\n");
    }
    println!("{} (score {})", view.headline, view.total_score);
    println!("{}", view.message);
    println!(
        "Domain: {} | first noticed: {}",
        input.domain,
        input.timeline.label()
    );

    println!("\nRecommended next steps:");
    for (index, step) in view.recommendations.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }

    if !view.resources.is_empty() {
        println!("\nWhere to get help:");
        for resource in &view.resources {
            let contact = resource
                .phone
                .as_deref()
                .or(resource.website.as_deref())
                .unwrap_or("");
            println!("  - {} {}", resource.name, contact);
        }
    }

    if recorded {
        println!("\nSaved to local history.");
    }
}

fn render_domain_catalog(domain: ReportingDomain, catalog: &DomainCatalog) {
    println!("{} [{}]: {}", domain.label(), domain.tag(), domain.description());
    for category in SymptomCategory::ALL {
        let symptoms = catalog.category(category);
        if symptoms.is_empty() {
            continue;
        }
        println!("  {}", category.label());
        for symptom in symptoms {
            let marker = if symptom.emergency_flag { " !" } else { "" };
            println!(
                "    - {} ({}, {}){}: {}",
                symptom.id,
                symptom.name,
                symptom.severity.label(),
                marker,
                symptom.description
            );
        }
    }
    println!();
}

fn history_line(entry: &HistoryEntry) -> String {
    let emergency = if entry.result.emergency_flag {
        " [emergency signs]"
    } else {
        ""
    };
    format!(
        "{} | {} | {} risk | score {}{}",
        entry.recorded_at.format("%Y-%m-%d %H:%M UTC"),
        entry.domain,
        entry.result.risk_level,
        entry.result.total_score,
        emergency
    )
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value).map_err(std::io::Error::from)?)
}
