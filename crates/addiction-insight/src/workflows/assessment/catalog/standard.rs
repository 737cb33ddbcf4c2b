use super::{DomainCatalog, SymptomCatalog};
use crate::workflows::assessment::domain::{ReportingDomain, Severity, Symptom};

fn sign(id: &str, name: &str, description: &str, severity: Severity) -> Symptom {
    Symptom {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        severity,
        emergency_flag: false,
    }
}

fn emergency(id: &str, name: &str, description: &str, severity: Severity) -> Symptom {
    Symptom {
        emergency_flag: true,
        ..sign(id, name, description, severity)
    }
}

fn opioid() -> DomainCatalog {
    DomainCatalog {
        physical: vec![
            sign(
                "pinpoint_pupils",
                "Extremely Small \"Pinpoint\" Pupils",
                "Pupils that remain tiny even in dim light",
                Severity::High,
            ),
            emergency(
                "slow_breathing",
                "Shallow or Slow Breathing (< 12 breaths/min)",
                "Respiratory depression - immediate medical attention required",
                Severity::Critical,
            ),
            sign(
                "nodding_off",
                "Frequent \"Nodding Off\" or Falling Asleep Standing",
                "Microsleep episodes during activities or conversations",
                Severity::High,
            ),
            emergency(
                "blue_skin",
                "Blue or Gray Skin, Lips, or Fingernails",
                "Cyanosis indicating oxygen deprivation",
                Severity::Critical,
            ),
            sign(
                "track_marks",
                "Needle Marks or Track Marks",
                "Injection sites on arms, legs, feet, or other areas",
                Severity::High,
            ),
            sign(
                "weight_loss",
                "Dramatic Weight Loss",
                "Significant weight reduction over weeks/months",
                Severity::Moderate,
            ),
        ],
        behavioral: vec![
            sign(
                "social_withdrawal",
                "Extreme Social Withdrawal",
                "Avoiding family, friends, and normal activities",
                Severity::High,
            ),
            sign(
                "money_missing",
                "Money or Valuables Going Missing",
                "Theft from family/friends to fund addiction",
                Severity::High,
            ),
            sign(
                "new_associates",
                "New Social Circle with Known Drug Users",
                "Sudden change in friend groups",
                Severity::High,
            ),
            sign(
                "unusual_sleeping",
                "Sleeping in Unusual Places",
                "Found sleeping outdoors, in cars, or strange locations",
                Severity::Moderate,
            ),
            sign(
                "leg_twitching",
                "Leg Twitching or Muscle Spasms",
                "Involuntary leg movements, especially when resting",
                Severity::Moderate,
            ),
        ],
        psychological: Vec::new(),
    }
}

fn stimulant() -> DomainCatalog {
    DomainCatalog {
        physical: vec![
            sign(
                "dilated_pupils",
                "Extremely Dilated Pupils",
                "Pupils remain large even in bright light",
                Severity::High,
            ),
            emergency(
                "rapid_heartbeat",
                "Rapid or Irregular Heartbeat",
                "Heart rate over 100 BPM at rest",
                Severity::Critical,
            ),
            emergency(
                "hyperthermia",
                "Elevated Body Temperature/Excessive Sweating",
                "Overheating that could lead to heat stroke",
                Severity::Critical,
            ),
            sign(
                "meth_mouth",
                "Severe Dental Decay (\"Meth Mouth\")",
                "Rapid tooth decay, blackened or missing teeth",
                Severity::High,
            ),
            sign(
                "skin_sores",
                "Open Sores or Scabs from Skin Picking",
                "Self-inflicted wounds from compulsive picking",
                Severity::High,
            ),
            sign(
                "extreme_weight_loss",
                "Rapid, Extreme Weight Loss",
                "Significant weight reduction in short period",
                Severity::High,
            ),
        ],
        behavioral: vec![
            sign(
                "hyperactivity",
                "Extreme Hyperactivity or Agitation",
                "Inability to sit still, pacing, restlessness",
                Severity::Moderate,
            ),
            sign(
                "paranoia",
                "Paranoia or Extreme Suspicion",
                "Unfounded beliefs about being watched or followed",
                Severity::High,
            ),
            sign(
                "repetitive_behaviors",
                "Repetitive Behaviors or Tasks",
                "Obsessive focus on meaningless activities",
                Severity::Moderate,
            ),
        ],
        psychological: Vec::new(),
    }
}

fn depressant() -> DomainCatalog {
    DomainCatalog {
        physical: vec![
            // Flagged even though severity is only high.
            emergency(
                "tremors",
                "Hand Tremors or Shaking",
                "Especially noticeable in the morning",
                Severity::High,
            ),
            emergency(
                "jaundice",
                "Yellowing of Skin or Eyes",
                "Sign of liver damage requiring immediate medical attention",
                Severity::Critical,
            ),
            sign(
                "alcohol_odor",
                "Persistent Alcohol Odor",
                "Smell of alcohol on breath, clothing, or person",
                Severity::Moderate,
            ),
            sign(
                "bloodshot_eyes",
                "Bloodshot or Watery Eyes",
                "Red, irritated eyes from alcohol consumption",
                Severity::Low,
            ),
            sign(
                "coordination_problems",
                "Poor Coordination and Balance",
                "Stumbling, difficulty with fine motor skills",
                Severity::Moderate,
            ),
        ],
        behavioral: vec![
            sign(
                "drinking_patterns",
                "Drinking at Inappropriate Times",
                "Morning drinking, drinking before work/school",
                Severity::High,
            ),
            sign(
                "hiding_alcohol",
                "Hiding Alcohol or Drinking Secretly",
                "Concealing alcohol consumption from others",
                Severity::Moderate,
            ),
            sign(
                "neglecting_responsibilities",
                "Neglecting Work, School, or Family Duties",
                "Alcohol use interfering with obligations",
                Severity::High,
            ),
        ],
        psychological: Vec::new(),
    }
}

fn behavioral() -> DomainCatalog {
    DomainCatalog {
        physical: Vec::new(),
        behavioral: vec![
            sign(
                "chasing_losses",
                "Chasing Losses with Bigger Bets",
                "Increasing bet amounts to recover previous losses",
                Severity::High,
            ),
            sign(
                "secret_debts",
                "Hidden Debts or Secret Credit Cards",
                "Concealing financial obligations from family",
                Severity::High,
            ),
            sign(
                "lying_about_gambling",
                "Lying About Time Spent Gambling",
                "Concealing actual hours or money spent gambling",
                Severity::Moderate,
            ),
            sign(
                "selling_possessions",
                "Selling Personal Possessions",
                "Disposing of valuables to fund gambling",
                Severity::High,
            ),
            sign(
                "mood_swings",
                "Mood Tied to Gambling Outcomes",
                "Extreme highs after wins, deep lows after losses",
                Severity::Moderate,
            ),
        ],
        psychological: vec![
            sign(
                "preoccupation",
                "Constantly Thinking About Gambling",
                "Obsessive thoughts about next gambling opportunity",
                Severity::Moderate,
            ),
            sign(
                "withdrawal_symptoms",
                "Restlessness When Not Gambling",
                "Anxiety, irritability when unable to gamble",
                Severity::Moderate,
            ),
        ],
    }
}

pub(super) fn build() -> SymptomCatalog {
    let domains = ReportingDomain::ALL.into_iter().map(|domain| {
        let catalog = match domain {
            ReportingDomain::Opioid => opioid(),
            ReportingDomain::Stimulant => stimulant(),
            ReportingDomain::Depressant => depressant(),
            ReportingDomain::Behavioral => behavioral(),
        };
        (domain, catalog)
    });

    SymptomCatalog {
        domains: domains.collect(),
    }
}
