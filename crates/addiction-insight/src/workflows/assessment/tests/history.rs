use super::common::*;
use crate::workflows::assessment::domain::{AssessmentResult, DomainTag, RiskLevel};
use crate::workflows::assessment::history::{
    HistoryEntry, JsonFileStateStore, LocalState, StateError, StateStore,
};
use chrono::{TimeZone, Utc};
use std::fs;

fn entry(total_score: u32) -> HistoryEntry {
    HistoryEntry {
        recorded_at: Utc
            .with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
        domain: DomainTag::from("alcohol"),
        result: AssessmentResult {
            total_score,
            risk_level: RiskLevel::Low,
            emergency_flag: false,
            recommendations: vec!["Maintain open communication".to_string()],
            resources: Vec::new(),
        },
    }
}

#[test]
fn missing_file_reads_as_default_state() {
    let store = JsonFileStateStore::new(scratch_state_path("missing"));

    assert!(!store.disclaimer_accepted().expect("readable"));
    assert!(store.history().expect("readable").is_empty());
    assert!(!store.path().exists());
}

#[test]
fn file_store_persists_across_instances() {
    let path = scratch_state_path("persist");
    let store = JsonFileStateStore::new(&path);

    store.accept_disclaimer().expect("accept");
    store.append(entry(4)).expect("first append");
    store.append(entry(6)).expect("second append");

    let reopened = JsonFileStateStore::new(&path);
    assert!(reopened.disclaimer_accepted().expect("readable"));
    let history = reopened.history().expect("readable");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].result.total_score, 4);
    assert_eq!(history[1].result.total_score, 6);
    assert_eq!(history[0].domain, DomainTag::from("depressant"));

    let raw = fs::read_to_string(&path).expect("state file written");
    let state: LocalState = serde_json::from_str(&raw).expect("valid state document");
    assert!(state.disclaimer_accepted);
    assert!(raw.contains("assessmentHistory"));

    fs::remove_dir_all(path.parent().expect("scratch dir")).ok();
}

#[test]
fn corrupt_file_is_reported() {
    let path = scratch_state_path("corrupt");
    fs::create_dir_all(path.parent().expect("scratch dir")).expect("create scratch dir");
    fs::write(&path, "{ not json").expect("write corrupt file");
    let store = JsonFileStateStore::new(&path);

    match store.history() {
        Err(StateError::Corrupt { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected corrupt state error, got {other:?}"),
    }

    fs::remove_dir_all(path.parent().expect("scratch dir")).ok();
}

#[test]
fn partial_documents_fill_in_defaults() {
    let state: LocalState =
        serde_json::from_str(r#"{"disclaimerAccepted": true}"#).expect("parses");

    assert!(state.disclaimer_accepted);
    assert!(state.assessment_history.is_empty());
}

#[test]
fn separate_handles_on_one_path_keep_every_append() {
    let path = scratch_state_path("shared");
    let writers = 6;
    let appends_per_writer = 15;

    std::thread::scope(|scope| {
        for writer in 0..writers {
            let path = path.clone();
            scope.spawn(move || {
                let store = JsonFileStateStore::new(path);
                for n in 0..appends_per_writer {
                    store
                        .append(entry(writer * 100 + n))
                        .expect("append succeeds");
                }
            });
        }
    });

    let history = JsonFileStateStore::new(&path)
        .history()
        .expect("readable");
    assert_eq!(history.len(), (writers * appends_per_writer) as usize);
    for writer in 0..writers {
        let scores: Vec<u32> = history
            .iter()
            .map(|entry| entry.result.total_score)
            .filter(|score| score / 100 == writer)
            .collect();
        let expected: Vec<u32> = (0..appends_per_writer).map(|n| writer * 100 + n).collect();
        assert_eq!(scores, expected, "writer {writer} appends stay in order");
    }

    let leftovers: Vec<_> = fs::read_dir(path.parent().expect("scratch dir"))
        .expect("scratch dir listing")
        .filter_map(Result::ok)
        .filter(|item| item.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "no staging files left behind");

    fs::remove_dir_all(path.parent().expect("scratch dir")).ok();
}
