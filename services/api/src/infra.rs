use addiction_insight::config::AppConfig;
use addiction_insight::error::AppError;
use addiction_insight::workflows::assessment::{ConcernLevel, Timeline};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_concern(raw: &str) -> Result<ConcernLevel, String> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|err| format!("failed to parse '{raw}' as a whole number ({err})"))?;
    ConcernLevel::new(value).map_err(|err| err.to_string())
}

pub(crate) fn parse_timeline(raw: &str) -> Result<Timeline, String> {
    match Timeline::from_tag(raw) {
        Timeline::Unspecified => Err(format!(
            "unknown timeline '{raw}' (expected days, weeks, months, or years)"
        )),
        timeline => Ok(timeline),
    }
}

/// Explicit path if given, otherwise `APP_STATE_PATH` or its default.
pub(crate) fn resolve_state_path(explicit: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(AppConfig::load()?.state.path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concern_parser_enforces_range() {
        assert_eq!(parse_concern(" 10 ").expect("valid").value(), 10);
        assert!(parse_concern("11").is_err());
        assert!(parse_concern("high").is_err());
    }

    #[test]
    fn timeline_parser_rejects_unknown_values() {
        assert_eq!(parse_timeline("Months"), Ok(Timeline::Months));
        assert!(parse_timeline("decades").is_err());
    }

    #[test]
    fn explicit_state_path_wins() {
        let path = PathBuf::from("/tmp/explicit-state.json");
        assert_eq!(
            resolve_state_path(Some(path.clone())).expect("resolves"),
            path
        );
    }
}
