use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use fd_lock::RwLock;
use serde::{Deserialize, Serialize};

use super::domain::{AssessmentResult, DomainTag};

/// A past result, stamped when it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub recorded_at: DateTime<Utc>,
    pub domain: DomainTag,
    pub result: AssessmentResult,
}

/// Device-local state: the one-time disclaimer flag and the append-only history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalState {
    #[serde(default)]
    pub disclaimer_accepted: bool,
    #[serde(default)]
    pub assessment_history: Vec<HistoryEntry>,
}

/// Storage abstraction so the service can run against memory or a local file.
pub trait StateStore: Send + Sync {
    fn disclaimer_accepted(&self) -> Result<bool, StateError>;
    fn accept_disclaimer(&self) -> Result<(), StateError>;
    fn append(&self, entry: HistoryEntry) -> Result<(), StateError>;
    fn history(&self) -> Result<Vec<HistoryEntry>, StateError>;
}

/// Error enumeration for state store failures.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("state file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("state file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("state store unavailable: {0}")]
    Unavailable(String),
}

/// Single JSON document on local disk. A missing file reads as the default state.
///
/// Writers on the same path serialize through an advisory lock on a sibling
/// `.lock` file, across handles and processes. The document is replaced by
/// rename, so readers take no lock.
#[derive(Debug)]
pub struct JsonFileStateStore {
    path: PathBuf,
}

impl JsonFileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("state.json"));
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn read(&self) -> Result<LocalState, StateError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(LocalState::default()),
            Err(err) => return Err(err.into()),
        };

        serde_json::from_str(&raw).map_err(|source| StateError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn ensure_parent(&self) -> Result<(), StateError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn write(&self, state: &LocalState) -> Result<(), StateError> {
        static STAGING_SEQ: AtomicU64 = AtomicU64::new(0);

        let payload = serde_json::to_vec_pretty(state).map_err(|source| StateError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        let staging = self.sibling(&format!(
            ".{}.{}.tmp",
            std::process::id(),
            STAGING_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        fs::write(&staging, payload)?;
        if let Err(err) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        Ok(())
    }

    /// Read-modify-write under the exclusive file lock.
    fn update<F>(&self, apply: F) -> Result<(), StateError>
    where
        F: FnOnce(&mut LocalState),
    {
        self.ensure_parent()?;
        let lock_file: File = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(self.sibling(".lock"))?;
        let mut lock = RwLock::new(lock_file);
        let _guard = lock.write()?;

        let mut state = self.read()?;
        apply(&mut state);
        self.write(&state)
    }
}

impl StateStore for JsonFileStateStore {
    fn disclaimer_accepted(&self) -> Result<bool, StateError> {
        Ok(self.read()?.disclaimer_accepted)
    }

    fn accept_disclaimer(&self) -> Result<(), StateError> {
        self.update(|state| state.disclaimer_accepted = true)
    }

    fn append(&self, entry: HistoryEntry) -> Result<(), StateError> {
        self.update(|state| state.assessment_history.push(entry))
    }

    fn history(&self) -> Result<Vec<HistoryEntry>, StateError> {
        Ok(self.read()?.assessment_history)
    }
}

/// Process-lifetime store for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    state: Mutex<LocalState>,
}

impl InMemoryStateStore {
    pub fn with_disclaimer_accepted() -> Self {
        Self {
            state: Mutex::new(LocalState {
                disclaimer_accepted: true,
                assessment_history: Vec::new(),
            }),
        }
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, LocalState>, StateError> {
        self.state
            .lock()
            .map_err(|_| StateError::Unavailable("state lock poisoned".to_string()))
    }
}

impl StateStore for InMemoryStateStore {
    fn disclaimer_accepted(&self) -> Result<bool, StateError> {
        Ok(self.guard()?.disclaimer_accepted)
    }

    fn accept_disclaimer(&self) -> Result<(), StateError> {
        self.guard()?.disclaimer_accepted = true;
        Ok(())
    }

    fn append(&self, entry: HistoryEntry) -> Result<(), StateError> {
        self.guard()?.assessment_history.push(entry);
        Ok(())
    }

    fn history(&self) -> Result<Vec<HistoryEntry>, StateError> {
        Ok(self.guard()?.assessment_history.clone())
    }
}
