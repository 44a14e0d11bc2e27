//! JDK candidate discovery.
//!
//! Candidates come from a fixed, ordered list of sources: the `java.home`
//! setting, the `JDK_HOME` and `JAVA_HOME` environment variables, and a
//! platform auto-detection probe. Enumeration only gathers paths; the
//! validator decorates each entry with its verdict and hint.

pub mod detect;
pub mod validator;

pub use detect::detect_jdk_home;
pub use validator::{MIN_JDK_VERSION, validate_entries};

use crate::config::{JAVA_HOME_KEY, RuntimeSettings};
use serde::Serialize;
use std::env;

const JDK_HOME_VAR: &str = "JDK_HOME";
const JAVA_HOME_VAR: &str = "JAVA_HOME";

/// Source name reported for auto-detected installations.
const AUTO_DETECTED_NAME: &str = "Other";

/// Where a JDK candidate path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    UserSetting,
    EnvironmentVariable,
    AutoDetected,
}

/// One candidate source examined during discovery.
///
/// Entries are produced fresh on every discovery call, decorated in place by
/// the validator, and read once by the consumer. They serialize with
/// camelCase names because they cross the UI message boundary verbatim.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JdkEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub source: SourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl JdkEntry {
    fn new(
        name: impl Into<String>,
        path: Option<String>,
        source: SourceKind,
        action_hint: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path,
            source,
            action_hint,
            is_valid: None,
            hint: None,
        }
    }

    /// Whether the entry carries a non-empty path.
    pub fn has_path(&self) -> bool {
        self.path.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Gather candidate JDK roots in fixed priority order.
///
/// Unset sources still contribute an entry with no path, except the
/// auto-detection probe, which contributes nothing when it finds nothing.
pub fn enumerate_candidates(settings: &RuntimeSettings) -> Vec<JdkEntry> {
    let mut entries = vec![
        JdkEntry::new(
            JAVA_HOME_KEY,
            settings.java_home().map(str::to_string),
            SourceKind::UserSetting,
            Some(format!("settings:{JAVA_HOME_KEY}")),
        ),
        JdkEntry::new(
            JDK_HOME_VAR,
            env::var(JDK_HOME_VAR).ok(),
            SourceKind::EnvironmentVariable,
            None,
        ),
        JdkEntry::new(
            JAVA_HOME_VAR,
            env::var(JAVA_HOME_VAR).ok(),
            SourceKind::EnvironmentVariable,
            None,
        ),
    ];

    if let Some(detected) = detect::detect_jdk_home() {
        entries.push(JdkEntry::new(
            AUTO_DETECTED_NAME,
            Some(detected.to_string_lossy().into_owned()),
            SourceKind::AutoDetected,
            None,
        ));
    }

    entries
}

/// Discover and validate candidates, then report whether a usable JDK is
/// configured.
///
/// Downstream tooling resolves the first configured (non-empty) path, so
/// that entry alone decides the outcome. When every candidate is empty, the
/// result folds over all entries instead.
pub fn validate_java_runtime(settings: &RuntimeSettings) -> bool {
    let mut entries = enumerate_candidates(settings);
    validator::validate_entries(&mut entries);
    resolve_runtime_validity(&entries)
}

fn resolve_runtime_validity(entries: &[JdkEntry]) -> bool {
    if let Some(first) = entries.iter().find(|e| e.has_path()) {
        return first.is_valid == Some(true);
    }
    entries.iter().any(|e| e.is_valid == Some(true))
}
