use crate::error::{LatteError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Settings key for the user-configured JDK root, as shown in hints and
/// action locators.
pub const JAVA_HOME_KEY: &str = "java.home";

/// Host configuration store, read-only from this crate's point of view.
///
/// Carries the single `java.home` key the discovery path consumes. A missing
/// settings file is not an error; the key is simply unset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuntimeSettings {
    #[serde(default)]
    pub java: JavaSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JavaSettings {
    #[serde(default)]
    pub home: Option<String>,
}

impl RuntimeSettings {
    pub fn load(settings_dir: &Path) -> Result<Self> {
        let settings_path = settings_dir.join(SETTINGS_FILE_NAME);

        if !settings_path.exists() {
            log::debug!("Settings file not found at {settings_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&settings_path).map_err(LatteError::ConfigFile)?;
        let settings: RuntimeSettings = toml::from_str(&contents).map_err(|e| {
            LatteError::InvalidConfig(format!("Failed to parse {SETTINGS_FILE_NAME}: {e}"))
        })?;

        log::debug!("Loaded settings from {settings_path:?}");
        Ok(settings)
    }

    /// The configured JDK root, if the `java.home` key is set.
    pub fn java_home(&self) -> Option<&str> {
        self.java.home.as_deref()
    }
}
