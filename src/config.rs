use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::index::{ScanOrigins, APPLICATIONS_DIR, KSERVICES_DIR};
use crate::launcher::DEFAULT_TIMEOUT;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub launch: LaunchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub applications_dir: String,
    pub kservices_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub timeout_secs: u64,
    pub notify: bool,
}

#[allow(clippy::derivable_impls)]
impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            launch: LaunchConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            applications_dir: APPLICATIONS_DIR.to_string(),
            kservices_dir: KSERVICES_DIR.to_string(),
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            notify: true,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                // Fallback: ~ is not expanded by PathBuf, so use dirs::home_dir
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("kcmrun")
            .join("config.toml")
    }

    /// Load config from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_path();

        let mut config = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!("failed to parse config {}: {}", path.display(), e);
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::warn!("failed to read config {}: {}", path.display(), e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.validate();
        config
    }

    /// Validate and clamp config values to acceptable ranges
    fn validate(&mut self) {
        // Clamp timeout to a reasonable range (1 - 300 seconds)
        self.launch.timeout_secs = self.launch.timeout_secs.clamp(1, 300);
    }

    /// Scan origins with `~` expanded
    pub fn origins(&self) -> ScanOrigins {
        ScanOrigins {
            applications_dir: PathBuf::from(
                shellexpand::tilde(&self.scan.applications_dir).into_owned(),
            ),
            kservices_dir: PathBuf::from(shellexpand::tilde(&self.scan.kservices_dir).into_owned()),
        }
    }

    /// Launch timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.launch.timeout_secs)
    }
}
