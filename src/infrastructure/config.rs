//! Session configuration loaded from a JSON file.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::application::{AdaptiveLayout, LayoutThresholds, Navigator};
use crate::domain::Tab;

/// Environment variable naming the config file when no argument is given.
pub const CONFIG_ENV: &str = "PANESTACK_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config - {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config - {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Allow cross-pane substitution when three panes fit.
    pub three_pane_enabled: bool,
    pub start_tab: Tab,
    pub tabs: Vec<Tab>,
    pub two_pane_min_width: u16,
    pub three_pane_min_width: u16,
    pub session_file: Option<PathBuf>,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let thresholds = LayoutThresholds::default();
        Self {
            three_pane_enabled: true,
            start_tab: Tab::Home,
            tabs: Tab::ALL.to_vec(),
            two_pane_min_width: thresholds.two_pane_min_width,
            three_pane_min_width: thresholds.three_pane_min_width,
            session_file: None,
            log_file: PathBuf::from("panestack.log"),
        }
    }
}

impl AppConfig {
    /// Picks the config path: explicit argument first, then `PANESTACK_CONFIG`.
    pub fn resolve_path(arg: Option<String>, env: Option<String>) -> Option<PathBuf> {
        arg.or(env).filter(|p| !p.is_empty()).map(PathBuf::from)
    }

    /// Loads and validates the config at `path`. No path, or a path that does
    /// not exist, yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!(path = %path.display(), "loaded config");
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tabs.is_empty() {
            return Err(ConfigError::Invalid("at least one tab is required".to_string()));
        }
        let unique: HashSet<_> = self.tabs.iter().collect();
        if unique.len() != self.tabs.len() {
            return Err(ConfigError::Invalid("tabs must not repeat".to_string()));
        }
        if !self.tabs.contains(&self.start_tab) {
            return Err(ConfigError::Invalid(format!(
                "start tab {} is not among the configured tabs",
                self.start_tab
            )));
        }
        if self.two_pane_min_width > self.three_pane_min_width {
            return Err(ConfigError::Invalid(
                "two_pane_min_width must not exceed three_pane_min_width".to_string(),
            ));
        }
        Ok(())
    }

    pub fn thresholds(&self) -> LayoutThresholds {
        LayoutThresholds {
            two_pane_min_width: self.two_pane_min_width,
            three_pane_min_width: self.three_pane_min_width,
        }
    }

    pub fn build_navigator(&self) -> Navigator {
        Navigator::new(
            self.start_tab,
            self.tabs.iter().copied(),
            AdaptiveLayout::new(self.three_pane_enabled),
        )
    }
}
