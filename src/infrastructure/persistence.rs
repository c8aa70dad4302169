use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::application::{AdaptiveLayout, NavigationSnapshot, Navigator};
use crate::domain::RestoreError;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid file format - {0}")]
    Format(#[from] serde_json::Error),
    #[error("invalid session - {0}")]
    Restore(#[from] RestoreError),
}

/// Saves and restores navigation sessions as JSON files.
pub struct SessionRepository;

impl SessionRepository {
    pub fn save_session(navigator: &Navigator, path: &Path) -> Result<PathBuf, PersistenceError> {
        let json = serde_json::to_string_pretty(&navigator.snapshot())?;
        fs::write(path, json).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "saved session");
        Ok(path.to_path_buf())
    }

    pub fn load_snapshot(path: &Path) -> Result<NavigationSnapshot, PersistenceError> {
        let content = fs::read_to_string(path).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Loads a snapshot and rebuilds a navigator from it under `layout`.
    pub fn load_session(path: &Path, layout: AdaptiveLayout) -> Result<(Navigator, PathBuf), PersistenceError> {
        let snapshot = Self::load_snapshot(path)?;
        let navigator = Navigator::restore(snapshot, layout)?;
        info!(path = %path.display(), "loaded session");
        Ok((navigator, path.to_path_buf()))
    }
}
