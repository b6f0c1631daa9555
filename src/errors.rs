use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejection of a generation request that cannot produce any output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("At least one character set must be selected")]
    EmptyCharacterPool,
}

/// Failure to load generation defaults from disk.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read defaults file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid defaults file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SettingsError {
    pub fn path(&self) -> &PathBuf {
        match self {
            SettingsError::Io { path, .. } | SettingsError::Parse { path, .. } => path,
        }
    }
}
