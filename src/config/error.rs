//! Loader error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed YAML in {}", .path.display())]
    MalformedYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl LoadError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            LoadError::Open { .. } | LoadError::Read { .. } => 2,
            LoadError::Malformed { .. } | LoadError::MalformedYaml { .. } => 3,
        }
    }

    /// Path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Open { path, .. }
            | LoadError::Read { path, .. }
            | LoadError::Malformed { path, .. }
            | LoadError::MalformedYaml { path, .. } => path,
        }
    }
}
