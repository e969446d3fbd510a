use std::path::PathBuf;

use thiserror::Error;

/// Why a single list row was left out of the output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("row has no link")]
    NoLink,
    #[error("row has no text")]
    EmptyRow,
    #[error("unrecognised row text: {0:?}")]
    UnrecognizedLayout(String),
    #[error("bad acceptance percentage: {0:?}")]
    BadPercentage(String),
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{} directory not found", .0.display())]
    BaseDirMissing(PathBuf),
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }
}
