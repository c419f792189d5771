//! Error type shared by the library.

use std::path::PathBuf;

/// Errors that abort a sync run.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("{0}")]
    Config(String),

    #[error("failed downloading {url}. status: {status}")]
    Status { url: String, status: u16 },

    #[error("failed downloading {url}: {message}")]
    Transport { url: String, message: String },

    #[error("no `src:` declaration found in the stylesheet")]
    MissingSrcDeclaration,

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = SyncError> = std::result::Result<T, E>;
