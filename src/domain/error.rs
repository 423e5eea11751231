use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures that abort a collection run.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("failed to read directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CollectError {
    pub fn path(&self) -> &Path {
        match self {
            CollectError::DirectoryRead { path, .. } | CollectError::FileRead { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, CollectError>;
