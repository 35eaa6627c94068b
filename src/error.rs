use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while walking catalogs, reading sources or deleting assets
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    #[error("Failed to delete asset at path: {}", path.display())]
    DeletionFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AssetError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AssetError::Io {
            path: path.into(),
            source,
        }
    }

    /// Convert a directory walk failure, falling back to the walk root when
    /// walkdir cannot name the entry that failed.
    pub fn from_walk(root: &Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        AssetError::Io {
            path,
            source: err.into(),
        }
    }

    /// The path the error is about
    pub fn path(&self) -> &Path {
        match self {
            AssetError::Io { path, .. } => path,
            AssetError::InvalidPath(path) => path,
            AssetError::DeletionFailed { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
