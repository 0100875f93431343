use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{} not found: oss has not been initialized. Please run `oss init`", path.display())]
    NotInitialized { path: PathBuf },

    #[error("Cannot parse {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot download {url}: {reason}. Please check your connection")]
    Download { url: String, reason: String },

    #[error("Cannot access {}. Please check your permissions", path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Cannot serialize manifest: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl Error {
    pub fn license_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "License",
            key: identifier.into(),
        }
    }

    pub fn asset_not_found(file: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "Asset",
            key: file.into(),
        }
    }

    /// True for lookup misses, which callers report rather than treat as failures
    /// of the environment.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
