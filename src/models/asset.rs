use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::License;

/// A tracked third-party file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub license: License,
    /// Free text, may be empty.
    #[serde(default)]
    pub description: String,
    /// Path of the vendored file, relative to the project root.
    pub file: String,
}

impl Asset {
    pub fn new(license: License, file: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            license,
            description: description.into(),
            file: file.into(),
        }
    }

    /// Whether the tracked file is currently present on disk.
    pub fn file_exists(&self) -> bool {
        Path::new(&self.file).exists()
    }
}

/// The persisted content of `.oss`.
///
/// Assets keep insertion order. Duplicate `file` keys are tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assets: Vec<Asset>,
}

/// Older manifests may carry `"assets": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Asset>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Asset>>::deserialize(deserializer)?.unwrap_or_default())
}
