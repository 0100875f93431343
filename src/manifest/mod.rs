//! The `.oss` manifest store.
//!
//! Holds the project's [`Manifest`] in memory and rewrites the whole file
//! after every mutation. Licenses go through the [`LicenseRegistry`] before
//! they reach the manifest.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::{Asset, Manifest};
use crate::registry::LicenseRegistry;

/// What [`ManifestStore::init`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOutcome {
    /// A fresh, empty manifest was written. `false` means an existing one was loaded.
    pub created: bool,
    /// Size of the refreshed SPDX catalog.
    pub downloaded: u64,
}

pub struct ManifestStore<R> {
    path: PathBuf,
    registry: R,
    manifest: Manifest,
}

impl<R: LicenseRegistry> ManifestStore<R> {
    /// Create a store with an empty in-memory manifest. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>, registry: R) -> Self {
        Self {
            path: path.into(),
            registry,
            manifest: Manifest::default(),
        }
    }

    /// Create a store and load the existing manifest.
    pub fn open(path: impl Into<PathBuf>, registry: R) -> Result<Self> {
        let mut store = Self::new(path, registry);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Tracked assets, in insertion order.
    pub fn assets(&self) -> &[Asset] {
        &self.manifest.assets
    }

    /// Create the manifest if missing, otherwise load it. The SPDX catalog is
    /// refreshed in both cases.
    pub async fn init(&mut self) -> Result<InitOutcome> {
        let created = !self.path.exists();
        if created {
            self.manifest = Manifest::default();
            self.save()?;
            tracing::info!(path = %self.path.display(), "Manifest created");
        } else {
            self.load()?;
        }

        let downloaded = self.registry.refresh().await?;
        Ok(InitOutcome {
            created,
            downloaded,
        })
    }

    pub fn load(&mut self) -> Result<()> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                Error::NotInitialized {
                    path: self.path.clone(),
                }
            } else {
                Error::Permission {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        self.manifest = serde_json::from_str(&content).map_err(|source| Error::Load {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %self.path.display(),
            assets = self.manifest.assets.len(),
            "Manifest loaded"
        );
        Ok(())
    }

    /// Rewrite the manifest file with the in-memory content.
    pub fn save(&self) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.manifest).map_err(|e| {
            tracing::error!(error = %e, "Cannot serialize manifest");
            Error::Serialize(e)
        })?;
        content.push('\n');

        std::fs::write(&self.path, content).map_err(|source| {
            tracing::error!(path = %self.path.display(), error = %source, "Cannot save manifest");
            Error::Permission {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!(path = %self.path.display(), "Manifest saved");
        Ok(())
    }

    /// Append `asset` and save. Duplicate file keys are kept.
    pub fn add(&mut self, asset: Asset) -> Result<()> {
        if self.manifest.assets.iter().any(|a| a.file == asset.file) {
            tracing::warn!(file = %asset.file, "File is already tracked, adding a second entry");
        }
        self.manifest.assets.push(asset);
        self.save()
    }

    /// Validate `identifier` against the registry, then add the asset.
    ///
    /// An unknown identifier leaves the manifest untouched.
    pub fn add_licensed(
        &mut self,
        identifier: &str,
        file: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Asset> {
        let license = self.registry.get(identifier)?;
        let asset = Asset::new(license, file, description);
        self.add(asset.clone())?;
        Ok(asset)
    }

    /// First asset tracked under `file`.
    pub fn get(&self, file: &str) -> Result<&Asset> {
        self.manifest
            .assets
            .iter()
            .find(|a| a.file == file)
            .ok_or_else(|| Error::asset_not_found(file))
    }

    /// Remove the first asset tracked under `file` and save.
    ///
    /// Returns `None`, without touching the file, when nothing matches.
    pub fn remove(&mut self, file: &str) -> Result<Option<Asset>> {
        let Some(index) = self.manifest.assets.iter().position(|a| a.file == file) else {
            return Ok(None);
        };

        let removed = self.manifest.assets.remove(index);
        self.save()?;
        Ok(Some(removed))
    }
}
