//! Local mirror of the SPDX license list.
//!
//! The catalog is downloaded by [`LicenseRegistry::refresh`] and re-read from
//! disk on every lookup, so it is exactly as fresh as the last `oss update`.

mod search;
pub mod soundex;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{redirect, Client};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{License, LicenseMatch, SpdxCatalog};

const MAX_REDIRECTS: usize = 10;

/// License lookups backed by a catalog snapshot.
///
/// Implementors provide [`refresh`](Self::refresh) and [`all`](Self::all);
/// the lookups are derived from the catalog returned by `all`.
#[allow(async_fn_in_trait)]
pub trait LicenseRegistry {
    /// Replace the local snapshot with the upstream catalog. Returns the number
    /// of bytes written.
    async fn refresh(&self) -> Result<u64>;

    /// Load the full catalog. Fails with [`Error::NotInitialized`] when no
    /// snapshot has been downloaded yet.
    fn all(&self) -> Result<SpdxCatalog>;

    /// Exact, case-sensitive identifier lookup.
    fn get(&self, identifier: &str) -> Result<License> {
        search::exact(&self.all()?, identifier)
    }

    /// The license whose identifier sounds most like `term`.
    fn search_around(&self, term: &str) -> Result<License> {
        search::closest(&self.all()?, term)
    }

    /// Every license whose identifier or name matches `term`.
    fn search_matching(&self, term: &str) -> Result<Vec<LicenseMatch>> {
        search::matching(&self.all()?, term)
    }
}

/// Registry cached in a JSON file and refreshed over HTTP.
#[derive(Debug, Clone)]
pub struct SpdxRegistry {
    path: PathBuf,
    url: String,
    timeout: Duration,
}

impl SpdxRegistry {
    pub fn new(path: impl Into<PathBuf>, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.licenses_path.clone(),
            config.spdx_url.clone(),
            config.download_timeout,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn download_error(&self, reason: impl Into<String>) -> Error {
        Error::Download {
            url: self.url.clone(),
            reason: reason.into(),
        }
    }

    fn describe(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            self.download_error(format!("timed out after {}s", self.timeout.as_secs_f32()))
        } else {
            self.download_error(e.to_string())
        }
    }

    /// Write through a sibling temp file so readers never see a partial catalog.
    async fn store(&self, body: &[u8]) -> Result<()> {
        let permission = |source: std::io::Error| Error::Permission {
            path: self.path.clone(),
            source,
        };

        let tmp = temp_path(&self.path);
        tokio::fs::write(&tmp, body).await.map_err(permission)?;
        if let Err(source) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(permission(source));
        }
        Ok(())
    }
}

impl LicenseRegistry for SpdxRegistry {
    async fn refresh(&self) -> Result<u64> {
        tracing::info!(url = %self.url, "Downloading SPDX licenses list");

        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| self.describe(e))?;

        let response = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.describe(e))?;

        let status = response.status();
        tracing::debug!(%status, "SPDX catalog response");
        if !status.is_success() {
            return Err(self.download_error(format!("server responded {}", status)));
        }

        let body = response.bytes().await.map_err(|e| self.describe(e))?;
        serde_json::from_slice::<SpdxCatalog>(&body)
            .map_err(|e| self.download_error(format!("not a license list: {}", e)))?;

        self.store(&body).await?;
        tracing::info!(
            bytes = body.len(),
            path = %self.path.display(),
            "SPDX licenses list saved"
        );
        Ok(body.len() as u64)
    }

    fn all(&self) -> Result<SpdxCatalog> {
        let content = std::fs::read(&self.path).map_err(|e| {
            tracing::debug!(path = %self.path.display(), error = %e, "SPDX cache unreadable");
            Error::NotInitialized {
                path: self.path.clone(),
            }
        })?;

        serde_json::from_slice(&content).map_err(|source| Error::Load {
            path: self.path.clone(),
            source,
        })
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("licenses"));
    name.push(".tmp");
    path.with_file_name(name)
}
