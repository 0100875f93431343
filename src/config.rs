//! Runtime configuration.
//!
//! Configuration is via environment variables:
//! - `OSS_MANIFEST` - Manifest path (default: `./.oss`)
//! - `OSS_LICENSES` - SPDX cache path (default: `./.oss-licenses.json`)
//! - `OSS_SPDX_URL` - Catalog source (default: sindresorhus' `spdx-license-list`)
//! - `OSS_DOWNLOAD_TIMEOUT` - Download timeout in seconds (default: 30)

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MANIFEST_PATH: &str = "./.oss";
pub const DEFAULT_LICENSES_PATH: &str = "./.oss-licenses.json";
pub const DEFAULT_SPDX_URL: &str =
    "https://raw.githubusercontent.com/sindresorhus/spdx-license-list/master/spdx.json";
pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub manifest_path: PathBuf,
    pub licenses_path: PathBuf,
    pub spdx_url: String,
    pub download_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            licenses_path: PathBuf::from(DEFAULT_LICENSES_PATH),
            spdx_url: DEFAULT_SPDX_URL.to_string(),
            download_timeout: DEFAULT_DOWNLOAD_TIMEOUT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let download_timeout = lookup("OSS_DOWNLOAD_TIMEOUT")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.download_timeout);

        Self {
            manifest_path: lookup("OSS_MANIFEST")
                .map(PathBuf::from)
                .unwrap_or(defaults.manifest_path),
            licenses_path: lookup("OSS_LICENSES")
                .map(PathBuf::from)
                .unwrap_or(defaults.licenses_path),
            spdx_url: lookup("OSS_SPDX_URL").unwrap_or(defaults.spdx_url),
            download_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.manifest_path, PathBuf::from("./.oss"));
        assert_eq!(config.licenses_path, PathBuf::from("./.oss-licenses.json"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("OSS_MANIFEST", "/tmp/project/.oss"),
            ("OSS_LICENSES", "/tmp/licenses.json"),
            ("OSS_SPDX_URL", "http://localhost:8080/spdx.json"),
            ("OSS_DOWNLOAD_TIMEOUT", "5"),
        ]));
        assert_eq!(config.manifest_path, PathBuf::from("/tmp/project/.oss"));
        assert_eq!(config.licenses_path, PathBuf::from("/tmp/licenses.json"));
        assert_eq!(config.spdx_url, "http://localhost:8080/spdx.json");
        assert_eq!(config.download_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("OSS_DOWNLOAD_TIMEOUT", "soon")]));
        assert_eq!(config.download_timeout, DEFAULT_DOWNLOAD_TIMEOUT);
    }
}
