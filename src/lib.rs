//! Open-source asset tracking.
//!
//! Two pieces do the work:
//!
//! - [`registry`]: a local snapshot of the SPDX license list, with exact,
//!   phonetic and pattern lookups.
//! - [`manifest`]: the `.oss` manifest of vendored files and their licenses.
//!   Every license added to it is checked against the registry first.
//!
//! Both are backed by flat JSON files and reloaded on every invocation. There
//! is no locking: two processes writing the same manifest race, and the last
//! writer wins.

pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod registry;
pub mod render;

pub use config::Config;
pub use error::{Error, Result};
pub use manifest::{InitOutcome, ManifestStore};
pub use registry::{LicenseRegistry, SpdxRegistry};
