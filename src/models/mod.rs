//! Domain models for oss.
//!
//! # Core Concepts
//!
//! ## Manifest Entities
//!
//! - [`Asset`]: A vendored file, its description and its [`License`]. The
//!   `file` path is the lookup key within a manifest.
//! - [`License`]: An SPDX identifier plus the display name copied from the
//!   registry when the asset was added. Never re-validated afterwards.
//! - [`Manifest`]: The ordered list of assets persisted in `.oss`.
//!
//! ## Registry Entities
//!
//! - [`SpdxLicense`]: One entry of the upstream SPDX license list.
//! - [`SpdxCatalog`]: The identifier-keyed registry snapshot.
//! - [`LicenseMatch`]: A pattern search hit, with the matched spans.

mod asset;
mod license;
mod spdx;

pub use asset::*;
pub use license::*;
pub use spdx::*;
