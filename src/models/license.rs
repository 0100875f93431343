use serde::{Deserialize, Serialize};

/// A license attached to an asset.
///
/// Built by the registry from a known SPDX entry; once embedded in an
/// [`Asset`](super::Asset) it is not modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// Display name, e.g. `MIT License`.
    pub name: String,
    /// SPDX short identifier, e.g. `MIT`.
    pub identifier: String,
}

impl License {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
        }
    }
}
