use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One entry of the SPDX license list, as published upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpdxLicense {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Informational only; lookups ignore it.
    #[serde(rename = "osiApproved", default)]
    pub osi_approved: bool,
}

impl SpdxLicense {
    pub fn new(name: impl Into<String>, osi_approved: bool) -> Self {
        Self {
            name: name.into(),
            url: None,
            osi_approved,
        }
    }
}

/// Identifier-keyed snapshot of the SPDX license list.
///
/// Keys are case-sensitive. Iteration is in lexicographic identifier order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpdxCatalog(BTreeMap<String, SpdxLicense>);

impl SpdxCatalog {
    pub fn get(&self, identifier: &str) -> Option<&SpdxLicense> {
        self.0.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.0.contains_key(identifier)
    }

    pub fn insert(&mut self, identifier: impl Into<String>, license: SpdxLicense) {
        self.0.insert(identifier.into(), license);
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, SpdxLicense> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, SpdxLicense)> for SpdxCatalog {
    fn from_iter<I: IntoIterator<Item = (String, SpdxLicense)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SpdxCatalog {
    type Item = (&'a String, &'a SpdxLicense);
    type IntoIter = btree_map::Iter<'a, String, SpdxLicense>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A registry entry hit by a pattern search.
///
/// Spans are byte ranges into `identifier` and `name`; rendering them is left
/// to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseMatch {
    pub identifier: String,
    pub name: String,
    pub identifier_spans: Vec<Range<usize>>,
    pub name_spans: Vec<Range<usize>>,
}
