//! Lookups over an in-memory catalog.

use regex::Regex;

use super::soundex;
use crate::error::{Error, Result};
use crate::models::{License, LicenseMatch, SpdxCatalog};

/// Exact, case-sensitive lookup.
pub fn exact(catalog: &SpdxCatalog, identifier: &str) -> Result<License> {
    catalog
        .get(identifier)
        .map(|spdx| License::new(identifier, spdx.name.clone()))
        .ok_or_else(|| Error::license_not_found(identifier))
}

/// The identifier that sounds most like `term`.
///
/// Only a strictly higher score replaces the current best, and the catalog
/// iterates in identifier order, so ties go to the smallest identifier.
/// Identifiers scoring zero never match.
pub fn closest(catalog: &SpdxCatalog, term: &str) -> Result<License> {
    let mut best: Option<(&str, u32)> = None;
    for (identifier, _) in catalog {
        let score = soundex::similarity(term, identifier);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((identifier.as_str(), score));
        }
    }

    let (identifier, score) = best.ok_or_else(|| Error::license_not_found(term))?;
    tracing::debug!(term, identifier, score, "closest license");
    exact(catalog, identifier)
}

/// Every entry whose identifier or name matches `(term+)`.
///
/// `term` is a regular expression fragment, matched case-sensitively.
pub fn matching(catalog: &SpdxCatalog, term: &str) -> Result<Vec<LicenseMatch>> {
    let pattern = Regex::new(&format!("({}+)", term))?;

    let spans = |text: &str| pattern.find_iter(text).map(|m| m.range()).collect::<Vec<_>>();

    let matches = catalog
        .iter()
        .filter_map(|(identifier, spdx)| {
            let identifier_spans = spans(identifier.as_str());
            let name_spans = spans(&spdx.name);
            if identifier_spans.is_empty() && name_spans.is_empty() {
                return None;
            }
            Some(LicenseMatch {
                identifier: identifier.clone(),
                name: spdx.name.clone(),
                identifier_spans,
                name_spans,
            })
        })
        .collect();

    Ok(matches)
}
