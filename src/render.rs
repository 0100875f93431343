//! Plain-text rendering of assets and licenses for the terminal.

use std::ops::Range;

use nu_ansi_term::Color;

use crate::models::{Asset, LicenseMatch, SpdxCatalog};

const IDENTIFIER_WIDTH: usize = 20;
const NAME_WIDTH: usize = 30;
const FILE_WIDTH: usize = 30;
const LICENSE_ID_WIDTH: usize = 30;

/// One manifest row: identifier, license name, file, description.
pub fn asset_row(asset: &Asset) -> String {
    format!(
        "{:<iw$} {:<nw$} {:<fw$} {}",
        asset.license.identifier,
        asset.license.name,
        asset.file,
        asset.description,
        iw = IDENTIFIER_WIDTH,
        nw = NAME_WIDTH,
        fw = FILE_WIDTH,
    )
    .trim_end()
    .to_string()
}

/// The `status` listing. Assets for which `exists` is false are flagged.
pub fn status(assets: &[Asset], exists: impl Fn(&Asset) -> bool) -> String {
    let mut output = format!("{} elements\n", assets.len());
    for asset in assets {
        output.push_str(&asset_row(asset));
        if !exists(asset) {
            output.push(' ');
            output.push_str(&Color::Red.paint("(missing)").to_string());
        }
        output.push('\n');
    }
    output
}

/// The full registry, one `identifier name` line per license.
pub fn license_list(catalog: &SpdxCatalog) -> String {
    catalog
        .iter()
        .map(|(identifier, spdx)| license_row(identifier, identifier.chars().count(), &spdx.name))
        .collect()
}

/// Search hits with the matched spans highlighted.
pub fn match_list(matches: &[LicenseMatch]) -> String {
    matches
        .iter()
        .map(|m| {
            license_row(
                &highlight(&m.identifier, &m.identifier_spans),
                m.identifier.chars().count(),
                &highlight(&m.name, &m.name_spans),
            )
        })
        .collect()
}

/// `width` is the printable length of `identifier`, which may carry escape codes.
fn license_row(identifier: &str, width: usize, name: &str) -> String {
    let padding = " ".repeat(LICENSE_ID_WIDTH.saturating_sub(width));
    format!("{}{} {}\n", identifier, padding, name)
}

/// Paint the byte ranges `spans` of `text` green.
pub fn highlight(text: &str, spans: &[Range<usize>]) -> String {
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        output.push_str(&text[cursor..span.start]);
        output.push_str(&Color::Green.paint(&text[span.clone()]).to_string());
        cursor = span.end;
    }
    output.push_str(&text[cursor..]);
    output
}
