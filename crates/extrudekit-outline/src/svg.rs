//! SVG document scanning.
//!
//! Lightweight string scanning that pulls `<path d="...">` attribute
//! values out of an SVG document so batches can consume whole files.
//! Full XML handling, `<g>` transforms and non-path elements (rects,
//! circles, text) are the ingestion side's job, not this crate's.

use anyhow::{bail, Result};

/// Extracts every `<path>` element's `d` attribute from SVG text.
///
/// Returns the raw attribute values in document order; paths without a
/// `d` attribute are skipped.
pub fn extract_path_data(svg_content: &str) -> Result<Vec<String>> {
    if !svg_content.contains("<svg") {
        bail!("Invalid SVG: missing <svg> element");
    }

    let mut paths = Vec::new();
    let mut search_pos = 0;
    while let Some(tag_start) = svg_content[search_pos..].find("<path") {
        let abs_tag_start = search_pos + tag_start;
        let Some(tag_end) = svg_content[abs_tag_start..].find('>') else {
            break;
        };
        let tag_content = &svg_content[abs_tag_start..abs_tag_start + tag_end];

        if let Some(d_start) = tag_content.find("d=\"") {
            let value_start = d_start + 3;
            if let Some(d_end) = tag_content[value_start..].find('"') {
                paths.push(tag_content[value_start..value_start + d_end].to_string());
            }
        }

        search_pos = abs_tag_start + tag_end + 1;
    }

    Ok(paths)
}
