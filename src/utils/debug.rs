// src/utils/debug.rs
use crate::extractors::segment::{find_boundaries, scan_start};
use crate::utils::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};

/// Renders the converted text with a marker line before the scan start and
/// before every accepted control boundary.
pub fn annotate_boundaries(text: &str) -> String {
    let start = scan_start(text);
    let mut markers: Vec<(usize, String)> =
        vec![(start, format!(">>> [scan start @ {}]\n", start))];
    markers.extend(
        find_boundaries(text)
            .into_iter()
            .map(|b| (b.start, format!(">>> [control {} @ {}]\n", b.section, b.start))),
    );
    markers.sort_by_key(|m| m.0); // Sort by position

    let mut annotated = String::with_capacity(text.len() + markers.len() * 32);
    let mut last_pos = 0;
    for (pos, marker) in markers {
        // Add content before the marker
        annotated.push_str(&text[last_pos..pos]);
        annotated.push_str(&marker);
        last_pos = pos;
    }
    annotated.push_str(&text[last_pos..]);
    annotated
}

/// Saves the raw converted text and its boundary-annotated copy into `dir`.
pub fn save_debug_text(text: &str, dir: &Path) -> Result<(PathBuf, PathBuf), AppError> {
    fs::create_dir_all(dir)?;

    let raw_path = dir.join("converted.txt");
    fs::write(&raw_path, text)?;

    let annotated_path = dir.join("converted_annotated.txt");
    fs::write(&annotated_path, annotate_boundaries(text))?;

    tracing::info!("Saved debug text to {} and {}", raw_path.display(), annotated_path.display());
    Ok((raw_path, annotated_path))
}
