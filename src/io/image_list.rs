//! Line-oriented image list loading

use crate::io::error::{Result, file_access};
use std::path::Path;

// Whitespace plus the ASCII file, group, record and unit separators
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split list text into trimmed paths, one per line
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Blank lines are kept as
/// empty entries so positions match the source; they never pass a subset
/// filter.
pub fn parse_image_list(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .lines()
        .map(|line| line.trim_matches(is_strippable).to_owned())
        .collect()
}

/// Read and parse an image list file
///
/// # Errors
///
/// Returns `FileAccess` if the file is missing or unreadable
pub fn load_image_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(file_access(path, "read image list"))?;
    let images = parse_image_list(&text);
    log::debug!("Loaded {} image path(s) from {}", images.len(), path.display());
    Ok(images)
}
