use crate::error::{Result, ScrapeError};
use std::fs;
use std::path::Path;

/// Split a URL list into its non-blank lines, trimmed, in file order.
pub fn parse_urls(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_urls(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ScrapeError::InputNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    Ok(parse_urls(&text))
}
