//! The intermediate JSON document: an array of `{title, href, createDate, tags}`.

use crate::error::Result;
use crate::models::BookmarkRecord;
use std::path::Path;

/// Serialize records as a 2-space indented JSON array, non-ASCII left unescaped
pub fn to_intermediate_json(records: &[BookmarkRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn from_intermediate_json(json: &str) -> Result<Vec<BookmarkRecord>> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_intermediate_file(path: &Path) -> Result<Vec<BookmarkRecord>> {
    let json = std::fs::read_to_string(path)?;
    from_intermediate_json(&json)
}
