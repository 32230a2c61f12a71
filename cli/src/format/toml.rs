use crate::format::traits::BookmarkFormat;
use markport::error::{MarkportError, Result};
use markport::models::BookmarkRecord;
use serde::Serialize;

pub struct TomlBookmarks<'a>(pub &'a [BookmarkRecord]);

/// TOML needs a table at the root, so records become `[[bookmarks]]`
#[derive(Serialize)]
struct TomlDocument<'a> {
    bookmarks: &'a [BookmarkRecord],
}

impl BookmarkFormat for TomlBookmarks<'_> {
    fn render(&self) -> Result<String> {
        toml::to_string_pretty(&TomlDocument { bookmarks: self.0 })
            .map_err(|e| MarkportError::Toml(e.to_string()))
    }
}
