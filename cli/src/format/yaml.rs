use crate::format::traits::BookmarkFormat;
use markport::error::Result;
use markport::models::BookmarkRecord;

pub struct YamlBookmarks<'a>(pub &'a [BookmarkRecord]);

impl BookmarkFormat for YamlBookmarks<'_> {
    fn render(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self.0)?)
    }
}
