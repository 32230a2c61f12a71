use crate::format::traits::BookmarkFormat;
use markport::error::Result;
use markport::import_export::to_intermediate_json;
use markport::models::BookmarkRecord;

/// Same layout as the intermediate document
pub struct JsonBookmarks<'a>(pub &'a [BookmarkRecord]);

impl BookmarkFormat for JsonBookmarks<'_> {
    fn render(&self) -> Result<String> {
        Ok(format!("{}\n", to_intermediate_json(self.0)?))
    }
}
