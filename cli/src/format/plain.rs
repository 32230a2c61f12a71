use crate::format::traits::BookmarkFormat;
use markport::error::Result;
use markport::models::BookmarkRecord;

pub struct PlainBookmark<'a>(pub usize, pub &'a BookmarkRecord);

impl BookmarkFormat for PlainBookmark<'_> {
    fn render(&self) -> Result<String> {
        let PlainBookmark(index, record) = self;
        let id = index.to_string();

        let mut s = String::new();
        s.push_str(&format!("{}. {}\n", id, record.title.as_deref().unwrap_or("")));
        let padding = id.len() + 3;
        // padding for alignment
        s.push_str(&format!("{:>padding$} {}\n", ">", record.url));
        s.push_str(&format!("{:>padding$} {}\n", "@", record.created_at));
        if !record.tags.is_empty() {
            s.push_str(&format!("{:>padding$} {}\n", "#", record.tags.join(", ")));
        }
        Ok(s)
    }
}
