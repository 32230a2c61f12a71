use super::intermediate;
use crate::error::Result;
use crate::models::{BookmarkRecord, Collections};
use crate::tags::join_tags;
use std::borrow::Cow;

const RAINDROP_HEADER: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">
<TITLE>Raindrop.io Bookmarks</TITLE>
<H1>Raindrop.io Bookmarks</H1>
<DL><p>
";

/// Escape text for use inside element content or a double-quoted attribute
fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.bytes().any(|b| matches!(b, b'&' | b'<' | b'>' | b'"')) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Trait for rendering bookmarks into an output document
pub trait BookmarkExporter {
    fn render(&self, records: &[BookmarkRecord]) -> Result<String>;
}

/// Builds a Raindrop.io-compatible Netscape bookmark file
///
/// Each collection becomes one `<H3>` folder stamped with the build time; links keep
/// their own creation date and carry their tags in a comma-joined `TAGS` attribute.
#[derive(Debug, Default)]
pub struct RaindropHtmlBuilder {
    collections: Collections,
}

impl RaindropHtmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, collection: &str, record: BookmarkRecord) {
        self.collections.push(collection, record);
    }

    /// Render using the current wall-clock time for folder timestamps
    pub fn build(&self) -> String {
        self.build_at(chrono::Utc::now().timestamp())
    }

    /// Render with `now` (seconds since epoch) as every folder's timestamp
    pub fn build_at(&self, now: i64) -> String {
        let mut lines = vec![RAINDROP_HEADER.to_string()];
        for (name, records) in self.collections.iter() {
            lines.push(format!(
                "<DT><H3 ADD_DATE=\"{}\" LAST_MODIFIED=\"{}\">{}</H3>",
                now,
                now,
                escape_html(name)
            ));
            lines.push("<DL><p>".to_string());
            for record in records {
                lines.push(format!(
                    "<DT><A HREF=\"{}\" ADD_DATE=\"{}\" LAST_MODIFIED=\"{}\" TAGS=\"{}\">{}</A>",
                    escape_html(&record.url),
                    record.created_at,
                    record.created_at,
                    escape_html(&join_tags(&record.tags)),
                    escape_html(record.title.as_deref().unwrap_or(""))
                ));
            }
            lines.push("</DL><p>".to_string());
        }
        lines.push("</DL><p>".to_string());
        lines.join("\n")
    }
}

/// Raindrop HTML exporter placing every record in one collection
pub struct RaindropExporter {
    pub collection: String,
}

impl BookmarkExporter for RaindropExporter {
    fn render(&self, records: &[BookmarkRecord]) -> Result<String> {
        let mut builder = RaindropHtmlBuilder::new();
        for record in records {
            builder.add_record(&self.collection, record.clone());
        }
        Ok(builder.build())
    }
}

/// Intermediate JSON exporter
pub struct IntermediateJsonExporter;

impl BookmarkExporter for IntermediateJsonExporter {
    fn render(&self, records: &[BookmarkRecord]) -> Result<String> {
        intermediate::to_intermediate_json(records)
    }
}
