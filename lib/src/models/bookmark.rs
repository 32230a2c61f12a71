use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One normalized bookmark, keyed by its URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    /// Link text; absent until the anchor's text node is seen
    pub title: Option<String>,
    #[serde(rename = "href")]
    pub url: String,
    /// Seconds since the Unix epoch
    #[serde(rename = "createDate")]
    pub created_at: i64,
    pub tags: Vec<String>,
}

impl BookmarkRecord {
    pub fn new(url: impl Into<String>, created_at: i64) -> Self {
        Self {
            title: None,
            url: url.into(),
            created_at,
            tags: Vec::new(),
        }
    }

    /// Append a tag unless it is already present
    pub fn add_tag(&mut self, tag: &str) {
        if !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
    }

    /// Union `tags` into this record, keeping first-seen order
    pub fn merge_tags<'a, I>(&mut self, tags: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for tag in tags {
            self.add_tag(tag);
        }
    }
}

/// URL-keyed bookmark collection preserving the order URLs were first seen
#[derive(Debug, Default, Clone)]
pub struct BookmarkSet {
    records: Vec<BookmarkRecord>,
    index: HashMap<String, usize>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, or merge its tags into the record already stored for its URL.
    ///
    /// Returns `true` when a new entry was created.
    pub fn insert_or_merge(&mut self, record: BookmarkRecord) -> bool {
        match self.index.get(&record.url).copied() {
            Some(pos) => {
                self.records[pos].merge_tags(&record.tags);
                false
            }
            None => {
                self.index.insert(record.url.clone(), self.records.len());
                self.records.push(record);
                true
            }
        }
    }

    pub fn get(&self, url: &str) -> Option<&BookmarkRecord> {
        self.index.get(url).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookmarkRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<BookmarkRecord> {
        self.records
    }
}

impl FromIterator<BookmarkRecord> for BookmarkSet {
    fn from_iter<T: IntoIterator<Item = BookmarkRecord>>(iter: T) -> Self {
        let mut set = BookmarkSet::new();
        for record in iter {
            set.insert_or_merge(record);
        }
        set
    }
}

impl IntoIterator for BookmarkSet {
    type Item = BookmarkRecord;
    type IntoIter = std::vec::IntoIter<BookmarkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
