use super::bookmark::BookmarkRecord;

/// Destination collections, in the order they were first used
#[derive(Debug, Default, Clone)]
pub struct Collections {
    entries: Vec<(String, Vec<BookmarkRecord>)>,
}

impl Collections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` to `name`, creating the collection on first use
    pub fn push(&mut self, name: &str, record: BookmarkRecord) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, records)) => records.push(record),
            None => self.entries.push((name.to_string(), vec![record])),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BookmarkRecord])> {
        self.entries
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collections_keep_first_use_order() {
        let mut collections = Collections::new();
        collections.push("main", BookmarkRecord::new("https://a.example", 1));
        collections.push("later", BookmarkRecord::new("https://b.example", 2));
        collections.push("main", BookmarkRecord::new("https://c.example", 3));

        let names: Vec<&str> = collections.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["main", "later"]);

        let (_, main) = collections.iter().next().unwrap();
        let urls: Vec<&str> = main.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.example", "https://c.example"]);
    }
}
