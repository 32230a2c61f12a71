use super::markup::{for_each_event, MarkupEvent};
use crate::error::{MarkportError, Result};
use crate::models::{BookmarkRecord, BookmarkSet};
use log::{debug, trace};
use std::collections::HashSet;
use std::path::Path;

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Options controlling how folder labels become tags
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    ignored_labels: HashSet<String>,
}

impl ImportOptions {
    pub fn new<I, S>(ignored_labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignored_labels: ignored_labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_ignored(&self, label: &str) -> bool {
        self.ignored_labels.contains(label)
    }
}

/// Position inside the two-level `<DL>` layout of a bookmark export
#[derive(Debug)]
enum ParseState {
    /// Before the outer `<DL>`
    Init,
    /// Inside the outer list, waiting for a folder `<DT>`
    ListStart,
    /// Inside a folder entry: expecting `<H3>` or the folder's `<DL>`
    InLabels,
    /// Inside `<H3>`; text sets the active label
    ReadingLabel,
    /// Inside a folder's item list
    InItems,
    /// Inside an item `<DT>`, holding the record being built
    ReadingItem(BookmarkRecord),
}

impl ParseState {
    fn name(&self) -> &'static str {
        match self {
            ParseState::Init => "init",
            ParseState::ListStart => "list-start",
            ParseState::InLabels => "in-labels",
            ParseState::ReadingLabel => "reading-label",
            ParseState::InItems => "in-items",
            ParseState::ReadingItem(_) => "reading-item",
        }
    }
}

/// Event-driven parser for Netscape bookmark exports.
///
/// Folder headings become tags on the links they contain, and links sharing a URL
/// are merged into one record.
pub struct BookmarkParser<'o> {
    options: &'o ImportOptions,
    state: ParseState,
    label: Option<String>,
    bookmarks: BookmarkSet,
}

impl<'o> BookmarkParser<'o> {
    pub fn new(options: &'o ImportOptions) -> Self {
        Self {
            options,
            state: ParseState::Init,
            label: None,
            bookmarks: BookmarkSet::new(),
        }
    }

    /// Advance the state machine by one event
    pub fn feed(&mut self, event: MarkupEvent) -> Result<()> {
        trace!("{:<13} | {:?}", self.state.name(), event);

        let state = std::mem::replace(&mut self.state, ParseState::Init);
        self.state = match event {
            MarkupEvent::Start { .. } => self.on_start(state, &event)?,
            MarkupEvent::End { name } => self.on_end(state, &name),
            MarkupEvent::Text(text) => self.on_text(state, text),
        };
        Ok(())
    }

    fn on_start(&mut self, state: ParseState, event: &MarkupEvent) -> Result<ParseState> {
        let name = match event {
            MarkupEvent::Start { name, .. } => name.as_str(),
            _ => return Ok(state),
        };
        let next = match (state, name) {
            (ParseState::Init, "dl") => ParseState::ListStart,
            (ParseState::ListStart, "dt") => ParseState::InLabels,
            (ParseState::InLabels, "h3") => {
                self.label = Some(String::new());
                ParseState::ReadingLabel
            }
            (ParseState::InLabels, "dl") => {
                if self.label.is_none() {
                    return Err(MarkportError::MissingLabel);
                }
                ParseState::InItems
            }
            (ParseState::InItems, "dt") => ParseState::ReadingItem(BookmarkRecord::new("", 0)),
            (ParseState::ReadingItem(mut record), "a") => {
                self.read_link(&mut record, event)?;
                ParseState::ReadingItem(record)
            }
            (state, _) => state,
        };
        Ok(next)
    }

    fn read_link(&self, record: &mut BookmarkRecord, event: &MarkupEvent) -> Result<()> {
        let url = event.attribute("href").unwrap_or_default();
        let add_date = event
            .attribute("add_date")
            .ok_or_else(|| MarkportError::MissingAddDate {
                url: url.to_string(),
            })?;
        let micros = add_date
            .trim()
            .parse::<i64>()
            .map_err(|source| MarkportError::InvalidAddDate {
                value: add_date.to_string(),
                source,
            })?;

        record.url = url.to_string();
        record.created_at = micros / MICROS_PER_SECOND;
        if let Some(label) = self.label.as_deref() {
            if !label.is_empty() && !self.options.is_ignored(label) {
                record.add_tag(label);
            }
        }
        Ok(())
    }

    fn on_end(&mut self, state: ParseState, name: &str) -> ParseState {
        match (state, name) {
            (ParseState::ReadingLabel, "h3") => ParseState::InLabels,
            (ParseState::InLabels, "dt") => ParseState::ListStart,
            (ParseState::InItems, "dl") => ParseState::InLabels,
            (ParseState::ReadingItem(record), "a") => {
                debug!("Parsed bookmark {} tags={:?}", record.url, record.tags);
                self.bookmarks.insert_or_merge(record);
                ParseState::InItems
            }
            (state, _) => state,
        }
    }

    fn on_text(&mut self, state: ParseState, text: String) -> ParseState {
        match state {
            ParseState::ReadingLabel => {
                self.label = Some(text.trim().to_string());
                ParseState::ReadingLabel
            }
            ParseState::ReadingItem(mut record) => {
                record.title = Some(text);
                ParseState::ReadingItem(record)
            }
            state => state,
        }
    }

    /// Consume the parser and return the merged bookmarks
    pub fn finish(self) -> BookmarkSet {
        self.bookmarks
    }
}

/// Parse a Netscape bookmark document into URL-deduplicated records
pub fn parse_bookmarks(markup: &str, options: &ImportOptions) -> Result<BookmarkSet> {
    let mut parser = BookmarkParser::new(options);
    for_each_event(markup, |event| parser.feed(event))?;
    Ok(parser.finish())
}

/// Read and parse a bookmark export file
pub fn parse_bookmarks_file(path: &Path, options: &ImportOptions) -> Result<BookmarkSet> {
    let markup = std::fs::read_to_string(path)?;
    parse_bookmarks(&markup, options)
}
