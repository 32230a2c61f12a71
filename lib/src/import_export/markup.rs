//! Flat markup events for Netscape bookmark files
//!
//! Bookmark exports never close `<DT>` or `<p>`, so building a tree would only get in
//! the way. The html5ever tokenizer runs without a tree builder and its tokens are
//! forwarded in document order; nesting is left to the import state machine.

use crate::error::{MarkportError, Result};
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use log::trace;

/// A single markup event. Tag and attribute names are lower-cased and character
/// references are already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    Start {
        name: String,
        attributes: Vec<(String, String)>,
    },
    End {
        name: String,
    },
    Text(String),
}

impl MarkupEvent {
    /// Look up an attribute on a start tag; `name` must be lower-case
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            MarkupEvent::Start { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }
}

/// Token sink that joins character tokens into one text run per gap between tags
struct EventSink<F> {
    handler: F,
    text: String,
    error: Option<MarkportError>,
}

impl<F> EventSink<F>
where
    F: FnMut(MarkupEvent) -> Result<()>,
{
    fn new(handler: F) -> Self {
        Self {
            handler,
            text: String::new(),
            error: None,
        }
    }

    /// Forward an event unless an earlier one already failed
    fn emit(&mut self, event: MarkupEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = (self.handler)(event) {
            self.error = Some(err);
        }
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.emit(MarkupEvent::Text(text));
        }
    }
}

impl<F> TokenSink for EventSink<F>
where
    F: FnMut(MarkupEvent) -> Result<()>,
{
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(text) => self.text.push_str(&text),
            Token::NullCharacterToken => {}
            Token::ParseError(msg) => trace!("tolerated markup error: {}", msg),
            Token::TagToken(tag) => {
                self.flush_text();
                let name = tag.name.to_string();
                match tag.kind {
                    TagKind::StartTag => {
                        let attributes = tag
                            .attrs
                            .iter()
                            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                            .collect();
                        self.emit(MarkupEvent::Start {
                            name: name.clone(),
                            attributes,
                        });
                        if tag.self_closing {
                            self.emit(MarkupEvent::End { name });
                        }
                    }
                    TagKind::EndTag => self.emit(MarkupEvent::End { name }),
                }
            }
            // comments, doctype and end of input all close the current text run
            _ => self.flush_text(),
        }
        TokenSinkResult::Continue
    }
}

/// Tokenize `markup`, passing each event to `handler`.
///
/// Stops forwarding at the first handler error and returns it.
pub fn for_each_event<F>(markup: &str, handler: F) -> Result<()>
where
    F: FnMut(MarkupEvent) -> Result<()>,
{
    let mut input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(markup));

    let mut tokenizer = Tokenizer::new(EventSink::new(handler), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    match tokenizer.sink.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
