//! Lenient Atom feed decoding
//!
//! CT search feeds put HTML inside `summary`, and that HTML is not always
//! escaped. The decoder therefore does not check end tag names, treats any
//! markup nested in a field as part of the field, and keeps `<br>` elements
//! as line-break markers for the certificate extractor.

use crate::models::{AtomFeed, FeedEntry};
use crate::utils::FeedError;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Id,
    Summary,
    Title,
}

impl Field {
    fn from_tag(name: &[u8]) -> Option<Self> {
        match name {
            b"id" => Some(Field::Id),
            b"summary" => Some(Field::Summary),
            b"title" => Some(Field::Title),
            _ => None,
        }
    }

    fn tag(self) -> &'static [u8] {
        match self {
            Field::Id => b"id",
            Field::Summary => b"summary",
            Field::Title => b"title",
        }
    }
}

#[derive(Default)]
struct EntryBuilder {
    entry: FeedEntry,
}

impl EntryBuilder {
    fn push(&mut self, field: Field, text: &str) {
        match field {
            Field::Id => self.entry.id.push_str(text),
            Field::Summary => self.entry.summary.push_str(text),
            Field::Title => self.entry.title.push_str(text),
        }
    }

    fn finish(mut self) -> FeedEntry {
        self.entry.id = self.entry.id.trim().to_string();
        self.entry.title = self.entry.title.trim().to_string();
        self.entry
    }
}

/// Decode a feed body into its entries
pub fn parse_feed(xml: &str) -> Result<AtomFeed, FeedError> {
    let mut reader = Reader::from_str(xml);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut entries = Vec::new();
    let mut current: Option<EntryBuilder> = None;
    let mut field: Option<Field> = None;
    let mut saw_element = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                saw_element = true;
                let name = e.local_name();
                if name.as_ref() == b"entry" {
                    // An entry start always begins a new entry, even inside an unclosed field
                    if let Some(entry) = current.replace(EntryBuilder::default()) {
                        entries.push(entry.finish());
                    }
                    field = None;
                } else if let (Some(entry), Some(f)) = (current.as_mut(), field) {
                    if name.as_ref().eq_ignore_ascii_case(b"br") {
                        entry.push(f, "<br>");
                    }
                } else if current.is_some() {
                    field = Field::from_tag(name.as_ref());
                }
            }
            Ok(Event::Empty(e)) => {
                saw_element = true;
                if let (Some(entry), Some(f)) = (current.as_mut(), field) {
                    if e.local_name().as_ref().eq_ignore_ascii_case(b"br") {
                        entry.push(f, "<br>");
                    }
                }
            }
            Ok(Event::End(e)) => {
                let name = e.local_name();
                if name.as_ref() == b"entry" {
                    field = None;
                    if let Some(entry) = current.take() {
                        entries.push(entry.finish());
                    }
                } else if field.is_some_and(|f| name.as_ref() == f.tag()) {
                    field = None;
                }
            }
            Ok(Event::Text(t)) => {
                if let (Some(entry), Some(f)) = (current.as_mut(), field) {
                    match t.unescape() {
                        Ok(text) => entry.push(f, &text),
                        Err(_) => entry.push(f, &String::from_utf8_lossy(&t)),
                    }
                }
            }
            Ok(Event::CData(c)) => {
                if let (Some(entry), Some(f)) = (current.as_mut(), field) {
                    entry.push(f, &String::from_utf8_lossy(&c));
                }
            }
            Ok(Event::Eof) => break,
            Err(quick_xml::Error::IllFormed(e)) => {
                debug!(error = %e, "ignoring ill-formed markup in feed");
                if reader.buffer_position() as usize >= xml.len() {
                    break;
                }
            }
            Err(e) if reader.buffer_position() as usize >= xml.len() => {
                debug!(error = %e, "feed body ends inside markup");
                break;
            }
            Err(e) => {
                return Err(FeedError::Decode {
                    message: format!("at position {}: {}", reader.buffer_position(), e),
                });
            }
            _ => {}
        }
    }

    if !saw_element {
        return Err(FeedError::Decode {
            message: "response body contains no XML elements".to_string(),
        });
    }

    // Keep a truncated trailing entry
    if let Some(entry) = current.take() {
        entries.push(entry.finish());
    }

    Ok(AtomFeed { entries })
}
