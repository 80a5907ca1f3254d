// RSS 2.0 / RSS 1.0 (RDF) / Atom parsing with quick-xml.
//
// We only pull the four fields the pipeline stores. Anything that isn't
// well-formed XML, or doesn't have a feed root element, is rejected so the
// caller can skip the whole feed.

use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::traits::FeedEntry;

const FEED_ROOTS: [&str; 3] = ["rss", "feed", "rdf:RDF"];
const ENTRY_ELEMENTS: [&str; 2] = ["item", "entry"];

/// Which entry field the current text belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Title,
    Link,
    Description,
    Content,
    Published,
    Updated,
}

impl Field {
    fn from_element(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Field::Title),
            "link" => Some(Field::Link),
            "description" | "summary" => Some(Field::Description),
            "content" => Some(Field::Content),
            "pubDate" | "published" | "dc:date" => Some(Field::Published),
            "updated" => Some(Field::Updated),
            _ => None,
        }
    }
}

#[derive(Default)]
struct EntryBuilder {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    content: Option<String>,
    published: Option<String>,
    updated: Option<String>,
}

impl EntryBuilder {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Link => &mut self.link,
            Field::Description => &mut self.description,
            Field::Content => &mut self.content,
            Field::Published => &mut self.published,
            Field::Updated => &mut self.updated,
        }
    }

    /// Mark a field as present, even if it ends up with no text.
    fn open(&mut self, field: Field) {
        self.slot(field).get_or_insert_with(String::new);
    }

    fn append(&mut self, field: Field, text: &str) {
        self.slot(field).get_or_insert_with(String::new).push_str(text);
    }

    /// Atom puts the link in an `href` attribute. Prefer the alternate link
    /// and keep the first one seen.
    fn link_from_attributes(&mut self, element: &BytesStart) -> Result<()> {
        if self.link.is_some() {
            return Ok(());
        }
        let rel = match element.try_get_attribute("rel")? {
            Some(attr) => Some(attr.unescape_value()?.into_owned()),
            None => None,
        };
        if rel.as_deref().is_some_and(|r| r != "alternate") {
            return Ok(());
        }
        if let Some(href) = element.try_get_attribute("href")? {
            self.link = Some(href.unescape_value()?.into_owned());
        }
        Ok(())
    }

    fn build(self) -> FeedEntry {
        let trimmed = |s: Option<String>| s.map(|v| v.trim().to_string());
        let non_empty = |s: Option<String>| trimmed(s).filter(|v| !v.is_empty());

        // An empty <description/> is kept as "" (nothing to classify);
        // Atom <content> only fills in when there's no summary text.
        let description = trimmed(self.description);
        let description = match description {
            Some(d) if !d.is_empty() => Some(d),
            other => non_empty(self.content).or(other),
        };

        FeedEntry {
            title: non_empty(self.title),
            link: non_empty(self.link),
            description,
            published: non_empty(self.published).or_else(|| non_empty(self.updated)),
        }
    }
}

/// Parse a feed document into its entries, in document order.
pub fn parse_feed(xml: &[u8]) -> Result<Vec<FeedEntry>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();
    let mut saw_root = false;
    let mut current: Option<EntryBuilder> = None;
    // Innermost known field inside the current entry, if any
    let mut field: Option<Field> = None;

    loop {
        match reader
            .read_event_into(&mut buf)
            .with_context(|| format!("XML error at byte {}", reader.buffer_position()))?
        {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

                if FEED_ROOTS.contains(&name.as_str()) {
                    saw_root = true;
                } else if ENTRY_ELEMENTS.contains(&name.as_str()) {
                    current = Some(EntryBuilder::default());
                    field = None;
                } else if let Some(entry) = current.as_mut() {
                    field = Field::from_element(&name);
                    match field {
                        Some(Field::Link) => entry.link_from_attributes(&e)?,
                        Some(f) => entry.open(f),
                        None => {}
                    }
                }
            }
            Event::Empty(e) => {
                if let Some(entry) = current.as_mut() {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    match Field::from_element(&name) {
                        Some(Field::Link) => entry.link_from_attributes(&e)?,
                        Some(f) => entry.open(f),
                        None => {}
                    }
                }
            }
            Event::End(e) => {
                let name = e.name();
                if ENTRY_ELEMENTS.iter().any(|n| n.as_bytes() == name.as_ref()) {
                    if let Some(entry) = current.take() {
                        entries.push(entry.build());
                    }
                }
                field = None;
            }
            Event::Text(e) => {
                if let (Some(entry), Some(f)) = (current.as_mut(), field) {
                    // Feeds routinely use HTML entities XML doesn't know
                    // (&nbsp;); keep those as-is rather than rejecting the feed.
                    let text = match e.unescape() {
                        Ok(text) => text.into_owned(),
                        Err(_) => String::from_utf8_lossy(&e).into_owned(),
                    };
                    entry.append(f, &text);
                }
            }
            Event::CData(e) => {
                if let (Some(entry), Some(f)) = (current.as_mut(), field) {
                    entry.append(f, &String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        anyhow::bail!("Document is not an RSS or Atom feed");
    }

    Ok(entries)
}
