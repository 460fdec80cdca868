//! Lossless XML documents.
//!
//! A response body is kept as the exact sequence of markup events the reader
//! produced, without trimming or unescaping anything. Rendering writes the
//! events back in order, so a well-formed body renders to itself byte for
//! byte.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

const BOM: char = '\u{feff}';

/// Errors raised while reading or rendering a document.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("Malformed XML: {0}")]
    Malformed(#[from] quick_xml::Error),

    #[error("Document has no root element")]
    NoRoot,

    #[error("Failed to render XML: {0}")]
    Render(#[from] std::io::Error),

    #[error("Rendered XML is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// An XML document that remembers every event it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    bom: bool,
    events: Vec<Event<'static>>,
}

impl XmlDocument {
    /// Reads `text` into a document.
    ///
    /// Fails on malformed markup, including mismatched end tags, and on
    /// documents without an element.
    pub fn parse(text: &str) -> Result<Self, XmlError> {
        let bom = text.starts_with(BOM);
        let mut reader = Reader::from_str(strip_bom(text));
        reader.config_mut().check_end_names = true;

        let mut events = Vec::new();
        loop {
            match reader.read_event()? {
                Event::Eof => break,
                event => events.push(event.into_owned()),
            }
        }

        let document = Self { bom, events };
        if document.root_name().is_none() {
            return Err(XmlError::NoRoot);
        }
        Ok(document)
    }

    /// Local name of the document element.
    pub fn root_name(&self) -> Option<&str> {
        self.events.iter().find_map(|event| match event {
            Event::Start(e) | Event::Empty(e) => std::str::from_utf8(e.local_name().into_inner()).ok(),
            _ => None,
        })
    }

    pub fn has_bom(&self) -> bool {
        self.bom
    }

    /// Number of markup events, text runs included.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Writes the document back out.
    pub fn render(&self) -> Result<String, XmlError> {
        let mut writer = Writer::new(Vec::new());
        for event in &self.events {
            writer.write_event(event.borrow())?;
        }
        let mut out = String::new();
        if self.bom {
            out.push(BOM);
        }
        out.push_str(&String::from_utf8(writer.into_inner())?);
        Ok(out)
    }
}

/// Drops a leading byte order mark, if any.
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}
