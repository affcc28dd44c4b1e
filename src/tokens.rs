/// Token-level access to one XML part of the package.
use crate::error::{DocError, Result};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;

/// One XML event, reduced to what paragraph scanning needs.
///
/// Element names are local names: any namespace prefix (`w:` in practice)
/// is already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEvent {
    /// Opening tag of an element.
    ElementStart(String),
    /// Closing tag of an element.
    ElementEnd(String),
    /// Character data between tags, entity references resolved.
    CharacterData(String),
}

/// A pull-based source of XML events over one part's bytes.
///
/// `Ok(None)` is the expected end of the part, distinct from a decode
/// failure. Events are produced lazily, in document order, and each is
/// consumed exactly once.
pub trait TokenSource {
    /// Pull the next event, or `None` once the part is exhausted.
    fn next_event(&mut self) -> Result<Option<TextEvent>>;
}

/// [`TokenSource`] backed by a `quick-xml` reader over a part's XML bytes.
pub struct XmlTokens<'a> {
    reader: Reader<&'a [u8]>,
    /// Reusable event buffer
    buf: Vec<u8>,
    /// Structural event held back while a preceding text span is delivered
    pending: Option<TextEvent>,
}

impl<'a> XmlTokens<'a> {
    /// Create a token source over one part's XML bytes.
    pub fn new(xml: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(xml);
        // Self-closing elements must surface as a start/end pair so that an
        // empty <w:t/> still closes the run the scanner entered.
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            buf: Vec::with_capacity(512),
            pending: None,
        }
    }

    /// Resolve one general reference (`&amp;`, `&#x41;`, ...) into `out`.
    fn resolve_reference(
        reference: &quick_xml::events::BytesRef<'_>,
        out: &mut String,
    ) -> Result<()> {
        if let Some(ch) = reference.resolve_char_ref()? {
            out.push(ch);
            return Ok(());
        }
        let name = reference
            .decode()
            .map_err(|e| DocError::Xml(e.to_string()))?;
        match resolve_predefined_entity(&name) {
            Some(value) => {
                out.push_str(value);
                Ok(())
            },
            None => Err(DocError::Xml(format!("unknown entity: &{};", name))),
        }
    }
}

impl TokenSource for XmlTokens<'_> {
    fn next_event(&mut self) -> Result<Option<TextEvent>> {
        if let Some(event) = self.pending.take() {
            return Ok(Some(event));
        }

        // The tokenizer splits character data around entity references and
        // CDATA boundaries. Contiguous fragments coalesce into a single
        // CharacterData event; a structural event arriving mid-span is held
        // back until the span has been delivered.
        let mut text: Option<String> = None;
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Text(e)) => {
                    let chunk = e.xml_content().map_err(|e| DocError::Xml(e.to_string()))?;
                    text.get_or_insert_with(String::new).push_str(&chunk);
                    continue;
                },
                Ok(Event::CData(e)) => {
                    let chunk = e.xml_content().map_err(|e| DocError::Xml(e.to_string()))?;
                    text.get_or_insert_with(String::new).push_str(&chunk);
                    continue;
                },
                Ok(Event::GeneralRef(e)) => {
                    Self::resolve_reference(&e, text.get_or_insert_with(String::new))?;
                    continue;
                },
                Ok(Event::Start(e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    TextEvent::ElementStart(name)
                },
                Ok(Event::End(e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    TextEvent::ElementEnd(name)
                },
                Ok(Event::Eof) => return Ok(text.map(TextEvent::CharacterData)),
                // Declarations, comments and processing instructions carry no text.
                Ok(_) => continue,
                Err(e) => return Err(DocError::Xml(e.to_string())),
            };
            return match text {
                Some(span) => {
                    self.pending = Some(event);
                    Ok(Some(TextEvent::CharacterData(span)))
                },
                None => Ok(Some(event)),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(xml: &str) -> Vec<TextEvent> {
        let mut tokens = XmlTokens::new(xml.as_bytes());
        let mut events = Vec::new();
        while let Some(event) = tokens.next_event().unwrap() {
            events.push(event);
        }
        events
    }

    fn start(name: &str) -> TextEvent {
        TextEvent::ElementStart(name.to_string())
    }

    fn end(name: &str) -> TextEvent {
        TextEvent::ElementEnd(name.to_string())
    }

    fn chars(text: &str) -> TextEvent {
        TextEvent::CharacterData(text.to_string())
    }

    #[test]
    fn test_events_in_document_order() {
        let events = drain(r#"<?xml version="1.0"?><w:p><w:t>hi</w:t></w:p>"#);
        assert_eq!(
            events,
            vec![start("p"), start("t"), chars("hi"), end("t"), end("p")]
        );
    }

    #[test]
    fn test_self_closing_element_expands_to_pair() {
        let events = drain("<w:t/>");
        assert_eq!(events, vec![start("t"), end("t")]);
    }

    #[test]
    fn test_entity_span_is_one_event() {
        // References split the surrounding text; the span must come back
        // together as a single character-data event.
        let events = drain("<t>a &amp; b</t>");
        assert_eq!(events, vec![start("t"), chars("a & b"), end("t")]);
    }

    #[test]
    fn test_character_references_are_resolved() {
        let events = drain("<t>&#65;&#x42;c</t>");
        assert_eq!(events, vec![start("t"), chars("ABc"), end("t")]);
    }

    #[test]
    fn test_predefined_entities_are_resolved() {
        let events = drain("<t>&lt;tag&gt; &quot;q&quot; &apos;a&apos;</t>");
        assert_eq!(events, vec![start("t"), chars("<tag> \"q\" 'a'"), end("t")]);
    }

    #[test]
    fn test_unknown_entity_is_a_decode_error() {
        let mut tokens = XmlTokens::new(b"<t>&nope;</t>");
        assert!(matches!(tokens.next_event(), Ok(Some(TextEvent::ElementStart(_)))));
        assert!(matches!(tokens.next_event(), Err(DocError::Xml(_))));
    }

    #[test]
    fn test_cdata_joins_the_surrounding_span() {
        let events = drain("<t>a<![CDATA[ & ]]>b</t>");
        assert_eq!(events, vec![start("t"), chars("a & b"), end("t")]);
    }

    #[test]
    fn test_exhausted_source_keeps_returning_none() {
        let mut tokens = XmlTokens::new(b"<t/>");
        while tokens.next_event().unwrap().is_some() {}
        assert!(tokens.next_event().unwrap().is_none());
        assert!(tokens.next_event().unwrap().is_none());
    }

    #[test]
    fn test_malformed_markup_is_an_error() {
        let mut tokens = XmlTokens::new(b"<a></b>");
        let mut result = Ok(None);
        for _ in 0..4 {
            result = tokens.next_event();
            if result.is_err() {
                break;
            }
        }
        assert!(matches!(result, Err(DocError::Xml(_))));
    }
}
