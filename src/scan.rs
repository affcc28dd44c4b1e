/// Streaming paragraph reconstruction over one part's XML events.
///
/// This is a small state machine over a [`TokenSource`]: it alternates
/// between seeking the next paragraph start and collecting that paragraph's
/// text runs, until the part's event stream is exhausted.
use crate::error::{DocError, Result};
use crate::tokens::{TextEvent, TokenSource};

/// Local name of the element marking one paragraph (`<w:p>`).
const PARAGRAPH_TAG: &str = "p";
/// Local name of the element holding one run of literal text (`<w:t>`).
const TEXT_TAG: &str = "t";

/// Reassembles flat paragraph strings from an XML event stream.
///
/// The scanner only looks at local tag names; nesting depth of elements
/// other than the paragraph tag is irrelevant and their events are
/// discarded.
///
/// # Examples
///
/// ```rust
/// use doctext::{ParagraphScanner, XmlTokens};
///
/// let xml = b"<w:p><w:r><w:t>Hello</w:t></w:r><w:r><w:t> world</w:t></w:r></w:p>";
/// let mut scanner = ParagraphScanner::new(XmlTokens::new(xml));
///
/// assert_eq!(scanner.next_paragraph()?, Some("Hello world".to_string()));
/// assert_eq!(scanner.next_paragraph()?, None);
/// # Ok::<(), doctext::DocError>(())
/// ```
pub struct ParagraphScanner<S> {
    tokens: S,
}

impl<S: TokenSource> ParagraphScanner<S> {
    /// Create a scanner over a token source positioned anywhere in a part.
    #[inline]
    pub fn new(tokens: S) -> Self {
        Self { tokens }
    }

    /// Reassemble the next paragraph, or `None` once the part has no more.
    ///
    /// Exhaustion while seeking is the expected terminal condition, never an
    /// error. Exhaustion while inside a paragraph is
    /// [`DocError::UnclosedParagraph`]: a paragraph must close before its
    /// part ends.
    pub fn next_paragraph(&mut self) -> Result<Option<String>> {
        if !self.seek_paragraph_start()? {
            return Ok(None);
        }
        self.collect_paragraph_text().map(Some)
    }

    /// Advance to just after the next paragraph start tag, discarding every
    /// other event. Returns `false` when the part is exhausted first.
    fn seek_paragraph_start(&mut self) -> Result<bool> {
        while let Some(event) = self.tokens.next_event()? {
            if matches!(event, TextEvent::ElementStart(name) if name == PARAGRAPH_TAG) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Collect the text runs of the paragraph the stream is positioned in,
    /// concatenated with no separator, up to the paragraph's end tag.
    fn collect_paragraph_text(&mut self) -> Result<String> {
        let mut paragraph = String::new();
        loop {
            match self.tokens.next_event()? {
                Some(TextEvent::ElementStart(name)) if name == TEXT_TAG => {
                    paragraph.push_str(&self.read_text_run()?);
                },
                Some(TextEvent::ElementEnd(name)) if name == PARAGRAPH_TAG => {
                    return Ok(paragraph);
                },
                Some(_) => {},
                None => return Err(DocError::UnclosedParagraph),
            }
        }
    }

    /// Read one text run's contribution.
    ///
    /// The first character data encountered is the run's entire contribution
    /// and reading stops there; character data appearing later, before the
    /// run's own end tag, is left for the paragraph loop to discard. A run
    /// that closes without character data contributes the empty string.
    fn read_text_run(&mut self) -> Result<String> {
        loop {
            match self.tokens.next_event()? {
                Some(TextEvent::CharacterData(text)) => return Ok(text),
                Some(TextEvent::ElementEnd(_)) => return Ok(String::new()),
                Some(TextEvent::ElementStart(_)) => {},
                None => return Err(DocError::UnclosedParagraph),
            }
        }
    }
}

/// Read every paragraph of one part, each followed by a single space.
///
/// Terminates cleanly when the part runs out of paragraphs; any scan error
/// aborts, discarding the partial buffer.
pub fn read_part_text<S: TokenSource>(tokens: S) -> Result<String> {
    let mut scanner = ParagraphScanner::new(tokens);
    let mut content = String::new();
    while let Some(paragraph) = scanner.next_paragraph()? {
        content.push_str(&paragraph);
        content.push(' ');
    }
    Ok(content)
}
