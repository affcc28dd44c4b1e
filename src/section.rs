/// Classification of archive parts into the four output sections.
///
/// A .docx package stores its text across several XML parts: the main body,
/// plus any number of header, footer and footnote parts. Extraction folds
/// every selected part into one of four buckets keyed by the part's archive
/// name.

/// Canonical archive name of the main body part.
pub(crate) const BODY_PART_NAME: &str = "word/document.xml";

/// One of the four logical output buckets a part is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Parts whose archive name contains `header`.
    Header,
    /// The main document body (and any selected part matching no other bucket).
    Content,
    /// Parts whose archive name contains `footer`.
    Footer,
    /// Parts whose archive name contains `footnotes`.
    Footnotes,
}

impl Section {
    /// Classify a part by its archive name.
    ///
    /// Substring containment is case-sensitive and the precedence is fixed:
    /// header, then footer, then footnotes, with body content as the
    /// fallback. A name satisfying several substrings lands in the first
    /// matching bucket.
    pub fn classify(part_name: &str) -> Section {
        if part_name.contains("header") {
            Section::Header
        } else if part_name.contains("footer") {
            Section::Footer
        } else if part_name.contains("footnotes") {
            Section::Footnotes
        } else {
            Section::Content
        }
    }

    /// Whether a part with this archive name participates in extraction.
    pub(crate) fn selects(part_name: &str) -> bool {
        part_name == BODY_PART_NAME
            || part_name.contains("header")
            || part_name.contains("footer")
            || part_name.contains("footnotes")
    }
}

/// The extracted text of a document, one string per section.
///
/// Each field is the concatenation, in archive-listing order, of the
/// paragraph-joined text of every part classified into that section,
/// trimmed of leading and trailing whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentText {
    /// Text of the header parts.
    pub header: String,
    /// Text of the main document body.
    pub content: String,
    /// Text of the footer parts.
    pub footer: String,
    /// Text of the footnote parts.
    pub footnotes: String,
}

/// Append-only accumulator for the four section buffers.
///
/// Appends carry no separator between parts: per-part text already ends
/// with the trailing space of its last paragraph.
#[derive(Default)]
pub(crate) struct SectionAggregator {
    header: String,
    content: String,
    footer: String,
    footnotes: String,
}

impl SectionAggregator {
    pub(crate) fn append(&mut self, section: Section, text: &str) {
        let buffer = match section {
            Section::Header => &mut self.header,
            Section::Content => &mut self.content,
            Section::Footer => &mut self.footer,
            Section::Footnotes => &mut self.footnotes,
        };
        buffer.push_str(text);
    }

    /// Trim each buffer exactly once and produce the final result.
    pub(crate) fn finish(self) -> DocumentText {
        DocumentText {
            header: self.header.trim().to_string(),
            content: self.content.trim().to_string(),
            footer: self.footer.trim().to_string(),
            footnotes: self.footnotes.trim().to_string(),
        }
    }
}
