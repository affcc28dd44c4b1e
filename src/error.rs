/// Error types for document text extraction.
use thiserror::Error;

/// Result type for document text extraction.
pub type Result<T> = std::result::Result<T, DocError>;

/// Error types for document text extraction.
///
/// End-of-stream is not represented here: a token source signals it as
/// `Ok(None)` and the scanner consumes it internally, so callers only ever
/// see a finished result or one of these failures.
#[derive(Error, Debug)]
pub enum DocError {
    /// The path does not carry the expected `.docx` extension.
    ///
    /// Raised before any archive access.
    #[error("unsupported format: expected a .docx file")]
    UnsupportedFormat,

    /// The input is not a valid ZIP archive or an entry cannot be opened.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Malformed XML in one of the document parts.
    #[error("XML error: {0}")]
    Xml(String),

    /// A part ended while a paragraph was still open.
    #[error("part ended inside an unclosed paragraph")]
    UnclosedParagraph,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for DocError {
    fn from(err: quick_xml::Error) -> Self {
        DocError::Xml(err.to_string())
    }
}
