//! doctext - streaming plain-text extraction from Word (.docx) documents
//!
//! A .docx file is a ZIP package of XML parts. This library selects the
//! text-bearing parts (body, headers, footers, footnotes), reconstructs
//! their paragraphs with a token-level streaming scanner, and returns four
//! flat strings - no formatting, no markup.
//!
//! # Example - Reading from a path
//!
//! ```no_run
//! use doctext::Reader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = Reader::open("document.docx")?;
//! let text = reader.read_all()?;
//!
//! println!("header:    {}", text.header);
//! println!("content:   {}", text.content);
//! println!("footer:    {}", text.footer);
//! println!("footnotes: {}", text.footnotes);
//!
//! reader.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading from bytes
//!
//! ```no_run
//! use doctext::Reader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("document.docx")?;
//! let text = Reader::from_bytes(&bytes)?.read_all()?;
//! println!("{}", text.content);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Scanning XML obtained elsewhere
//!
//! ```
//! use doctext::{ParagraphScanner, XmlTokens};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = b"<w:p><w:r><w:t>Hello</w:t></w:r></w:p>";
//! let mut scanner = ParagraphScanner::new(XmlTokens::new(xml));
//! while let Some(paragraph) = scanner.next_paragraph()? {
//!     println!("{paragraph}");
//! }
//! # Ok(())
//! # }
//! ```

/// Error types for document text extraction
pub mod error;

/// Reading .docx packages from a path or an in-memory buffer
pub mod reader;

/// The streaming paragraph-reconstruction scanner
pub mod scan;

/// Classification of archive parts into the four output sections
pub mod section;

/// Token-level access to one XML part
pub mod tokens;

// Re-export commonly used types for convenience
pub use error::{DocError, Result};
pub use reader::Reader;
pub use scan::{ParagraphScanner, read_part_text};
pub use section::{DocumentText, Section};
pub use tokens::{TextEvent, TokenSource, XmlTokens};
