/// Reading .docx packages from a path or an in-memory buffer.
use crate::error::{DocError, Result};
use crate::scan::read_part_text;
use crate::section::{DocumentText, Section, SectionAggregator};
use crate::tokens::XmlTokens;
use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// One selected archive part: its name and decompressed XML bytes.
struct DocumentPart {
    name: String,
    xml: Vec<u8>,
}

/// A .docx package opened for text extraction.
///
/// On open, the package's text-bearing parts (body, headers, footers,
/// footnotes) are selected in archive-listing order and their XML bytes are
/// retained for the lifetime of the reader. [`Reader::read_all`] can then be
/// called any number of times; release happens via [`Reader::close`] or on
/// drop.
///
/// # Examples
///
/// ```rust,no_run
/// use doctext::Reader;
///
/// let reader = Reader::open("document.docx")?;
/// let text = reader.read_all()?;
/// println!("body: {}", text.content);
/// println!("header: {}", text.header);
/// reader.close()?;
/// # Ok::<(), doctext::DocError>(())
/// ```
pub struct Reader {
    /// Selected parts, in archive-listing order
    parts: Vec<DocumentPart>,
    /// Scratch file to remove on close, if this reader created its source
    temp_artifact: Option<PathBuf>,
}

impl Reader {
    /// Open a .docx package from a file path.
    ///
    /// The extension is checked case-insensitively before any archive
    /// access; anything other than `.docx` fails with
    /// [`DocError::UnsupportedFormat`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        if extension.as_deref() != Some("docx") {
            return Err(DocError::UnsupportedFormat);
        }

        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Open a .docx package from an in-memory byte buffer.
    ///
    /// No extension gate applies; the bytes must form a valid ZIP archive.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let parts = select_parts(&mut archive)?;
        Ok(Self {
            parts,
            temp_artifact: None,
        })
    }

    /// Open a scratch .docx the caller materialized as a temporary file.
    ///
    /// Behaves like [`Reader::open`], and additionally removes the file when
    /// the reader is closed or dropped. Intended for sources converted from
    /// a legacy format into a temporary .docx on disk.
    pub fn open_temporary<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = Self::open(path.as_ref())?;
        reader.temp_artifact = Some(path.as_ref().to_path_buf());
        Ok(reader)
    }

    /// Read every selected part and return the four section strings.
    ///
    /// Parts are scanned start-to-finish, one at a time, in archive-listing
    /// order. Any decode failure aborts the whole read; no partial sections
    /// are returned.
    pub fn read_all(&self) -> Result<DocumentText> {
        let mut sections = SectionAggregator::default();
        for part in &self.parts {
            let text = read_part_text(XmlTokens::new(&part.xml))?;
            sections.append(Section::classify(&part.name), &text);
        }
        Ok(sections.finish())
    }

    /// Release the reader.
    ///
    /// Drops every retained part and removes the temporary artifact if this
    /// reader created its source from one. Dropping the reader performs the
    /// same release, so an explicit call is only needed to observe cleanup
    /// errors.
    pub fn close(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        self.parts.clear();
        if let Some(path) = self.temp_artifact.take() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl Drop for Reader {
    fn drop(&mut self) {
        let _ = self.release();
    }
}

/// Select the text-bearing entries of the archive, in listing order, and
/// retain their decompressed bytes.
fn select_parts<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<DocumentPart>> {
    let mut parts = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if !Section::selects(entry.name()) {
            continue;
        }
        let name = entry.name().to_string();
        let mut xml = Vec::new();
        entry.read_to_end(&mut xml)?;
        parts.push(DocumentPart { name, xml });
    }
    Ok(parts)
}
