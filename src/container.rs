//! ZIP container abstraction for OpenDocument packages.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Name of the package member holding the document body.
pub const CONTENT_MEMBER: &str = "content.xml";

/// Name of the package member holding the media type.
pub const MIMETYPE_MEMBER: &str = "mimetype";

/// UTF-8 byte order mark.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Decode XML bytes into a string.
///
/// OpenDocument mandates UTF-8. A leading BOM is skipped; anything that is
/// not valid UTF-8 is reported as an XML error rather than decoded lossily.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    let body = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes);
    String::from_utf8(body.to_vec())
        .map_err(|e| Error::XmlParse(format!("content is not valid UTF-8: {}", e)))
}

/// OpenDocument container abstraction over a ZIP archive.
///
/// The whole archive is held in memory; members are extracted on demand
/// into freshly allocated buffers owned by the caller.
pub struct OdfContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl OdfContainer {
    /// Open a container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use odscsv::container::OdfContainer;
    ///
    /// let container = OdfContainer::open("budget.ods")?;
    /// let xml = container.read_xml("content.xml")?;
    /// # Ok::<(), odscsv::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create a container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let cursor = Cursor::new(data);
        let archive = zip::ZipArchive::new(cursor)
            .map_err(|e| Error::ArchiveOpenFailed(e.to_string()))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Create a container from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Extract a member's raw bytes.
    ///
    /// Either the complete member is returned or an error; a read failure
    /// midway drops the partial buffer. The size recorded in the archive is
    /// not trusted for preallocation.
    pub fn read_member(&self, name: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(name)
            .map_err(|_| Error::ArchiveMemberNotFound(name.to_string()))?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Read an XML member as a string.
    pub fn read_xml(&self, name: &str) -> Result<String> {
        let bytes = self.read_member(name)?;
        decode_xml_bytes(&bytes)
    }

    /// Read the package media type, if the package declares one.
    pub fn mimetype(&self) -> Option<String> {
        let bytes = self.read_member(MIMETYPE_MEMBER).ok()?;
        let text = String::from_utf8(bytes).ok()?;
        Some(text.trim().to_string())
    }

    /// Check if a member exists in the archive.
    pub fn exists(&self, name: &str) -> bool {
        let archive = self.archive.borrow();
        let result = archive.file_names().any(|n| n == name);
        result
    }

    /// List all members in the archive.
    pub fn list_files(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        archive.file_names().map(String::from).collect()
    }
}

impl std::fmt::Debug for OdfContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OdfContainer")
            .field("files", &self.list_files().len())
            .finish()
    }
}
