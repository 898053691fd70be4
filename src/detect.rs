//! Format detection for OpenDocument packages.

use crate::container::{CONTENT_MEMBER, MIMETYPE_MEMBER};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Media type prefix shared by all OpenDocument packages.
const ODF_MIME_PREFIX: &str = "application/vnd.oasis.opendocument.";

/// Detected OpenDocument format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// Spreadsheet (.ods, .ots)
    Spreadsheet,
    /// Text document (.odt, .ott)
    Text,
    /// Presentation (.odp, .otp)
    Presentation,
    /// Drawing (.odg, .otg)
    Graphics,
    /// A package with `content.xml` but no `mimetype` member
    Package,
}

impl FormatType {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Spreadsheet => "ods",
            FormatType::Text => "odt",
            FormatType::Presentation => "odp",
            FormatType::Graphics => "odg",
            FormatType::Package => "zip",
        }
    }

    /// Returns a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            FormatType::Spreadsheet => "OpenDocument Spreadsheet",
            FormatType::Text => "OpenDocument Text",
            FormatType::Presentation => "OpenDocument Presentation",
            FormatType::Graphics => "OpenDocument Drawing",
            FormatType::Package => "OpenDocument Package",
        }
    }

    /// Whether the spreadsheet decoder should attempt this format.
    pub fn is_spreadsheet(&self) -> bool {
        matches!(self, FormatType::Spreadsheet | FormatType::Package)
    }

    /// Map a `mimetype` member value to a format.
    pub fn from_mimetype(mimetype: &str) -> Option<Self> {
        let kind = mimetype.trim().strip_prefix(ODF_MIME_PREFIX)?;
        let kind = kind.strip_suffix("-template").unwrap_or(kind);
        match kind {
            "spreadsheet" => Some(FormatType::Spreadsheet),
            "text" => Some(FormatType::Text),
            "presentation" => Some(FormatType::Presentation),
            "graphics" => Some(FormatType::Graphics),
            _ => None,
        }
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the format type from a file path.
///
/// # Example
///
/// ```no_run
/// use odscsv::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("budget.ods")?;
/// println!("Detected format: {}", format);
/// # Ok::<(), odscsv::Error>(())
/// ```
pub fn detect_format_from_path(path: impl AsRef<Path>) -> Result<FormatType> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    detect_format_from_reader(reader)
}

/// Detect the format type from a byte slice.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<FormatType> {
    if !is_zip_file(data) {
        return Err(Error::ArchiveOpenFailed("missing ZIP signature".to_string()));
    }

    let cursor = std::io::Cursor::new(data);
    detect_format_from_reader(cursor)
}

/// Detect the format type from a reader.
///
/// The `mimetype` member decides; without one, a package that still has
/// `content.xml` is reported as [`FormatType::Package`].
pub fn detect_format_from_reader<R: Read + Seek>(reader: R) -> Result<FormatType> {
    let mut archive =
        zip::ZipArchive::new(reader).map_err(|e| Error::ArchiveOpenFailed(e.to_string()))?;

    let mimetype = match archive.by_name(MIMETYPE_MEMBER) {
        Ok(mut file) => {
            let mut text = String::new();
            file.read_to_string(&mut text)?;
            Some(text)
        }
        Err(_) => None,
    };

    match mimetype {
        Some(mimetype) => FormatType::from_mimetype(&mimetype)
            .ok_or_else(|| Error::UnsupportedFormat(mimetype.trim().to_string())),
        None if archive.file_names().any(|n| n == CONTENT_MEMBER) => Ok(FormatType::Package),
        None => Err(Error::ArchiveMemberNotFound(CONTENT_MEMBER.to_string())),
    }
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn build_archive(members: &[(&str, &str)]) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buffer));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, data) in members {
            zip.start_file(*name, options).unwrap();
            zip.write_all(data.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        buffer
    }

    #[test]
    fn test_format_type_display() {
        assert_eq!(FormatType::Spreadsheet.to_string(), "OpenDocument Spreadsheet");
        assert_eq!(FormatType::Text.to_string(), "OpenDocument Text");
    }

    #[test]
    fn test_format_type_extension() {
        assert_eq!(FormatType::Spreadsheet.extension(), "ods");
        assert_eq!(FormatType::Presentation.extension(), "odp");
    }

    #[test]
    fn test_from_mimetype() {
        assert_eq!(
            FormatType::from_mimetype("application/vnd.oasis.opendocument.spreadsheet"),
            Some(FormatType::Spreadsheet)
        );
        assert_eq!(
            FormatType::from_mimetype("application/vnd.oasis.opendocument.spreadsheet-template\n"),
            Some(FormatType::Spreadsheet)
        );
        assert_eq!(
            FormatType::from_mimetype("application/vnd.oasis.opendocument.text"),
            Some(FormatType::Text)
        );
        assert_eq!(FormatType::from_mimetype("application/zip"), None);
    }

    #[test]
    fn test_is_zip_file() {
        assert!(is_zip_file(&[0x50, 0x4B, 0x03, 0x04, 0x00]));
        assert!(!is_zip_file(&[0x00, 0x00, 0x00, 0x00]));
        assert!(!is_zip_file(&[0x50, 0x4B])); // Too short
    }

    #[test]
    fn test_detect_invalid_data() {
        let result = detect_format_from_bytes(&[0x00, 0x00, 0x00, 0x00]);
        assert!(matches!(result, Err(Error::ArchiveOpenFailed(_))));
    }

    #[test]
    fn test_detect_from_mimetype() {
        let data = build_archive(&[
            ("mimetype", "application/vnd.oasis.opendocument.spreadsheet"),
            ("content.xml", "<x/>"),
        ]);
        assert_eq!(detect_format_from_bytes(&data).unwrap(), FormatType::Spreadsheet);

        let data = build_archive(&[("mimetype", "application/vnd.oasis.opendocument.text")]);
        assert_eq!(detect_format_from_bytes(&data).unwrap(), FormatType::Text);
    }

    #[test]
    fn test_detect_without_mimetype() {
        let data = build_archive(&[("content.xml", "<x/>")]);
        assert_eq!(detect_format_from_bytes(&data).unwrap(), FormatType::Package);

        let data = build_archive(&[("word/document.xml", "<x/>")]);
        assert!(matches!(
            detect_format_from_bytes(&data),
            Err(Error::ArchiveMemberNotFound(_))
        ));
    }

    #[test]
    fn test_detect_foreign_mimetype() {
        let data = build_archive(&[("mimetype", "application/epub+zip")]);
        assert!(matches!(
            detect_format_from_bytes(&data),
            Err(Error::UnsupportedFormat(ref m)) if m == "application/epub+zip"
        ));
    }
}
