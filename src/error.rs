//! Error types for the odscsv library.

use std::io;
use thiserror::Error;

/// Result type alias for odscsv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Grid axis an index belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Errors that can occur while decoding or serializing a spreadsheet.
///
/// Every error aborts the whole conversion; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations or while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a readable ZIP archive.
    #[error("Cannot open archive: {0}")]
    ArchiveOpenFailed(String),

    /// The archive does not contain the requested member.
    #[error("Archive member not found: {0}")]
    ArchiveMemberNotFound(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// An element on the fixed document path is missing.
    #[error("Required element missing: {0}")]
    RequiredElementMissing(String),

    /// A `table:table` element has no `table:name` attribute. `index` is
    /// the zero-based position of the table in the spreadsheet body.
    #[error("Table {index} has no table:name attribute")]
    MissingSheetName { index: usize },

    /// Two tables share the same name.
    #[error("Duplicate sheet name: {0}")]
    DuplicateSheetName(String),

    /// A repeat-count attribute is not a non-negative integer, or expanding
    /// it would overflow the index space.
    #[error("Malformed repeat count in {attribute}: {value:?}")]
    MalformedRepeatCount { attribute: String, value: String },

    /// A repeat count exceeds the configured limit.
    #[error("Repeat count in {attribute} is {value}, above the limit of {limit}")]
    RepeatCountTooLarge {
        attribute: String,
        value: usize,
        limit: usize,
    },

    /// A grid index was inserted twice.
    #[error("Duplicate {axis} index: {index}")]
    DuplicateIndex { axis: Axis, index: usize },

    /// Invalid data offered to the model.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The package is an OpenDocument file, but not a spreadsheet.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Error during rendering.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => {
                Error::ArchiveMemberNotFound("requested file".to_string())
            }
            other => Error::ArchiveOpenFailed(other.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlParse(err.to_string())
    }
}
