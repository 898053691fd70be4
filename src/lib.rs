//! # odscsv
//!
//! Sparse, gap-preserving conversion of OpenDocument spreadsheets to
//! delimited text.
//!
//! An `.ods` file stores runs of identical rows and cells once, with a
//! repeat count. This library expands those runs into a sparse
//! [`Workbook`] that holds only non-empty cells, then writes it back out as
//! delimited text in which every empty row and column between two values is
//! represented by a bare separator, and nothing is written after the last
//! value of a row or sheet.
//!
//! ## Quick Start
//!
//! ```no_run
//! use odscsv::{parse_file, to_delimited};
//!
//! // One call conversion
//! let text = to_delimited("budget.ods")?;
//! print!("{}", text);
//!
//! // Access to the decoded grid
//! let workbook = parse_file("budget.ods")?;
//! for (name, sheet) in workbook.sheets() {
//!     println!("{}: {} cells", name, sheet.cell_count());
//! }
//! # Ok::<(), odscsv::Error>(())
//! ```
//!
//! ## Output format
//!
//! ```text
//! $NEW_SHEET,Sheet1
//! a,b
//!
//! ,,c
//! $END_SHEET
//! ```
//!
//! Sheets appear in ascending name order. Cell text is written verbatim;
//! separators inside cell text are not escaped.

pub mod container;
pub mod detect;
pub mod error;
pub mod model;
pub mod ods;
pub mod render;
pub mod xml;

// Re-exports
pub use container::OdfContainer;
pub use detect::{detect_format_from_bytes, detect_format_from_path, FormatType};
pub use error::{Axis, Error, Result};
pub use model::{Row, Sheet, Workbook};
pub use ods::{DuplicateSheetPolicy, OdsParser, ParseOptions, RepeatPolicy};
pub use render::{DelimitedOptions, JsonFormat};

use std::path::Path;

/// Parse a spreadsheet file into a Workbook.
///
/// # Example
///
/// ```no_run
/// use odscsv::parse_file;
///
/// let workbook = parse_file("budget.ods")?;
/// println!("Sheets: {}", workbook.len());
/// # Ok::<(), odscsv::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Workbook> {
    parse_file_with_options(path, &ParseOptions::default())
}

/// Parse a spreadsheet file with options.
pub fn parse_file_with_options(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Workbook> {
    let container = OdfContainer::open(path)?;
    check_format(&container)?;
    OdsParser::from_container(container)
        .with_options(options.clone())
        .parse()
}

/// Parse a spreadsheet from bytes.
///
/// # Example
///
/// ```no_run
/// use odscsv::parse_bytes;
///
/// let data = std::fs::read("budget.ods")?;
/// let workbook = parse_bytes(&data)?;
/// # Ok::<(), odscsv::Error>(())
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Workbook> {
    parse_bytes_with_options(data, &ParseOptions::default())
}

/// Parse a spreadsheet from bytes with options.
pub fn parse_bytes_with_options(data: &[u8], options: &ParseOptions) -> Result<Workbook> {
    let format = detect_format_from_bytes(data)?;
    if !format.is_spreadsheet() {
        return Err(Error::UnsupportedFormat(format.name().to_string()));
    }
    OdsParser::from_bytes(data.to_vec())?
        .with_options(options.clone())
        .parse()
}

/// Convert a spreadsheet file to delimited text with default options.
///
/// # Example
///
/// ```no_run
/// use odscsv::to_delimited;
///
/// let text = to_delimited("budget.ods")?;
/// std::fs::write("budget.txt", text)?;
/// # Ok::<(), odscsv::Error>(())
/// ```
pub fn to_delimited(path: impl AsRef<Path>) -> Result<String> {
    let workbook = parse_file(path)?;
    render::to_delimited(&workbook, &DelimitedOptions::default())
}

/// Reject packages whose declared media type is not a spreadsheet.
fn check_format(container: &OdfContainer) -> Result<()> {
    match container.mimetype() {
        Some(mimetype) => match FormatType::from_mimetype(&mimetype) {
            Some(format) if format.is_spreadsheet() => Ok(()),
            Some(format) => Err(Error::UnsupportedFormat(format.name().to_string())),
            None => Err(Error::UnsupportedFormat(mimetype)),
        },
        None => Ok(()),
    }
}
