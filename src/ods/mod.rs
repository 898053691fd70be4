//! ODS (OpenDocument spreadsheet) decoder.
//!
//! Reads `content.xml` from an `.ods` package and decodes every
//! `table:table` into a sparse [`Sheet`](crate::model::Sheet), expanding
//! `table:number-rows-repeated` and `table:number-columns-repeated` runs
//! into row and column indices.
//!
//! # Example
//!
//! ```no_run
//! use odscsv::ods::{OdsParser, ParseOptions, RepeatPolicy};
//!
//! let parser = OdsParser::open("budget.ods")?
//!     .with_options(ParseOptions::new().with_repeat_policy(RepeatPolicy::Clamp { limit: 1000 }));
//! let workbook = parser.parse()?;
//!
//! for name in workbook.sheet_names() {
//!     println!("Sheet: {}", name);
//! }
//! # Ok::<(), odscsv::Error>(())
//! ```

mod grid;
mod options;
mod parser;
mod text;

pub use grid::{decode_row, decode_table};
pub use options::{DuplicateSheetPolicy, ParseOptions, RepeatPolicy};
pub use parser::{assemble_workbook, parse_content, OdsParser};
pub use text::flatten_paragraph;

pub(crate) const DOCUMENT_CONTENT: &str = "office:document-content";
pub(crate) const BODY: &str = "office:body";
pub(crate) const SPREADSHEET: &str = "office:spreadsheet";
pub(crate) const TABLE: &str = "table:table";
pub(crate) const TABLE_NAME: &str = "table:name";
pub(crate) const TABLE_ROW: &str = "table:table-row";
pub(crate) const TABLE_CELL: &str = "table:table-cell";
pub(crate) const ROWS_REPEATED: &str = "table:number-rows-repeated";
pub(crate) const COLUMNS_REPEATED: &str = "table:number-columns-repeated";
pub(crate) const TEXT_P: &str = "text:p";
pub(crate) const TEXT_SPAN: &str = "text:span";
