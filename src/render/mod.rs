//! Output rendering for workbooks.
//!
//! This module provides renderers for converting a decoded [`Workbook`]
//! to delimited text and JSON.
//!
//! # Example
//!
//! ```no_run
//! use odscsv::{parse_file, render::*};
//!
//! let workbook = parse_file("budget.ods")?;
//!
//! // Render to delimited text
//! let text = to_delimited(&workbook, &DelimitedOptions::default())?;
//!
//! // Stream delimited text to stdout
//! write_delimited(&workbook, &DelimitedOptions::default(), &mut std::io::stdout().lock())?;
//!
//! // Render to JSON
//! let json = to_json(&workbook, JsonFormat::Pretty)?;
//! # Ok::<(), odscsv::Error>(())
//! ```
//!
//! [`Workbook`]: crate::model::Workbook

mod delimited;
mod json;
mod options;

pub use delimited::{to_delimited, write_delimited, write_sheet};
pub use json::{to_json, to_json_default, JsonFormat};
pub use options::DelimitedOptions;
