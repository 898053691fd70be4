//! Sparse spreadsheet model.
//!
//! A [`Workbook`] maps sheet names to [`Sheet`]s, a sheet maps row indices to
//! [`Row`]s and a row maps column indices to cell text. Only non-empty
//! content is ever stored: an index without an entry is an empty cell or row.
//! Every insertion is set-once.

mod grid;
mod workbook;

pub use grid::*;
pub use workbook::*;
