//! JSON renderer implementation.

use crate::error::{Error, Result};
use crate::model::Workbook;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert a Workbook to JSON.
///
/// The sparse layout is kept: sheets map row indices to rows, rows map
/// column indices to text, and empty cells do not appear at all.
pub fn to_json(workbook: &Workbook, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Compact => serde_json::to_string(workbook),
        JsonFormat::Pretty => serde_json::to_string_pretty(workbook),
    };
    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Convert a Workbook to JSON with default formatting.
pub fn to_json_default(workbook: &Workbook) -> Result<String> {
    to_json(workbook, JsonFormat::Pretty)
}
