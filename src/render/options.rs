//! Rendering options configuration.

/// Options for the delimited text renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedOptions {
    /// Written between cells of a row
    pub column_separator: String,

    /// Terminates every line, blank gap lines included
    pub row_separator: String,

    /// Written before the sheet name on the opening marker line
    pub sheet_start: String,

    /// Closing marker line content
    pub sheet_end: String,
}

impl Default for DelimitedOptions {
    fn default() -> Self {
        Self {
            column_separator: ",".to_string(),
            row_separator: "\n".to_string(),
            sheet_start: "$NEW_SHEET,".to_string(),
            sheet_end: "$END_SHEET".to_string(),
        }
    }
}

impl DelimitedOptions {
    /// Create new delimited options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column separator.
    pub fn with_column_separator(mut self, separator: impl Into<String>) -> Self {
        self.column_separator = separator.into();
        self
    }

    /// Set the row separator.
    pub fn with_row_separator(mut self, separator: impl Into<String>) -> Self {
        self.row_separator = separator.into();
        self
    }

    /// Set the sheet marker lines.
    pub fn with_sheet_markers(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.sheet_start = start.into();
        self.sheet_end = end.into();
        self
    }
}
