//! Row and sheet structures.

use crate::error::{Axis, Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// One row of a sheet, indexed by column.
///
/// Deserialization goes through [`Row::insert`], so empty text is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<usize, String>,
}

impl Row {
    /// Create a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` at `column`.
    ///
    /// Fails if the text is empty or the column is already occupied.
    pub fn insert(&mut self, column: usize, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::InvalidData(format!(
                "empty cell text at column {}",
                column
            )));
        }
        match self.cells.entry(column) {
            Entry::Occupied(_) => Err(Error::DuplicateIndex {
                axis: Axis::Column,
                index: column,
            }),
            Entry::Vacant(slot) => {
                slot.insert(text);
                Ok(())
            }
        }
    }

    /// Cell text at `column`, if that cell is non-empty.
    pub fn get(&self, column: usize) -> Option<&str> {
        self.cells.get(&column).map(String::as_str)
    }

    /// Non-empty cells in ascending column order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.cells.iter().map(|(&col, text)| (col, text.as_str()))
    }

    /// Number of non-empty cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Highest occupied column.
    pub fn last_column(&self) -> Option<usize> {
        self.cells.keys().next_back().copied()
    }
}

impl TryFrom<BTreeMap<usize, String>> for Row {
    type Error = Error;

    fn try_from(cells: BTreeMap<usize, String>) -> Result<Self> {
        let mut row = Row::new();
        for (column, text) in cells {
            row.insert(column, text)?;
        }
        Ok(row)
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let cells = BTreeMap::<usize, String>::deserialize(deserializer)?;
        Row::try_from(cells).map_err(serde::de::Error::custom)
    }
}

/// One sheet, indexed by row.
///
/// Deserialization goes through [`Sheet::insert`], so empty rows are
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sheet {
    rows: BTreeMap<usize, Row>,
}

impl Sheet {
    /// Create a new empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `row` at `index`.
    ///
    /// Fails if the row is empty or the index is already occupied.
    pub fn insert(&mut self, index: usize, row: Row) -> Result<()> {
        if row.is_empty() {
            return Err(Error::InvalidData(format!("empty row at index {}", index)));
        }
        match self.rows.entry(index) {
            Entry::Occupied(_) => Err(Error::DuplicateIndex {
                axis: Axis::Row,
                index,
            }),
            Entry::Vacant(slot) => {
                slot.insert(row);
                Ok(())
            }
        }
    }

    /// Row at `index`, if it has any content.
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Cell text at (`row`, `column`).
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.get(row).and_then(|r| r.get(column))
    }

    /// Materialized rows in ascending index order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Row)> + '_ {
        self.rows.iter().map(|(&idx, row)| (idx, row))
    }

    /// Number of materialized rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of non-empty cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(Row::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bounding size as (rows, columns): one past the last occupied row and
    /// one past the widest occupied column. `(0, 0)` for an empty sheet.
    pub fn extent(&self) -> (usize, usize) {
        let rows = self.rows.keys().next_back().map_or(0, |r| r + 1);
        let columns = self
            .rows
            .values()
            .filter_map(Row::last_column)
            .max()
            .map_or(0, |c| c + 1);
        (rows, columns)
    }
}

impl TryFrom<BTreeMap<usize, Row>> for Sheet {
    type Error = Error;

    fn try_from(rows: BTreeMap<usize, Row>) -> Result<Self> {
        let mut sheet = Sheet::new();
        for (index, row) in rows {
            sheet.insert(index, row)?;
        }
        Ok(sheet)
    }
}

impl<'de> Deserialize<'de> for Sheet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rows = BTreeMap::<usize, Row>::deserialize(deserializer)?;
        Sheet::try_from(rows).map_err(serde::de::Error::custom)
    }
}
