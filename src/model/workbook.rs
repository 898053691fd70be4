//! Workbook structure.

use super::Sheet;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// A decoded workbook: sheets keyed by name.
///
/// Sheets iterate in ascending byte order of their names, which is the
/// order every renderer emits them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    sheets: BTreeMap<String, Sheet>,
}

impl Workbook {
    /// Create a new empty workbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet. Fails with [`Error::DuplicateSheetName`] if the name is
    /// taken.
    pub fn insert(&mut self, name: impl Into<String>, sheet: Sheet) -> Result<()> {
        match self.sheets.entry(name.into()) {
            Entry::Occupied(slot) => Err(Error::DuplicateSheetName(slot.key().clone())),
            Entry::Vacant(slot) => {
                slot.insert(sheet);
                Ok(())
            }
        }
    }

    /// Add a sheet, returning the one it displaced.
    pub fn replace(&mut self, name: impl Into<String>, sheet: Sheet) -> Option<Sheet> {
        self.sheets.insert(name.into(), sheet)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    /// Get a sheet by name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }

    /// Sheet names in output order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Sheets in output order.
    pub fn sheets(&self) -> impl Iterator<Item = (&str, &Sheet)> + '_ {
        self.sheets.iter().map(|(name, sheet)| (name.as_str(), sheet))
    }

    /// Number of sheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
