//! Run-length decoding of tables into sparse sheets.

use super::options::{ParseOptions, RepeatPolicy};
use super::text::flatten_paragraph;
use super::{COLUMNS_REPEATED, ROWS_REPEATED, TABLE_CELL, TABLE_ROW, TEXT_P};
use crate::error::{Error, Result};
use crate::model::{Row, Sheet};
use crate::xml::Node;

/// Decode a `table:table` element into a sheet.
///
/// Each row element is decoded once and its content stored at every index
/// its repeat count covers. Rows without content only move the cursor, so
/// runs of empty rows cost nothing but leave the right gap behind.
pub fn decode_table(table: Node<'_>, options: &ParseOptions) -> Result<Sheet> {
    let mut sheet = Sheet::new();
    let mut cursor = 0usize;

    let mut current = table.first_child_element(TABLE_ROW);
    while let Some(node) = current {
        let repeat = repeat_count(node, ROWS_REPEATED, options.repeat_policy)?;
        let row = decode_row(node, options)?;
        let end = advance(cursor, repeat, ROWS_REPEATED)?;

        if !row.is_empty() {
            for index in cursor..end {
                sheet.insert(index, row.clone())?;
            }
        }

        cursor = end;
        current = node.next_same_name();
    }

    Ok(sheet)
}

/// Decode the cells of a `table:table-row` element.
pub fn decode_row(row: Node<'_>, options: &ParseOptions) -> Result<Row> {
    let mut decoded = Row::new();
    let mut cursor = 0usize;

    let mut current = row.first_child_element(TABLE_CELL);
    while let Some(cell) = current {
        let repeat = repeat_count(cell, COLUMNS_REPEATED, options.repeat_policy)?;
        let text = cell
            .first_child_element(TEXT_P)
            .map(flatten_paragraph)
            .unwrap_or_default();
        let end = advance(cursor, repeat, COLUMNS_REPEATED)?;

        if !text.is_empty() {
            for column in cursor..end {
                decoded.insert(column, text.as_str())?;
            }
        }

        cursor = end;
        current = cell.next_same_name();
    }

    Ok(decoded)
}

/// Read a repeat-count attribute, defaulting to 1 when absent.
fn repeat_count(node: Node<'_>, attribute: &str, policy: RepeatPolicy) -> Result<usize> {
    let Some(raw) = node.attribute(attribute) else {
        return Ok(1);
    };
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::MalformedRepeatCount {
            attribute: attribute.to_string(),
            value: raw.to_string(),
        })?;
    policy.apply(attribute, value)
}

fn advance(cursor: usize, repeat: usize, attribute: &str) -> Result<usize> {
    cursor
        .checked_add(repeat)
        .ok_or_else(|| Error::MalformedRepeatCount {
            attribute: attribute.to_string(),
            value: repeat.to_string(),
        })
}
