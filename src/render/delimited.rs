//! Gap-preserving delimited text renderer.

use crate::error::{Error, Result};
use crate::model::{Row, Sheet, Workbook};
use std::io::Write;

use super::options::DelimitedOptions;

/// Render a workbook to a delimited string.
pub fn to_delimited(workbook: &Workbook, options: &DelimitedOptions) -> Result<String> {
    let mut buffer = Vec::new();
    write_delimited(workbook, options, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| Error::Render(e.to_string()))
}

/// Stream a workbook as delimited text, sheets in ascending name order.
pub fn write_delimited<W: Write + ?Sized>(
    workbook: &Workbook,
    options: &DelimitedOptions,
    out: &mut W,
) -> Result<()> {
    for (name, sheet) in workbook.sheets() {
        write_sheet(name, sheet, options, out)?;
    }
    Ok(())
}

/// Write one sheet between its marker lines.
///
/// Empty rows before a materialized row become blank lines and empty
/// columns before a cell become bare separators. Nothing is written for
/// empty rows or columns after the last materialized entry.
pub fn write_sheet<W: Write + ?Sized>(
    name: &str,
    sheet: &Sheet,
    options: &DelimitedOptions,
    out: &mut W,
) -> Result<()> {
    let row_separator = options.row_separator.as_bytes();

    out.write_all(options.sheet_start.as_bytes())?;
    out.write_all(name.as_bytes())?;
    out.write_all(row_separator)?;

    // First row index not yet covered by a written line.
    let mut next_row = 0;
    for (index, row) in sheet.rows() {
        for _ in next_row..index {
            out.write_all(row_separator)?;
        }
        write_row(row, options, out)?;
        out.write_all(row_separator)?;
        next_row = index + 1;
    }

    out.write_all(options.sheet_end.as_bytes())?;
    out.write_all(row_separator)?;
    Ok(())
}

fn write_row<W: Write + ?Sized>(row: &Row, options: &DelimitedOptions, out: &mut W) -> Result<()> {
    let column_separator = options.column_separator.as_bytes();

    let mut last_column = 0;
    for (column, text) in row.cells() {
        for _ in last_column..column {
            out.write_all(column_separator)?;
        }
        last_column = column;
        out.write_all(text.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(usize, &str)]) -> Row {
        let mut row = Row::new();
        for (col, text) in cells {
            row.insert(*col, *text).unwrap();
        }
        row
    }

    fn sheet(rows: Vec<(usize, Row)>) -> Sheet {
        let mut sheet = Sheet::new();
        for (index, row) in rows {
            sheet.insert(index, row).unwrap();
        }
        sheet
    }

    fn render(workbook: &Workbook) -> String {
        to_delimited(workbook, &DelimitedOptions::default()).unwrap()
    }

    #[test]
    fn test_gap_law() {
        let mut wb = Workbook::new();
        wb.insert(
            "S",
            sheet(vec![(0, row(&[(0, "a"), (1, "b")])), (2, row(&[(2, "c")]))]),
        )
        .unwrap();

        assert_eq!(render(&wb), "$NEW_SHEET,S\na,b\n\n,,c\n$END_SHEET\n");
    }

    #[test]
    fn test_leading_gaps() {
        let mut wb = Workbook::new();
        wb.insert("S", sheet(vec![(3, row(&[(1, "x")]))])).unwrap();

        assert_eq!(render(&wb), "$NEW_SHEET,S\n\n\n\n,x\n$END_SHEET\n");
    }

    #[test]
    fn test_column_zero_after_gap() {
        let mut wb = Workbook::new();
        wb.insert(
            "S",
            sheet(vec![(0, row(&[(0, "a"), (1, "b")])), (2, row(&[(0, "c")]))]),
        )
        .unwrap();

        assert_eq!(render(&wb), "$NEW_SHEET,S\na,b\n\nc\n$END_SHEET\n");
    }

    #[test]
    fn test_end_to_end_two_sheets() {
        let mut wb = Workbook::new();
        wb.insert("Sheet2", Sheet::new()).unwrap();
        wb.insert(
            "Sheet1",
            sheet(vec![(0, row(&[(0, "a"), (1, "b")])), (2, row(&[(2, "c")]))]),
        )
        .unwrap();

        assert_eq!(
            render(&wb),
            "$NEW_SHEET,Sheet1\na,b\n\n,,c\n$END_SHEET\n$NEW_SHEET,Sheet2\n$END_SHEET\n"
        );
    }

    #[test]
    fn test_no_escaping() {
        let mut wb = Workbook::new();
        wb.insert("S", sheet(vec![(0, row(&[(0, "1,5"), (1, "say \"hi\"")]))]))
            .unwrap();

        assert_eq!(render(&wb), "$NEW_SHEET,S\n1,5,say \"hi\"\n$END_SHEET\n");
    }

    #[test]
    fn test_custom_separators() {
        let mut wb = Workbook::new();
        wb.insert("S", sheet(vec![(0, row(&[(0, "a"), (2, "b")])), (1, row(&[(1, "c")]))]))
            .unwrap();

        let options = DelimitedOptions::new()
            .with_column_separator("\t")
            .with_row_separator("\r\n");
        assert_eq!(
            to_delimited(&wb, &options).unwrap(),
            "$NEW_SHEET,S\r\na\t\tb\r\n\tc\r\n$END_SHEET\r\n"
        );
    }

    #[test]
    fn test_empty_workbook() {
        assert_eq!(render(&Workbook::new()), "");
    }

    #[test]
    fn test_streams_into_writer() {
        let mut wb = Workbook::new();
        wb.insert("S", sheet(vec![(1, row(&[(0, "x")]))])).unwrap();

        let mut out: Vec<u8> = Vec::new();
        write_delimited(&wb, &DelimitedOptions::default(), &mut out).unwrap();
        assert_eq!(out, b"$NEW_SHEET,S\n\nx\n$END_SHEET\n");
    }
}
