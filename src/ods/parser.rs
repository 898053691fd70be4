//! ODS parser implementation.

use super::grid::decode_table;
use super::options::{DuplicateSheetPolicy, ParseOptions};
use super::{BODY, DOCUMENT_CONTENT, SPREADSHEET, TABLE, TABLE_NAME};
use crate::container::{OdfContainer, CONTENT_MEMBER};
use crate::error::{Error, Result};
use crate::model::{Sheet, Workbook};
use crate::xml::{Node, XmlDocument};
use std::path::Path;

/// Parser for ODS (OpenDocument spreadsheet) packages.
pub struct OdsParser {
    container: OdfContainer,
    options: ParseOptions,
}

impl OdsParser {
    /// Open an ODS file for parsing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = OdfContainer::open(path)?;
        Ok(Self::from_container(container))
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OdfContainer::from_bytes(data)?;
        Ok(Self::from_container(container))
    }

    /// Create a parser from a container.
    pub fn from_container(container: OdfContainer) -> Self {
        Self {
            container,
            options: ParseOptions::default(),
        }
    }

    /// Replace the decoding options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Decode every sheet into a workbook.
    pub fn parse(&self) -> Result<Workbook> {
        let content = self.container.read_member(CONTENT_MEMBER)?;
        parse_content(&content, &self.options)
    }

    /// Get a reference to the container.
    pub fn container(&self) -> &OdfContainer {
        &self.container
    }

    /// Get the decoding options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }
}

/// Decode raw `content.xml` bytes into a workbook.
pub fn parse_content(content: &[u8], options: &ParseOptions) -> Result<Workbook> {
    let doc = XmlDocument::parse_bytes(content)?;
    assemble_workbook(&doc, options)
}

/// Decode every `table:table` under
/// `office:document-content/office:body/office:spreadsheet`.
///
/// The tree is only borrowed; the workbook owns copies of all cell text.
pub fn assemble_workbook(doc: &XmlDocument, options: &ParseOptions) -> Result<Workbook> {
    let spreadsheet = [DOCUMENT_CONTENT, BODY, SPREADSHEET]
        .iter()
        .try_fold(doc.root(), |node, name| required_child(node, name))?;

    let mut workbook = Workbook::new();
    let mut current = Some(required_child(spreadsheet, TABLE)?);
    let mut index = 0;

    while let Some(table) = current {
        let name = table
            .attribute(TABLE_NAME)
            .ok_or(Error::MissingSheetName { index })?;
        let sheet = decode_table(table, options)?;
        log::debug!(
            "decoded sheet {:?}: {} rows, {} cells",
            name,
            sheet.row_count(),
            sheet.cell_count()
        );
        add_sheet(&mut workbook, name, sheet, options.duplicate_sheets)?;
        current = table.next_same_name();
        index += 1;
    }

    Ok(workbook)
}

fn required_child<'a>(node: Node<'a>, name: &str) -> Result<Node<'a>> {
    node.first_child_element(name)
        .ok_or_else(|| Error::RequiredElementMissing(name.to_string()))
}

fn add_sheet(
    workbook: &mut Workbook,
    name: &str,
    sheet: Sheet,
    policy: DuplicateSheetPolicy,
) -> Result<()> {
    match policy {
        DuplicateSheetPolicy::Fail => workbook.insert(name, sheet),
        DuplicateSheetPolicy::KeepFirst => {
            if workbook.contains(name) {
                log::warn!("skipping duplicate sheet {:?}", name);
                Ok(())
            } else {
                workbook.insert(name, sheet)
            }
        }
        DuplicateSheetPolicy::Replace => {
            if workbook.replace(name, sheet).is_some() {
                log::warn!("duplicate sheet {:?} replaced the earlier one", name);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(tables: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"
    xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0"
    xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0">
  <office:body>
    <office:spreadsheet>
      {}
    </office:spreadsheet>
  </office:body>
</office:document-content>"#,
            tables
        )
    }

    fn parse(xml: &str) -> Result<Workbook> {
        parse_content(xml.as_bytes(), &ParseOptions::default())
    }

    const ONE_CELL: &str = "<table:table-row><table:table-cell><text:p>v</text:p></table:table-cell></table:table-row>";

    #[test]
    fn test_assemble_sheets() {
        let xml = content(&format!(
            r#"<table:table table:name="Second">{row}</table:table>
<table:named-expressions/>
<table:table table:name="First"/>"#,
            row = ONE_CELL
        ));
        let workbook = parse(&xml).unwrap();

        assert_eq!(workbook.sheet_names(), vec!["First", "Second"]);
        assert!(workbook.sheet("First").unwrap().is_empty());
        assert_eq!(workbook.sheet("Second").unwrap().cell(0, 0), Some("v"));
    }

    #[test]
    fn test_missing_sheet_name() {
        let xml = content(&format!(
            r#"<table:table table:name="Ok">{row}</table:table><table:table>{row}</table:table>"#,
            row = ONE_CELL
        ));
        assert!(matches!(
            parse(&xml),
            Err(Error::MissingSheetName { index: 1 })
        ));
    }

    #[test]
    fn test_duplicate_sheet_name() {
        let xml = content(&format!(
            r#"<table:table table:name="A">{row}</table:table><table:table table:name="A"/>"#,
            row = ONE_CELL
        ));

        assert!(matches!(
            parse(&xml),
            Err(Error::DuplicateSheetName(ref name)) if name == "A"
        ));

        let keep = ParseOptions::new().with_duplicate_sheets(DuplicateSheetPolicy::KeepFirst);
        let workbook = parse_content(xml.as_bytes(), &keep).unwrap();
        assert_eq!(workbook.sheet("A").unwrap().cell_count(), 1);

        let replace = ParseOptions::new().with_duplicate_sheets(DuplicateSheetPolicy::Replace);
        let workbook = parse_content(xml.as_bytes(), &replace).unwrap();
        assert!(workbook.sheet("A").unwrap().is_empty());
    }

    #[test]
    fn test_required_elements() {
        let err = parse("<office:document-content/>").unwrap_err();
        assert!(matches!(err, Error::RequiredElementMissing(ref e) if e == "office:body"));

        let err = parse("<office:document-content><office:body/></office:document-content>")
            .unwrap_err();
        assert!(matches!(err, Error::RequiredElementMissing(ref e) if e == "office:spreadsheet"));

        let err = parse("<office:document/>").unwrap_err();
        assert!(
            matches!(err, Error::RequiredElementMissing(ref e) if e == "office:document-content")
        );

        let err = parse(&content("")).unwrap_err();
        assert!(matches!(err, Error::RequiredElementMissing(ref e) if e == "table:table"));
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(
            parse("<office:document-content><office:body>"),
            Err(Error::XmlParse(_))
        ));
    }
}
