//! Paragraph text flattening.

use super::TEXT_SPAN;
use crate::xml::Node;

/// Reduce a `text:p` element to plain text.
///
/// Direct text children are taken verbatim. A `text:span` contributes its
/// first child when that child is text, and nothing otherwise. Any other
/// child (`text:s`, `text:a`, line breaks, ...) is ignored, and spans nested
/// inside spans are not unwrapped.
pub fn flatten_paragraph(paragraph: Node<'_>) -> String {
    let mut output = String::new();

    for child in paragraph.children() {
        if let Some(text) = child.text() {
            output.push_str(text);
        } else if child.has_name(TEXT_SPAN) {
            if let Some(text) = child.first_child().and_then(|n| n.text()) {
                output.push_str(text);
            }
        }
    }

    output
}
