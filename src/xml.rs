//! Read-only XML tree built from `quick-xml` events.
//!
//! The decoder needs sibling navigation by element name and a way to tell
//! text nodes from elements, so the event stream is materialized into a
//! small arena. Nodes are addressed through the borrowed [`Node`] view and
//! can never outlive the [`XmlDocument`] they come from.
//!
//! Element and attribute names are kept qualified (`table:table-cell`);
//! OpenDocument uses fixed prefixes, so no namespace resolution is done.

use crate::container::decode_xml_bytes;
use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};

#[derive(Debug)]
enum NodeKind {
    Document,
    Element {
        name: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    first_child: Option<usize>,
    last_child: Option<usize>,
    next_sibling: Option<usize>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }
}

/// A parsed XML document.
#[derive(Debug)]
pub struct XmlDocument {
    nodes: Vec<NodeData>,
}

impl XmlDocument {
    /// Parse raw bytes (UTF-8, optional BOM).
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self> {
        let xml = decode_xml_bytes(bytes)?;
        Self::parse(&xml)
    }

    /// Parse an XML string.
    ///
    /// Whitespace-only text is dropped; comments, processing instructions
    /// and the declaration are skipped. CDATA sections become text nodes.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut doc = XmlDocument {
            nodes: vec![NodeData::new(NodeKind::Document)],
        };
        let mut reader = quick_xml::Reader::from_str(xml);
        let mut stack: Vec<usize> = vec![0];

        loop {
            let parent = stack.last().copied().unwrap_or(0);
            match reader.read_event()? {
                Event::Start(ref e) => {
                    let id = doc.append(parent, element_kind(e)?);
                    stack.push(id);
                }
                Event::Empty(ref e) => {
                    doc.append(parent, element_kind(e)?);
                }
                Event::End(ref e) => {
                    if stack.len() <= 1 {
                        return Err(Error::XmlParse(format!(
                            "unexpected closing tag </{}>",
                            String::from_utf8_lossy(e.name().as_ref())
                        )));
                    }
                    stack.pop();
                }
                Event::Text(ref e) => {
                    let text = e.unescape()?;
                    if !text.trim().is_empty() {
                        doc.append(parent, NodeKind::Text(text.into_owned()));
                    }
                }
                Event::CData(e) => {
                    let bytes = e.into_inner();
                    let text = std::str::from_utf8(&bytes)
                        .map_err(|e| Error::XmlParse(e.to_string()))?;
                    if !text.is_empty() {
                        doc.append(parent, NodeKind::Text(text.to_string()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(&open) = stack.get(1) {
            let name = doc.node(open).name().unwrap_or_default().to_string();
            return Err(Error::XmlParse(format!("unclosed element <{}>", name)));
        }
        if doc.root_element().is_none() {
            return Err(Error::XmlParse("document has no root element".to_string()));
        }

        Ok(doc)
    }

    /// The document node; its children are the top-level nodes.
    pub fn root(&self) -> Node<'_> {
        self.node(0)
    }

    /// The single top-level element.
    pub fn root_element(&self) -> Option<Node<'_>> {
        self.root().children().find(|n| n.is_element())
    }

    /// Total number of nodes, the document node included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A parsed document always has at least the document node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: usize) -> Node<'_> {
        Node { doc: self, id }
    }

    fn append(&mut self, parent: usize, kind: NodeKind) -> usize {
        let id = self.nodes.len();
        self.nodes.push(NodeData::new(kind));
        match self.nodes[parent].last_child {
            Some(prev) => self.nodes[prev].next_sibling = Some(id),
            None => self.nodes[parent].first_child = Some(id),
        }
        self.nodes[parent].last_child = Some(id);
        id
    }
}

fn element_kind(e: &BytesStart<'_>) -> Result<NodeKind> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|err| Error::XmlParse(err.to_string()))?
        .to_string();

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| Error::XmlParse(err.to_string()))?
            .to_string();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    Ok(NodeKind::Element { name, attributes })
}

/// Borrowed view of one node in an [`XmlDocument`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    doc: &'a XmlDocument,
    id: usize,
}

impl<'a> Node<'a> {
    fn data(&self) -> &'a NodeData {
        &self.doc.nodes[self.id]
    }

    /// Qualified element name; `None` for text and document nodes.
    pub fn name(&self) -> Option<&'a str> {
        match &self.data().kind {
            NodeKind::Element { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.data().kind, NodeKind::Element { .. })
    }

    /// Check whether this is an element with the given qualified name.
    pub fn has_name(&self, name: &str) -> bool {
        self.name() == Some(name)
    }

    pub fn is_text(&self) -> bool {
        matches!(self.data().kind, NodeKind::Text(_))
    }

    /// Text content of a text node; `None` for any other node kind.
    pub fn text(&self) -> Option<&'a str> {
        match &self.data().kind {
            NodeKind::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Attribute value by qualified name.
    ///
    /// `None` means the attribute is absent; a present but empty attribute
    /// yields `Some("")`.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        match &self.data().kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    pub fn first_child(&self) -> Option<Node<'a>> {
        self.data().first_child.map(|id| self.doc.node(id))
    }

    pub fn next_sibling(&self) -> Option<Node<'a>> {
        self.data().next_sibling.map(|id| self.doc.node(id))
    }

    /// Iterate over all child nodes in document order.
    pub fn children(&self) -> Children<'a> {
        Children {
            next: self.first_child(),
        }
    }

    /// First child element with the given name.
    pub fn first_child_element(&self, name: &str) -> Option<Node<'a>> {
        self.children().find(|n| n.has_name(name))
    }

    /// Next sibling element with the given name.
    pub fn next_sibling_element(&self, name: &str) -> Option<Node<'a>> {
        let mut current = self.next_sibling();
        while let Some(node) = current {
            if node.has_name(name) {
                return Some(node);
            }
            current = node.next_sibling();
        }
        None
    }

    /// Next sibling element sharing this element's name.
    pub fn next_same_name(&self) -> Option<Node<'a>> {
        self.next_sibling_element(self.name()?)
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.data().kind {
            NodeKind::Document => f.write_str("Document"),
            NodeKind::Element { name, .. } => write!(f, "Element({})", name),
            NodeKind::Text(text) => write!(f, "Text({:?})", text),
        }
    }
}

/// Iterator over the children of a [`Node`].
pub struct Children<'a> {
    next: Option<Node<'a>>,
}

impl<'a> Iterator for Children<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next_sibling();
        Some(current)
    }
}
