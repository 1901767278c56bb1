//! XML codec for theme documents.
//!
//! Event-based parse and serialize built on `quick-xml`, preserving node
//! order, attributes, comments, and the XML declaration. Output is indented
//! with four spaces, mirroring how the hand-authored theme files are
//! formatted.
//!
//! This is the one place that knows which element name designates a color
//! entry ([`COLOR_TAG`]); everywhere else color entries are just
//! [`Node::ColorLeaf`].

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::{AttrMap, ColorLeaf, Document, Element, Node, XmlDeclaration};
use crate::error::DocumentError;

/// Element name that marks a color entry in theme markup.
pub const COLOR_TAG: &str = "Color";

const INDENT_CHAR: u8 = b' ';
const INDENT_SIZE: usize = 4;

/// Parses markup into a [`Document`] tree.
pub fn parse_document(markup: &str) -> Result<Document, DocumentError> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().trim_text(true);

    let mut document = Document::default();
    let mut open: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Decl(decl) => document.declaration = Some(read_declaration(&decl)?),
            Event::Start(start) => {
                let name = tag_name(&start)?;
                let attributes = read_attributes(&start)?;
                if name == COLOR_TAG {
                    let value = read_color_text(&mut reader)?;
                    let leaf = Node::ColorLeaf(ColorLeaf::new(attributes, value));
                    push_node(&mut document, &mut open, leaf);
                } else {
                    open.push(Element {
                        name,
                        attributes,
                        children: Vec::new(),
                    });
                }
            }
            Event::Empty(start) => {
                let name = tag_name(&start)?;
                let attributes = read_attributes(&start)?;
                let node = if name == COLOR_TAG {
                    Node::ColorLeaf(ColorLeaf::new(attributes, ""))
                } else {
                    Node::Element(Element {
                        name,
                        attributes,
                        children: Vec::new(),
                    })
                };
                push_node(&mut document, &mut open, node);
            }
            Event::End(end) => {
                let element = open.pop().ok_or_else(|| {
                    DocumentError::UnmatchedClosingTag(
                        String::from_utf8_lossy(end.name().as_ref()).into_owned(),
                    )
                })?;
                push_node(&mut document, &mut open, Node::Element(element));
            }
            Event::Text(text) => {
                let node = Node::Text(text.unescape()?.into_owned());
                push_node(&mut document, &mut open, node);
            }
            Event::CData(data) => {
                let node = Node::Text(std::str::from_utf8(&data)?.to_string());
                push_node(&mut document, &mut open, node);
            }
            Event::Comment(comment) => {
                let node = Node::Comment(std::str::from_utf8(&comment)?.to_string());
                push_node(&mut document, &mut open, node);
            }
            Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(unclosed) = open.pop() {
        return Err(DocumentError::UnexpectedEndOfDocument(unclosed.name));
    }
    Ok(document)
}

/// Serializes a [`Document`] back to indented markup.
pub fn write_document(document: &Document) -> Result<String, DocumentError> {
    let mut writer = Writer::new_with_indent(Vec::new(), INDENT_CHAR, INDENT_SIZE);
    if let Some(decl) = &document.declaration {
        writer.write_event(Event::Decl(BytesDecl::new(
            &decl.version,
            decl.encoding.as_deref(),
            decl.standalone.as_deref(),
        )))?;
    }
    for node in &document.nodes {
        write_node(&mut writer, node)?;
    }
    Ok(String::from_utf8(writer.into_inner())?)
}

fn tag_name(start: &BytesStart) -> Result<String, DocumentError> {
    Ok(std::str::from_utf8(start.name().as_ref())?.to_string())
}

fn read_attributes(start: &BytesStart) -> Result<AttrMap, DocumentError> {
    let mut attributes = AttrMap::new();
    for attr in start.attributes() {
        let attr = attr?;
        let name = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        attributes.insert(name, value);
    }
    Ok(attributes)
}

/// Consumes events up to the color entry's closing tag, collecting its
/// text value. Child elements inside a color entry are a hard error.
fn read_color_text(reader: &mut Reader<&[u8]>) -> Result<String, DocumentError> {
    let mut value = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(text) => value.push_str(&text.unescape()?),
            Event::CData(data) => value.push_str(std::str::from_utf8(&data)?),
            Event::Comment(_) => {}
            Event::Start(_) | Event::Empty(_) => {
                return Err(DocumentError::ColorLeafWithChildren(COLOR_TAG.to_string()))
            }
            Event::End(_) => return Ok(value),
            Event::Eof => {
                return Err(DocumentError::UnexpectedEndOfDocument(COLOR_TAG.to_string()))
            }
            _ => {}
        }
    }
}

fn read_declaration(decl: &BytesDecl) -> Result<XmlDeclaration, DocumentError> {
    let version = std::str::from_utf8(&decl.version()?)?.to_string();
    let encoding = match decl.encoding() {
        Some(encoding) => Some(std::str::from_utf8(&encoding?)?.to_string()),
        None => None,
    };
    let standalone = match decl.standalone() {
        Some(standalone) => Some(std::str::from_utf8(&standalone?)?.to_string()),
        None => None,
    };
    Ok(XmlDeclaration {
        version,
        encoding,
        standalone,
    })
}

fn push_node(document: &mut Document, open: &mut [Element], node: Node) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => document.nodes.push(node),
    }
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<(), DocumentError> {
    match node {
        Node::Element(element) => {
            let start = start_tag(&element.name, &element.attributes);
            if element.children.is_empty() {
                writer.write_event(Event::Empty(start))?;
            } else {
                writer.write_event(Event::Start(start))?;
                for child in &element.children {
                    write_node(writer, child)?;
                }
                writer.write_event(Event::End(BytesEnd::new(&element.name)))?;
            }
        }
        Node::ColorLeaf(leaf) => {
            writer.write_event(Event::Start(start_tag(COLOR_TAG, &leaf.attributes)))?;
            writer.write_event(Event::Text(BytesText::new(&leaf.value)))?;
            writer.write_event(Event::End(BytesEnd::new(COLOR_TAG)))?;
        }
        Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        Node::Comment(comment) => {
            writer.write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))?
        }
    }
    Ok(())
}

fn start_tag<'a>(name: &'a str, attributes: &'a AttrMap) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for (attr_name, value) in attributes.iter() {
        start.push_attribute((attr_name, value));
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<ResourceDictionary xmlns:x="ns">
    <!-- window chrome -->
    <Color x:Key="WindowBackground">#FFFFFF</Color>
    <SolidColorBrush x:Key="WindowBrush"/>
    <Group>
        <Color x:Key="PanelBackground" Opacity="0.5">#F5F5F5</Color>
    </Group>
</ResourceDictionary>"#;

    // =========================================================================
    // parsing
    // =========================================================================

    #[test]
    fn test_parse_structure() {
        let document = parse_document(SAMPLE).unwrap();
        assert_eq!(document.nodes.len(), 1);

        let root = match &document.nodes[0] {
            Node::Element(element) => element,
            other => panic!("expected root element, got {:?}", other),
        };
        assert_eq!(root.name, "ResourceDictionary");
        assert_eq!(root.attributes.get("xmlns:x"), Some("ns"));
        assert_eq!(root.children.len(), 4);

        assert!(matches!(&root.children[0], Node::Comment(c) if c.contains("window chrome")));

        let leaf = match &root.children[1] {
            Node::ColorLeaf(leaf) => leaf,
            other => panic!("expected color leaf, got {:?}", other),
        };
        assert_eq!(leaf.attributes.get("x:Key"), Some("WindowBackground"));
        assert_eq!(leaf.value, "#FFFFFF");

        assert!(matches!(&root.children[2], Node::Element(e) if e.name == "SolidColorBrush"));
    }

    #[test]
    fn test_parse_nested_color_attributes() {
        let document = parse_document(SAMPLE).unwrap();
        let root = match &document.nodes[0] {
            Node::Element(element) => element,
            _ => unreachable!(),
        };
        let group = match &root.children[3] {
            Node::Element(element) => element,
            other => panic!("expected group element, got {:?}", other),
        };
        let leaf = match &group.children[0] {
            Node::ColorLeaf(leaf) => leaf,
            other => panic!("expected color leaf, got {:?}", other),
        };
        assert_eq!(leaf.attributes.get("x:Key"), Some("PanelBackground"));
        assert_eq!(leaf.attributes.get("Opacity"), Some("0.5"));
        assert_eq!(leaf.value, "#F5F5F5");
    }

    #[test]
    fn test_parse_self_closing_color() {
        let document = parse_document(r#"<Theme><Color x:Key="Empty"/></Theme>"#).unwrap();
        let root = match &document.nodes[0] {
            Node::Element(element) => element,
            _ => unreachable!(),
        };
        assert!(matches!(&root.children[0], Node::ColorLeaf(leaf) if leaf.value.is_empty()));
    }

    #[test]
    fn test_parse_declaration() {
        let markup = "<?xml version=\"1.0\" encoding=\"utf-8\"?><Theme/>";
        let document = parse_document(markup).unwrap();
        let decl = document.declaration.as_ref().unwrap();
        assert_eq!(decl.version, "1.0");
        assert_eq!(decl.encoding.as_deref(), Some("utf-8"));
        assert_eq!(decl.standalone, None);
    }

    #[test]
    fn test_color_with_child_elements_is_an_error() {
        let result = parse_document(r#"<Theme><Color x:Key="Bad"><Inner/></Color></Theme>"#);
        assert!(matches!(
            result,
            Err(DocumentError::ColorLeafWithChildren(_))
        ));
    }

    #[test]
    fn test_truncated_document_is_an_error() {
        assert!(parse_document("<Theme><Group>").is_err());
    }

    // =========================================================================
    // serialization
    // =========================================================================

    #[test]
    fn test_round_trip_is_stable() {
        let document = parse_document(SAMPLE).unwrap();
        let serialized = document.to_xml().unwrap();
        let reparsed = parse_document(&serialized).unwrap();
        assert_eq!(reparsed, document);
    }

    #[test]
    fn test_serialize_keeps_color_text_and_attributes() {
        let document = parse_document(SAMPLE).unwrap();
        let serialized = document.to_xml().unwrap();
        assert!(serialized.contains(r#"<Color x:Key="WindowBackground">#FFFFFF</Color>"#));
        assert!(serialized.contains("<!-- window chrome -->"));
    }

    #[test]
    fn test_serialize_keeps_declaration() {
        let markup = "<?xml version=\"1.0\" encoding=\"utf-8\"?><Theme/>";
        let document = parse_document(markup).unwrap();
        let serialized = document.to_xml().unwrap();
        assert!(serialized.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    }

    #[test]
    fn test_text_escaping_round_trips() {
        let markup = "<Theme><Label>a &amp; b</Label></Theme>";
        let document = parse_document(markup).unwrap();
        let serialized = document.to_xml().unwrap();
        assert!(serialized.contains("a &amp; b"));
        assert_eq!(parse_document(&serialized).unwrap(), document);
    }
}
