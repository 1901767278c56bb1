//! Generic ordered document tree.
//!
//! Theme documents are markup files; the pipeline only cares about three
//! structural facts, which the [`Node`] variants make explicit:
//!
//! - elements are named, ordered, and carry attributes,
//! - a color entry is a leaf holding identity attributes plus a text value,
//! - everything else (free text, comments) just needs to survive a
//!   round trip.
//!
//! Which element name designates a color entry is decided once, in the
//! parser ([`xml`]); the rest of the crate never inspects element names.

pub mod xml;

use crate::error::DocumentError;

/// Insertion-ordered attribute mapping.
///
/// Attribute order is preserved so re-serialized markup stays close to its
/// source. Lookups are linear; theme nodes carry a handful of attributes at
/// most.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrMap {
    entries: Vec<(String, String)>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any existing value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One-directional identity equality: every attribute here must be
    /// present with an equal value in `other`; extra attributes on `other`
    /// are ignored.
    ///
    /// This asymmetry is what lets override swatches carry a superset of
    /// identity attributes while document nodes carry the canonical subset
    /// used for lookup. An empty map is a subset of everything.
    pub fn is_subset_of(&self, other: &AttrMap) -> bool {
        self.iter().all(|(name, value)| other.get(name) == Some(value))
    }

    /// Bidirectional identity equality: the same attribute names with the
    /// same values on both sides, regardless of order.
    pub fn same_identity(&self, other: &AttrMap) -> bool {
        self.is_subset_of(other) && other.is_subset_of(self)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for AttrMap {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut map = AttrMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// A single node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A named element with attributes and ordered children.
    Element(Element),
    /// A color entry: identity attributes plus a text color value.
    ColorLeaf(ColorLeaf),
    /// Free-standing text content.
    Text(String),
    /// A markup comment, preserved verbatim.
    Comment(String),
}

/// A named element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: AttrMap,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: AttrMap::new(),
            children: Vec::new(),
        }
    }
}

/// A color entry leaf: the only node kind the pipeline rewrites.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorLeaf {
    pub attributes: AttrMap,
    pub value: String,
}

impl ColorLeaf {
    pub fn new(attributes: AttrMap, value: impl Into<String>) -> Self {
        Self {
            attributes,
            value: value.into(),
        }
    }
}

/// A parsed theme document: optional XML declaration plus top-level nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub declaration: Option<XmlDeclaration>,
    pub nodes: Vec<Node>,
}

/// The pieces of an `<?xml ...?>` declaration, preserved for round trips.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDeclaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

impl Document {
    /// Parses a markup string into a document tree.
    pub fn parse(markup: &str) -> Result<Self, DocumentError> {
        xml::parse_document(markup)
    }

    /// Serializes the tree back to indented markup.
    pub fn to_xml(&self) -> Result<String, DocumentError> {
        xml::write_document(self)
    }
}
