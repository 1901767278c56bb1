//! Swatch extraction and override application.
//!
//! A [`Swatch`] is one named color entry lifted out of a document tree:
//! its identity attributes plus its text value. Extraction walks the whole
//! tree; application walks it again and rewrites matching color leaves in
//! place. Swatches themselves are never mutated — transformed values are
//! new records (see [`Swatch::with_value`]).

use crate::document::{AttrMap, Document, Node};

/// A single named color entry extracted from a theme document.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    /// Identity attributes: everything on the color node except its value.
    pub identity: AttrMap,
    /// The color text: a hex string or a named color.
    pub value: String,
}

impl Swatch {
    pub fn new(identity: AttrMap, value: impl Into<String>) -> Self {
        Self {
            identity,
            value: value.into(),
        }
    }

    /// A copy of this swatch with a different value.
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            identity: self.identity.clone(),
            value: value.into(),
        }
    }

    /// The identity key under the given attribute name, if present.
    pub fn key(&self, key_attribute: &str) -> Option<&str> {
        self.identity.get(key_attribute)
    }
}

/// Collects every color entry in document order, then keeps only swatches
/// whose identity key occurs more than once in the document.
///
/// Singleton keys are dropped, not rejected: a key used in a single place
/// has no cross-theme consistency to maintain. Swatches without the key
/// attribute group together under the absent key.
pub fn extract_swatches(document: &Document, key_attribute: &str) -> Vec<Swatch> {
    let mut swatches = Vec::new();
    collect(&document.nodes, &mut swatches);
    swatches
        .iter()
        .filter(|swatch| {
            let key = swatch.key(key_attribute);
            swatches
                .iter()
                .filter(|other| other.key(key_attribute) == key)
                .count()
                > 1
        })
        .cloned()
        .collect()
}

fn collect(nodes: &[Node], swatches: &mut Vec<Swatch>) {
    for node in nodes {
        match node {
            Node::ColorLeaf(leaf) => {
                swatches.push(Swatch::new(leaf.attributes.clone(), leaf.value.clone()))
            }
            Node::Element(element) => collect(&element.children, swatches),
            _ => {}
        }
    }
}

/// Rewrites every color leaf whose attributes match an override swatch,
/// returning the mutated tree for chaining.
///
/// Matching is one-directional ([`AttrMap::is_subset_of`]): every attribute
/// on the leaf must be equal in the override's identity; extra identity
/// attributes on the override are ignored. The first matching override in
/// list order wins. Leaves with no match are left unchanged.
pub fn apply_overrides(mut document: Document, overrides: &[Swatch]) -> Document {
    apply_to_nodes(&mut document.nodes, overrides);
    document
}

fn apply_to_nodes(nodes: &mut [Node], overrides: &[Swatch]) {
    for node in nodes {
        match node {
            Node::ColorLeaf(leaf) => {
                let matched = overrides
                    .iter()
                    .find(|swatch| leaf.attributes.is_subset_of(&swatch.identity));
                if let Some(swatch) = matched {
                    leaf.value = swatch.value.clone();
                }
            }
            Node::Element(element) => apply_to_nodes(&mut element.children, overrides),
            _ => {}
        }
    }
}
