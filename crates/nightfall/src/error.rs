//! Error types for document parsing and serialization.

use thiserror::Error;

/// Error type for markup parse/serialize operations.
///
/// Color handling never produces errors: malformed color strings degrade to
/// `NaN` channels and fallback values instead (see [`crate::color`]). Only a
/// structurally broken document is fatal.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Malformed markup reported by the underlying XML reader/writer.
    #[error("malformed markup: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An attribute that could not be tokenized.
    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Non-UTF-8 bytes in element names or content.
    #[error("document is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Serialized output was not valid UTF-8 (writer invariant violation).
    #[error("serialized document is not valid UTF-8: {0}")]
    OutputUtf8(#[from] std::string::FromUtf8Error),

    /// A color entry must hold only its text value.
    #[error("<{0}> color entry contains child elements")]
    ColorLeafWithChildren(String),

    /// A closing tag appeared with no element open.
    #[error("closing tag </{0}> has no matching opening tag")]
    UnmatchedClosingTag(String),

    /// The document ended while an element was still open.
    #[error("document ended inside <{0}>")]
    UnexpectedEndOfDocument(String),
}
