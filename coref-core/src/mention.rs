//! Entity mentions: located spans of text that refer to some entity.
//!
//! A [`Mention`] is a value type. Two mentions are the same mention exactly
//! when document id, start offset, text and class all agree, which is what
//! lets the clustering pipeline use mentions directly as graph nodes and map
//! keys. Fields are private; a mention never changes after construction.
//!
//! Offsets are **character** offsets into the parent document, not byte
//! offsets.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Semantic category of a mention.
///
/// Opaque to clustering: carried through unchanged and inherited by any
/// mention derived from it. Serialized upper-case; deserialized through
/// [`FromStr`], so any casing is accepted on input.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum MentionClass {
    /// No class assigned.
    #[default]
    None,
    /// Organization.
    Org,
    /// Method, technique or algorithm.
    Method,
    /// Product.
    Product,
}

impl MentionClass {
    /// Canonical upper-case name, as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            MentionClass::None => "NONE",
            MentionClass::Org => "ORG",
            MentionClass::Method => "METHOD",
            MentionClass::Product => "PRODUCT",
        }
    }
}

impl fmt::Display for MentionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MentionClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(MentionClass::None),
            "org" | "organization" => Ok(MentionClass::Org),
            "method" => Ok(MentionClass::Method),
            "product" => Ok(MentionClass::Product),
            other => Err(Error::parse(format!("unknown mention class '{other}'"))),
        }
    }
}

impl TryFrom<String> for MentionClass {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A mention located in a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mention {
    parent_doc_id: u64,
    start: usize,
    text: String,
    #[serde(default)]
    class: MentionClass,
}

impl Mention {
    /// Create a mention starting at character offset `start` of document
    /// `parent_doc_id`.
    pub fn new(
        parent_doc_id: u64,
        start: usize,
        text: impl Into<String>,
        class: MentionClass,
    ) -> Self {
        Self {
            parent_doc_id,
            start,
            text: text.into(),
            class,
        }
    }

    /// Identifier of the document the mention was found in.
    pub fn parent_doc_id(&self) -> u64 {
        self.parent_doc_id
    }

    /// Character offset of the first character.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Literal mention text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Semantic class.
    pub fn class(&self) -> MentionClass {
        self.class
    }

    /// Character offset one past the last character, saturating at
    /// `usize::MAX`.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.text.chars().count())
    }

    /// `(start, end)` in characters.
    pub fn location(&self) -> (usize, usize) {
        (self.start, self.end())
    }
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// Text first so sorted clusters read alphabetically; the remaining fields
// keep the order total and consistent with `Eq`.
impl Ord for Mention {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text
            .cmp(&other.text)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.parent_doc_id.cmp(&other.parent_doc_id))
            .then_with(|| self.class.cmp(&other.class))
    }
}

impl PartialOrd for Mention {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
