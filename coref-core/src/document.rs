//! Documents annotated with mentions by an upstream detector.

use serde::{Deserialize, Serialize};

use crate::mention::Mention;

/// A document together with the mentions detected in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    /// Document identifier.
    pub id: u64,
    /// Full document text.
    pub text: String,
    /// Mentions found in `text`.
    #[serde(default)]
    pub mentions: Vec<Mention>,
}

impl AnnotatedDocument {
    /// Create an annotated document.
    pub fn new(id: u64, text: impl Into<String>, mentions: Vec<Mention>) -> Self {
        Self {
            id,
            text: text.into(),
            mentions,
        }
    }

    /// Mentions whose character span does not reproduce their text, or that
    /// claim a different parent document.
    pub fn misaligned_mentions(&self) -> Vec<&Mention> {
        self.mentions
            .iter()
            .filter(|m| {
                m.parent_doc_id() != self.id
                    || char_slice(&self.text, m.start(), m.end()) != Some(m.text())
            })
            .collect()
    }

    /// True when every mention lines up with the document text.
    pub fn mention_text_matches(&self) -> bool {
        self.misaligned_mentions().is_empty()
    }
}

/// Slice `text` by character offsets. `None` when out of range.
pub fn char_slice(text: &str, start: usize, end: usize) -> Option<&str> {
    if start > end {
        return None;
    }
    let mut indices = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()));
    let byte_start = indices.nth(start)?;
    let byte_end = if end == start {
        byte_start
    } else {
        indices.nth(end - start - 1)?
    };
    text.get(byte_start..byte_end)
}
