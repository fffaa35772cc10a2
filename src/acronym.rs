//! Acronym expansion: `Full Name (ACRONYM)`.
//!
//! A mention such as `"Support Vector Machine (SVM)"` names the same entity
//! three ways: the whole span, the full name and the acronym. The matcher
//! recognises, anchored at the start of the text:
//!
//! ```text
//! <full: any chars except '('> ' ' '(' <acronym: 2..=10 of [A-Za-z0-9-]> ')'
//! ```
//!
//! Anything may follow the closing parenthesis. Only the first occurrence is
//! considered: because the full-name segment cannot contain `(`, the opening
//! parenthesis of a match is always the first `(` in the text.

use coref_core::Mention;

const MIN_ACRONYM_LEN: usize = 2;
const MAX_ACRONYM_LEN: usize = 10;

/// A successful acronym match. Offsets are in characters, relative to the
/// start of the matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcronymMatch<'a> {
    /// Text before ` (`; may be empty.
    pub full: &'a str,
    /// Character offset of `full`.
    pub full_offset: usize,
    /// Text between the parentheses.
    pub acronym: &'a str,
    /// Character offset of `acronym`.
    pub acronym_offset: usize,
}

fn is_acronym_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Match the acronym pattern at the start of `text`.
///
/// Returns `None` when the text does not have the shape; that is the normal
/// outcome for most mentions, not an error.
pub fn find_acronym(text: &str) -> Option<AcronymMatch<'_>> {
    let bytes = text.as_bytes();
    let open = text.find('(')?;
    if open == 0 || bytes[open - 1] != b' ' {
        return None;
    }

    let body_start = open + 1;
    let run = bytes[body_start..]
        .iter()
        .take_while(|&&b| is_acronym_byte(b))
        .count();
    if !(MIN_ACRONYM_LEN..=MAX_ACRONYM_LEN).contains(&run) {
        return None;
    }
    let close = body_start + run;
    if bytes.get(close) != Some(&b')') {
        return None;
    }

    Some(AcronymMatch {
        full: &text[..open - 1],
        full_offset: 0,
        acronym: &text[body_start..close],
        acronym_offset: text[..body_start].chars().count(),
    })
}

/// Split a mention into its full-name and acronym mentions.
///
/// The derived mentions keep the parent document and class of `mention`,
/// and their starts are shifted by the match offsets so they still point
/// into the parent document. Returns `None` when a shifted start would
/// overflow `usize`.
pub fn split(mention: &Mention) -> Option<(Mention, Mention)> {
    let m = find_acronym(mention.text())?;
    let full = Mention::new(
        mention.parent_doc_id(),
        mention.start().checked_add(m.full_offset)?,
        m.full,
        mention.class(),
    );
    let acronym = Mention::new(
        mention.parent_doc_id(),
        mention.start().checked_add(m.acronym_offset)?,
        m.acronym,
        mention.class(),
    );
    Some((full, acronym))
}
