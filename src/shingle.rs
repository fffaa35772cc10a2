//! Character shingles used as similarity fingerprints.

use std::collections::BTreeSet;

/// Default shingle length.
pub const DEFAULT_SHINGLE_LEN: usize = 2;
/// Default distance between consecutive shingle starts.
pub const DEFAULT_SHINGLE_STRIDE: usize = 1;

/// Lower-case `text` and collect its length-`len` character windows,
/// starting every `stride` characters.
///
/// Texts shorter than `len` give an empty set. A zero `len` or `stride`
/// also gives an empty set; configuration validation rejects both before
/// the pipeline runs.
///
/// ```
/// use coref::shingle::shingles;
///
/// let s = shingles("SVM", 2, 1);
/// assert_eq!(s.into_iter().collect::<Vec<_>>(), vec!["sv", "vm"]);
/// ```
pub fn shingles(text: &str, len: usize, stride: usize) -> BTreeSet<String> {
    if len == 0 || stride == 0 {
        return BTreeSet::new();
    }
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    if chars.len() < len {
        return BTreeSet::new();
    }
    (0..=chars.len() - len)
        .step_by(stride)
        .map(|i| chars[i..i + len].iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(s: BTreeSet<String>) -> Vec<String> {
        s.into_iter().collect()
    }

    #[test]
    fn test_bigrams() {
        assert_eq!(sorted(shingles("Apple", 2, 1)), vec!["ap", "le", "pl", "pp"]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(shingles("Neural Network", 2, 1), shingles("neural network", 2, 1));
    }

    #[test]
    fn test_short_text_is_empty() {
        assert!(shingles("a", 2, 1).is_empty());
        assert!(shingles("", 2, 1).is_empty());
        assert_eq!(sorted(shingles("ab", 2, 1)), vec!["ab"]);
    }

    #[test]
    fn test_stride() {
        assert_eq!(sorted(shingles("abcdef", 2, 2)), vec!["ab", "cd", "ef"]);
        assert_eq!(sorted(shingles("abcde", 2, 2)), vec!["ab", "cd"]);
        assert_eq!(sorted(shingles("abcde", 3, 1)), vec!["abc", "bcd", "cde"]);
    }

    #[test]
    fn test_unicode_windows_are_characters() {
        assert_eq!(sorted(shingles("Café", 2, 1)), vec!["af", "ca", "fé"]);
    }

    #[test]
    fn test_degenerate_parameters() {
        assert!(shingles("abc", 0, 1).is_empty());
        assert!(shingles("abc", 2, 0).is_empty());
    }
}
