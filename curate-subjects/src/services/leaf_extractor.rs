//! Leaf extraction from hierarchical subject strings
//!
//! Hierarchical subjects encode parent→child taxonomy levels joined by
//! `"::"`, e.g. `"Top::Mid::Leaf"`. Only the last node is of interest for
//! flat subject terms.

/// Separator between hierarchy levels
pub const HIERARCHY_SEPARATOR: &str = "::";

/// Extract the final node after the last `"::"` separator.
///
/// If the separator is absent, or nothing follows its last occurrence
/// (trailing separator), the whole value is returned instead. The result is
/// always trimmed of leading/trailing whitespace; internal whitespace is
/// preserved.
pub fn extract_leaf(value: &str) -> &str {
    match value.rfind(HIERARCHY_SEPARATOR) {
        Some(idx) if idx + HIERARCHY_SEPARATOR.len() < value.len() => {
            value[idx + HIERARCHY_SEPARATOR.len()..].trim()
        }
        _ => value.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_without_separator_is_trimmed_verbatim() {
        assert_eq!(extract_leaf("Biology"), "Biology");
        assert_eq!(extract_leaf("  Biology  "), "Biology");
        assert_eq!(extract_leaf(""), "");
        assert_eq!(extract_leaf("   "), "");
    }

    #[test]
    fn last_node_is_extracted() {
        assert_eq!(extract_leaf("Top::Leaf"), "Leaf");
        assert_eq!(extract_leaf("Top::Mid::Leaf"), "Leaf");
        assert_eq!(extract_leaf("A::B::C"), "C");
    }

    #[test]
    fn only_last_separator_matters() {
        assert_eq!(extract_leaf("A::B::C::D"), "D");
    }

    #[test]
    fn trailing_separator_falls_back_to_whole_value() {
        assert_eq!(extract_leaf("A::"), "A::");
        assert_eq!(extract_leaf("A::B::"), "A::B::");
    }

    #[test]
    fn leaf_whitespace_is_trimmed_but_internal_preserved() {
        assert_eq!(extract_leaf("Top:: Physical Sciences "), "Physical Sciences");
        assert_eq!(extract_leaf("Top::Leaf  Node"), "Leaf  Node");
    }

    #[test]
    fn single_colon_is_not_a_separator() {
        assert_eq!(extract_leaf("Top:Leaf"), "Top:Leaf");
    }

    #[test]
    fn separator_followed_by_whitespace_yields_empty_leaf() {
        // At least one character does follow the separator, so the tail is
        // taken and trimmed down to nothing; the whole-value fallback only
        // applies when the separator ends the string.
        assert_eq!(extract_leaf("A:: "), "");
        assert_eq!(extract_leaf("  A::  "), "");
    }
}
