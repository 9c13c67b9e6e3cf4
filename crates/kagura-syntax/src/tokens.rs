//! Pattern token classification shared across the matcher.
//!
//! The pattern mini-language reserves `$`-prefixed identifier tokens: a
//! `$NAME` identifier is a placeholder, and the fixed `$$$` marker is the
//! sibling wildcard.  Both are ordinary identifiers to the grammar, so the
//! distinction lives here rather than in the parse tree.

/// The reserved wildcard marker matching zero or more sibling nodes.
pub(crate) const WILDCARD_TOKEN: &str = "$$$";

/// The sigil introducing a placeholder token.
pub(crate) const PLACEHOLDER_SIGIL: char = '$';

/// Returns `true` if `text` is the wildcard marker.
#[must_use]
pub(crate) fn is_wildcard_text(text: &str) -> bool {
    text.trim() == WILDCARD_TOKEN
}

/// Returns `true` if a node with the given (normalised) kind and text is a
/// placeholder token.
#[must_use]
pub(crate) fn is_placeholder(kind: &str, text: &str) -> bool {
    normalise_kind(kind) == "identifier"
        && text.starts_with(PLACEHOLDER_SIGIL)
        && !is_wildcard_text(text)
}

/// Returns `true` if the node kind is a statement separator.
///
/// Separators are never structurally significant: they are skipped on both
/// the source and pattern side and never consume a wildcard or placeholder.
#[must_use]
pub(crate) fn is_separator_kind(kind: &str) -> bool {
    kind == ";"
}

/// Normalises a node kind for comparison.
///
/// A property name leaf is comparable to an ordinary identifier, so an
/// identifier pattern can match a property name and vice versa.
#[must_use]
pub(crate) fn normalise_kind(kind: &str) -> &str {
    if kind == "property_identifier" {
        "identifier"
    } else {
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("$$$", true)]
    #[case(" $$$ ", true)]
    #[case("$$", false)]
    #[case("$X", false)]
    fn wildcard_detection(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_wildcard_text(text), expected);
    }

    #[rstest]
    #[case("identifier", "$X", true)]
    #[case("property_identifier", "$Y", true)]
    #[case("identifier", "x", false)]
    #[case("identifier", "$$$", false)]
    #[case("string", "$X", false)]
    fn placeholder_detection(#[case] kind: &str, #[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_placeholder(kind, text), expected);
    }

    #[test]
    fn property_identifier_normalises_to_identifier() {
        assert_eq!(normalise_kind("property_identifier"), "identifier");
        assert_eq!(normalise_kind("call_expression"), "call_expression");
    }

    #[test]
    fn semicolon_is_a_separator() {
        assert!(is_separator_kind(";"));
        assert!(!is_separator_kind(","));
    }
}
