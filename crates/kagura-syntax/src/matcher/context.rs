//! Matching context shared across recursive comparisons.

/// Borrowed source texts for resolving node byte ranges on either side of
/// the comparison.
pub(super) struct MatchContext<'a, 'p> {
    pub(super) source: &'a str,
    pub(super) pattern_source: &'p str,
}

impl<'a, 'p> MatchContext<'a, 'p> {
    pub(super) const fn new(source: &'a str, pattern_source: &'p str) -> Self {
        Self {
            source,
            pattern_source,
        }
    }

    /// Returns the source text covered by `node`.
    pub(super) fn source_text(&self, node: tree_sitter::Node<'_>) -> &'a str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    /// Returns the pattern text covered by `node`.
    pub(super) fn pattern_text(&self, node: tree_sitter::Node<'_>) -> &'p str {
        self.pattern_source.get(node.byte_range()).unwrap_or_default()
    }
}
