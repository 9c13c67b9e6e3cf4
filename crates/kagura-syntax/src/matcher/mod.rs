//! Structural matcher for finding pattern occurrences.
//!
//! The matcher compares a compiled [`Pattern`] against every structurally
//! plausible subtree of a parsed source, yielding matches alongside the
//! placeholder bindings captured on the way.

mod context;
mod matching;
mod member;

use std::ops::Range;

use kagura_core::{Bindings, Span};

use crate::parser::ParseResult;
use crate::pattern::Pattern;
use crate::position::node_span;

/// Result of a successful pattern match.
#[derive(Debug)]
pub struct PatternMatch<'a> {
    node: tree_sitter::Node<'a>,
    source: &'a str,
    bindings: Bindings,
}

impl<'a> PatternMatch<'a> {
    /// Returns the matched AST node.
    #[must_use]
    pub const fn node(&self) -> tree_sitter::Node<'a> {
        self.node
    }

    /// Returns the byte range of the match in the source.
    #[must_use]
    pub fn byte_range(&self) -> Range<usize> {
        self.node.byte_range()
    }

    /// Returns the literal text of the matched region.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.source.get(self.byte_range()).unwrap_or_default()
    }

    /// Returns the span of the match with one-based line/column positions.
    #[must_use]
    pub fn span(&self) -> Span {
        node_span(self.node)
    }

    /// Returns the captured placeholder bindings.
    #[must_use]
    pub const fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Consumes the match, returning its bindings.
    #[must_use]
    pub fn into_bindings(self) -> Bindings {
        self.bindings
    }
}

/// Pattern matcher that finds occurrences in parsed source.
pub struct Matcher<'p> {
    pattern: &'p Pattern,
}

impl<'p> Matcher<'p> {
    /// Creates a new matcher for the given pattern.
    #[must_use]
    pub const fn new(pattern: &'p Pattern) -> Self {
        Self { pattern }
    }

    /// Finds all matches of the pattern in the parsed source.
    ///
    /// Matching resumes from every candidate node whose normalised kind
    /// equals the pattern root's; candidates appear in pre-order traversal
    /// order.  An empty pattern yields an empty list.
    #[must_use]
    pub fn find_all<'a>(&self, parsed: &'a ParseResult) -> Vec<PatternMatch<'a>> {
        matching::find_all(self.pattern, parsed)
    }

    /// Finds the first match of the pattern in the parsed source.
    #[must_use]
    pub fn find_first<'a>(&self, parsed: &'a ParseResult) -> Option<PatternMatch<'a>> {
        matching::find_all(self.pattern, parsed).into_iter().next()
    }
}

impl Pattern {
    /// Finds all matches of this pattern in the parsed source.
    #[must_use]
    pub fn find_all<'a>(&self, parsed: &'a ParseResult) -> Vec<PatternMatch<'a>> {
        Matcher::new(self).find_all(parsed)
    }

    /// Finds the first match of this pattern in the parsed source.
    #[must_use]
    pub fn find_first<'a>(&self, parsed: &'a ParseResult) -> Option<PatternMatch<'a>> {
        Matcher::new(self).find_first(parsed)
    }
}

#[cfg(test)]
mod tests;
