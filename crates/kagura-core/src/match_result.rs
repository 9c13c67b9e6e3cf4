//! Match result type produced by pattern and rule evaluation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A match result produced by pattern or rule evaluation.
///
/// The `rule_id` is present only for rule-set lookups whose entries carry
/// an identifier; plain pattern searches leave it unset.  Bindings map
/// placeholder tokens (for example `"$X"`) to the captured text.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use kagura_core::{LineCol, Match, Span};
///
/// let span = Span::new(12, 24, LineCol::new(2, 1), LineCol::new(2, 13));
/// let m = Match::new(None, String::from("const x = 5"), span, BTreeMap::new());
/// assert!(m.rule_id().is_none());
/// assert_eq!(m.start_line(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Identifier of the rule that produced this match, if any.
    pub rule_id: Option<String>,
    /// Literal text of the matched region.
    pub text: String,
    /// The span of the match in the source.
    pub span: Span,
    /// Captured placeholder bindings keyed by placeholder token.
    pub bindings: BTreeMap<String, String>,
}

impl Match {
    /// Creates a new match result.
    #[must_use]
    pub const fn new(
        rule_id: Option<String>,
        text: String,
        span: Span,
        bindings: BTreeMap<String, String>,
    ) -> Self {
        Self {
            rule_id,
            text,
            span,
            bindings,
        }
    }

    /// Returns the rule identifier, if any.
    #[must_use]
    pub fn rule_id(&self) -> Option<&str> {
        self.rule_id.as_deref()
    }

    /// Returns the matched text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the match span.
    #[must_use]
    pub const fn span(&self) -> &Span {
        &self.span
    }

    /// Returns the one-based line on which the match starts.
    #[must_use]
    pub const fn start_line(&self) -> u32 {
        self.span.start.line
    }

    /// Returns the one-based line on which the match ends.
    #[must_use]
    pub const fn end_line(&self) -> u32 {
        self.span.end.line
    }

    /// Returns the captured bindings.
    #[must_use]
    pub const fn bindings(&self) -> &BTreeMap<String, String> {
        &self.bindings
    }
}
