//! Identified rule entries from batch documents.

use kagura_core::Rule;

/// One entry of a batch rule document: a rule with its identifier.
///
/// The identifier is carried through to output matches but never
/// consumed by rule evaluation itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    id: String,
    rule: Rule,
}

impl RuleEntry {
    /// Creates an entry from an identifier and a rule.
    #[must_use]
    pub const fn new(id: String, rule: Rule) -> Self {
        Self { id, rule }
    }

    /// Returns the rule identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the rule body.
    #[must_use]
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Consumes the entry, returning its identifier and rule.
    #[must_use]
    pub fn into_parts(self) -> (String, Rule) {
        (self.id, self.rule)
    }
}
