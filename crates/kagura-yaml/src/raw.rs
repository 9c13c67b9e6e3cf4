//! Serde-facing document shapes.
//!
//! The raw shapes mirror the YAML surface with every field optional;
//! conversion into [`kagura_core::Rule`] enforces the single-generator
//! invariant that the open struct cannot express.

use kagura_core::Rule;
use serde::Deserialize;

use crate::error::RuleParseError;

/// The YAML surface of one rule.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawRule {
    pattern: Option<String>,
    any: Option<Vec<RawRule>>,
    inside: Option<Box<RawRule>>,
    contains: Option<Box<RawRule>>,
    follows: Option<Box<RawRule>>,
    precedes: Option<Box<RawRule>>,
    not: Option<Box<RawRule>>,
}

impl RawRule {
    /// Converts the raw shape into the rule model.
    pub(crate) fn into_rule(self) -> Result<Rule, RuleParseError> {
        let mut rule = match (self.pattern, self.any) {
            (Some(_), Some(_)) => return Err(RuleParseError::ConflictingGenerators),
            (Some(pattern), None) => Rule::pattern(pattern),
            (None, Some(sub_rules)) => Rule::any(
                sub_rules
                    .into_iter()
                    .map(Self::into_rule)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            (None, None) => Rule::empty(),
        };

        if let Some(nested) = self.inside {
            rule = rule.with_inside(nested.into_rule()?);
        }
        if let Some(nested) = self.contains {
            rule = rule.with_contains(nested.into_rule()?);
        }
        if let Some(nested) = self.follows {
            rule = rule.with_follows(nested.into_rule()?);
        }
        if let Some(nested) = self.precedes {
            rule = rule.with_precedes(nested.into_rule()?);
        }
        if let Some(nested) = self.not {
            rule = rule.with_not(nested.into_rule()?);
        }

        Ok(rule)
    }
}

/// The YAML surface of one batch entry.
///
/// Both fields are optional so that a malformed entry deserialises
/// rather than failing the whole batch; the loader drops incomplete
/// entries afterwards.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRuleEntry {
    pub(crate) id: Option<String>,
    pub(crate) rule: Option<RawRule>,
}

/// The YAML surface of a batch document.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRuleSet {
    pub(crate) rules: Vec<serde_yaml::Value>,
}
