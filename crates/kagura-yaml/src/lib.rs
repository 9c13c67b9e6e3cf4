//! YAML rule loader for the kagura rule engine.
//!
//! Turns textual rule descriptions into the [`kagura_core::Rule`] model.
//! Two surfaces are provided: [`parse_rule`] for a single rule document,
//! and [`parse_rule_set`] for a batch document of identified rule entries.
//!
//! A single rule document is strict: an unparseable document or one
//! declaring both generator clauses is an error.  A batch document is
//! lenient per entry: entries missing their identifier or rule body, or
//! whose rule fails to convert, are dropped and the rest of the batch
//! still loads.

mod entry;
mod error;
mod raw;

use raw::{RawRule, RawRuleEntry, RawRuleSet};

pub use entry::RuleEntry;
pub use error::RuleParseError;

use kagura_core::Rule;

/// Parses a single YAML rule document.
///
/// # Errors
///
/// Returns [`RuleParseError::Yaml`] when the document is not valid YAML
/// or does not have the rule shape, and
/// [`RuleParseError::ConflictingGenerators`] when a rule declares both
/// `pattern` and `any`.
pub fn parse_rule(yaml: &str) -> Result<Rule, RuleParseError> {
    let raw: RawRule = serde_yaml::from_str(yaml)?;
    raw.into_rule()
}

/// Parses a batch document of identified rule entries.
///
/// The document shape is a `rules` list whose items each carry an `id`
/// string and a `rule` body.  Malformed items are skipped; the returned
/// entries preserve document order.
///
/// # Errors
///
/// Returns [`RuleParseError::Yaml`] when the document itself is not
/// valid YAML or lacks the `rules` list.  Per-entry problems never
/// error.
pub fn parse_rule_set(yaml: &str) -> Result<Vec<RuleEntry>, RuleParseError> {
    let raw: RawRuleSet = serde_yaml::from_str(yaml)?;
    Ok(raw
        .rules
        .into_iter()
        .filter_map(entry_from_value)
        .collect())
}

fn entry_from_value(value: serde_yaml::Value) -> Option<RuleEntry> {
    let raw: RawRuleEntry = serde_yaml::from_value(value).ok()?;
    let id = raw.id?;
    let rule = raw.rule?.into_rule().ok()?;
    Some(RuleEntry::new(id, rule))
}

#[cfg(test)]
mod tests;
