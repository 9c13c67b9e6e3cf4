//! Rule loading errors.

use thiserror::Error;

/// An error raised while loading a YAML rule document.
#[derive(Debug, Error)]
pub enum RuleParseError {
    /// The document was not valid YAML or did not have the rule shape.
    #[error("failed to parse YAML rule: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// A rule declared both `pattern` and `any` generator clauses.
    #[error("rule declares both `pattern` and `any` generator clauses")]
    ConflictingGenerators,
}
