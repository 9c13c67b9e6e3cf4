//! Engine errors.

use thiserror::Error;

/// An error raised by the search engine.
///
/// Structural non-matches are never errors; a pattern that legitimately
/// matches nothing yields an empty result list.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Parsing source text or compiling a pattern failed.
    #[error(transparent)]
    Syntax(#[from] kagura_syntax::SyntaxError),
    /// A rule document could not be loaded.
    #[error(transparent)]
    Rule(#[from] kagura_yaml::RuleParseError),
}
