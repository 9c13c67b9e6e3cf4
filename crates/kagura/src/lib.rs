//! Kagura: a structural code-search engine backed by Tree-sitter.
//!
//! This facade crate re-exports stable types from the internal crates and
//! provides the top-level [`Engine`] entrypoint for running pattern and
//! rule searches against source code.
//!
//! # Core types
//!
//! - [`SupportedLanguage`] — supported host language identifiers
//! - [`Span`] and [`LineCol`] — byte and line/column source positions
//! - [`Match`] — a successful lookup with captured bindings
//! - [`Bindings`] — placeholder captures from one match derivation
//! - [`Rule`] and [`RuleGenerator`] — the declarative rule model
//! - [`RuleEntry`] — an identified rule from a batch document
//! - [`EngineConfig`] — cache sizing
//! - [`Engine`] — the search entrypoint
//!
//! # Example
//!
//! ```no_run
//! use kagura::{Engine, SupportedLanguage};
//!
//! let mut engine = Engine::with_defaults(SupportedLanguage::JavaScript)?;
//! let matches = engine.find_pattern_matches("const x = 5;", "const $A = $B")?;
//! assert_eq!(matches.len(), 1);
//! # Ok::<(), kagura::EngineError>(())
//! ```

mod engine;
mod error;

pub use kagura_core::{Bindings, EngineConfig, LineCol, Match, Rule, RuleGenerator, Span};
pub use kagura_syntax::{ParseCache, Pattern, SupportedLanguage, SyntaxError};
pub use kagura_yaml::{RuleEntry, RuleParseError, parse_rule, parse_rule_set};

pub use engine::Engine;
pub use error::EngineError;

#[cfg(test)]
mod tests;
