//! Tree-sitter powered structural matching for the Kagura search engine.
//!
//! This crate provides the parsing and matching layer:
//!
//! - **Parsing** via [`Parser`] and [`ParseResult`], wrapping the
//!   Tree-sitter grammar for the selected language
//! - **Parse caching** via [`ParseCache`], a SHA-256 content-addressed LRU
//!   store in front of the parser
//! - **Pattern matching** via [`Pattern`] and [`Matcher`], which compare a
//!   compiled pattern against every structurally plausible subtree
//!
//! # Pattern Language
//!
//! Patterns are ordinary source snippets containing placeholder tokens:
//!
//! - `$NAME` — matches any single node, captures its text as `$NAME`, and
//!   constrains later occurrences of `$NAME` to identical text
//! - `$$$` — matches zero or more sibling nodes (valid in child position)
//!
//! # Example
//!
//! ```
//! use kagura_syntax::{Parser, Pattern, SupportedLanguage};
//!
//! let mut parser = Parser::new(SupportedLanguage::JavaScript)?;
//! let source = parser.parse("const x = 5;\nconsole.log(x);")?;
//!
//! let pattern = Pattern::compile("console.log($X)", SupportedLanguage::JavaScript)?;
//! for m in pattern.find_all(&source) {
//!     assert_eq!(m.bindings().get("$X"), Some("x"));
//! }
//! # Ok::<(), kagura_syntax::SyntaxError>(())
//! ```

mod cache;
mod error;
mod language;
mod matcher;
mod parser;
mod pattern;
mod position;
mod tokens;

pub use cache::ParseCache;
pub use error::SyntaxError;
pub use language::{LanguageParseError, SupportedLanguage};
pub use matcher::{Matcher, PatternMatch};
pub use parser::{ParseResult, Parser};
pub use pattern::Pattern;
pub use position::node_span;
