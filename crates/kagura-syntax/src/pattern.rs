//! Pattern compilation for structural matching.
//!
//! A pattern is an ordinary source snippet, parsed with the same grammar as
//! the source it will be matched against.  Compilation is deliberately
//! lenient: a bare `$$$` in statement position only parses thanks to
//! Tree-sitter's error recovery, so patterns are never rejected for
//! containing ERROR nodes.

use crate::error::SyntaxError;
use crate::language::SupportedLanguage;
use crate::parser::{ParseResult, Parser};

/// A compiled structural pattern.
///
/// The grammar wraps every snippet in program/statement productions; the
/// pattern root skips that chain so matching starts from the smallest
/// meaningful construct (see [`Pattern::root_node`]).
#[derive(Debug)]
pub struct Pattern {
    source: String,
    language: SupportedLanguage,
    parsed: ParseResult,
}

impl Pattern {
    /// Compiles a pattern string for the given language.
    ///
    /// # Errors
    ///
    /// Returns an error only if the parser itself fails; snippets that
    /// parse with recovered errors still compile.
    pub fn compile(source: &str, language: SupportedLanguage) -> Result<Self, SyntaxError> {
        let mut parser = Parser::new(language)?;
        let parsed = parser.parse(source)?;

        Ok(Self {
            source: source.to_owned(),
            language,
            parsed,
        })
    }

    /// Returns the original pattern source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the language this pattern is compiled for.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns the parsed syntax tree of the pattern.
    #[must_use]
    pub const fn parsed(&self) -> &ParseResult {
        &self.parsed
    }

    /// Returns `true` if the pattern contains no matchable content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.trim().is_empty()
    }

    /// Returns the pattern root: the deepest node reached by descending
    /// through single-child wrappers from the parse root.
    #[must_use]
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        let mut current = self.parsed.root_node();
        while current.child_count() == 1 {
            let Some(only) = current.child(0) else { break };
            current = only;
        }
        current
    }
}
