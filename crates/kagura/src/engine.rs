//! The search engine entrypoint.
//!
//! The [`Engine`] owns a content-addressed parse cache for one host
//! language and exposes the three lookup surfaces: plain pattern search,
//! single-rule evaluation, and batch rule-set evaluation.  Rule
//! evaluation is recursive: every contextual predicate re-evaluates its
//! nested rule against the whole tree and filters the candidate set by
//! span relationship or node identity.

use kagura_core::{Bindings, EngineConfig, Match, Rule, RuleGenerator};
use kagura_syntax::{ParseCache, ParseResult, Pattern, PatternMatch, SupportedLanguage};

use crate::error::EngineError;

/// Structural code-search engine for one host language.
///
/// Holds the parse cache, so repeated lookups against identical source
/// text re-use the parsed tree.  The engine is not synchronised; a
/// multi-caller host must serialise access externally.
pub struct Engine {
    cache: ParseCache,
    language: SupportedLanguage,
}

impl Engine {
    /// Creates an engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying parser cannot be initialised.
    pub fn new(language: SupportedLanguage, config: &EngineConfig) -> Result<Self, EngineError> {
        Ok(Self {
            cache: ParseCache::new(language, config.cache_capacity())?,
            language,
        })
    }

    /// Creates an engine with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying parser cannot be initialised.
    pub fn with_defaults(language: SupportedLanguage) -> Result<Self, EngineError> {
        Self::new(language, &EngineConfig::default())
    }

    /// Returns the language this engine searches.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns the parse cache.
    #[must_use]
    pub const fn cache(&self) -> &ParseCache {
        &self.cache
    }

    /// Finds all occurrences of a pattern string in `source`.
    ///
    /// An empty pattern yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be parsed or the pattern
    /// cannot be compiled.
    pub fn find_pattern_matches(
        &mut self,
        source: &str,
        pattern_text: &str,
    ) -> Result<Vec<Match>, EngineError> {
        let parsed = self.cache.get_or_parse(source)?;
        let pattern = Pattern::compile(pattern_text, self.language)?;
        let matches = pattern.find_all(&parsed);
        tracing::debug!(pattern = pattern_text, count = matches.len(), "pattern search complete");
        Ok(matches.into_iter().map(|m| to_match(m, None)).collect())
    }

    /// Evaluates a single rule against `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be parsed or a pattern
    /// inside the rule cannot be compiled.
    pub fn find_matches_by_rule(
        &mut self,
        source: &str,
        rule: &Rule,
    ) -> Result<Vec<Match>, EngineError> {
        let parsed = self.cache.get_or_parse(source)?;
        let matches = evaluate(&parsed, rule, &Bindings::new(), self.language)?;
        Ok(matches.into_iter().map(|m| to_match(m, None)).collect())
    }

    /// Evaluates a YAML batch document of identified rules against
    /// `source`, concatenating results in document order.
    ///
    /// Each output match carries the identifier of the entry that
    /// produced it.  Malformed entries are dropped by the loader and the
    /// rest of the batch still runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch document itself cannot be loaded,
    /// the source cannot be parsed, or a pattern inside a surviving rule
    /// cannot be compiled.
    pub fn find_matches_by_rule_set(
        &mut self,
        source: &str,
        yaml: &str,
    ) -> Result<Vec<Match>, EngineError> {
        let entries = kagura_yaml::parse_rule_set(yaml)?;
        let parsed = self.cache.get_or_parse(source)?;

        let mut out = Vec::new();
        for entry in &entries {
            let matches = evaluate(&parsed, entry.rule(), &Bindings::new(), self.language)?;
            tracing::debug!(rule = entry.id(), count = matches.len(), "rule evaluated");
            out.extend(matches.into_iter().map(|m| to_match(m, Some(entry.id()))));
        }
        Ok(out)
    }
}

/// Recursively evaluates `rule`, returning the surviving matches in
/// generator order.
///
/// Base matches come from the generator clause; matches whose bindings
/// disagree with `inherited` are dropped; each contextual predicate then
/// evaluates its nested rule with the same inherited bindings and
/// filters the candidates.  Predicates are pure filters: their own
/// bindings never merge back into the surviving matches.
fn evaluate<'a>(
    parsed: &'a ParseResult,
    rule: &Rule,
    inherited: &Bindings,
    language: SupportedLanguage,
) -> Result<Vec<PatternMatch<'a>>, EngineError> {
    let mut matches = base_matches(parsed, rule, language)?;
    matches.retain(|m| m.bindings().agrees_with(inherited));

    if let Some(nested) = rule.inside() {
        let context = evaluate(parsed, nested, inherited, language)?;
        matches.retain(|m| context.iter().any(|c| m.span().is_inside(&c.span())));
    }
    if let Some(nested) = rule.contains() {
        let context = evaluate(parsed, nested, inherited, language)?;
        matches.retain(|m| context.iter().any(|c| m.span().contains(&c.span())));
    }
    if let Some(nested) = rule.follows() {
        let context = evaluate(parsed, nested, inherited, language)?;
        matches.retain(|m| context.iter().any(|c| m.span().follows(&c.span())));
    }
    if let Some(nested) = rule.precedes() {
        let context = evaluate(parsed, nested, inherited, language)?;
        matches.retain(|m| context.iter().any(|c| m.span().precedes(&c.span())));
    }
    if let Some(nested) = rule.not() {
        let excluded = evaluate(parsed, nested, inherited, language)?;
        matches.retain(|m| excluded.iter().all(|c| c.node().id() != m.node().id()));
    }

    Ok(matches)
}

/// Produces the base match set for a rule's generator clause.
///
/// `any` sub-rules are evaluated with empty inherited bindings; the
/// caller's binding-consistency filter applies to the union afterwards.
/// A rule without a generator yields no base matches.
fn base_matches<'a>(
    parsed: &'a ParseResult,
    rule: &Rule,
    language: SupportedLanguage,
) -> Result<Vec<PatternMatch<'a>>, EngineError> {
    match rule.generator() {
        Some(RuleGenerator::Pattern(text)) => {
            let pattern = Pattern::compile(text, language)?;
            Ok(pattern.find_all(parsed))
        }
        Some(RuleGenerator::Any(sub_rules)) => {
            let mut all = Vec::new();
            for sub_rule in sub_rules {
                all.extend(evaluate(parsed, sub_rule, &Bindings::new(), language)?);
            }
            Ok(all)
        }
        None => Ok(Vec::new()),
    }
}

fn to_match(m: PatternMatch<'_>, rule_id: Option<&str>) -> Match {
    let text = m.text().to_owned();
    let span = m.span();
    Match::new(
        rule_id.map(str::to_owned),
        text,
        span,
        m.into_bindings().into_map(),
    )
}
