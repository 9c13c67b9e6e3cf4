//! Declarative rule model for contextual structural queries.
//!
//! A [`Rule`] pairs at most one *generator* clause (the part that produces
//! candidate matches) with any number of *contextual predicates* that
//! filter those candidates by their structural relationship to other
//! matches.  The generator is a tagged union, so "at most one of `pattern`
//! or `any`" holds by construction rather than by validation.

/// The match-producing clause of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleGenerator {
    /// A pattern string compiled and matched structurally.
    Pattern(String),
    /// The ordered union of the matches of several sub-rules.
    Any(Vec<Rule>),
}

/// A recursive rule: an optional generator plus contextual predicates.
///
/// A rule without a generator produces no base matches; its predicates
/// only ever filter an existing candidate set.  Predicates are applied
/// conjunctively, each against the whole source tree.
///
/// # Example
///
/// ```
/// use kagura_core::Rule;
///
/// let rule = Rule::pattern("console.log($$$)")
///     .with_inside(Rule::pattern("function $F() {$$$}"));
/// assert!(rule.generator().is_some());
/// assert!(rule.inside().is_some());
/// assert!(rule.not().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    generator: Option<RuleGenerator>,
    inside: Option<Box<Rule>>,
    contains: Option<Box<Rule>>,
    follows: Option<Box<Rule>>,
    precedes: Option<Box<Rule>>,
    not: Option<Box<Rule>>,
}

impl Rule {
    /// Creates a rule that matches a pattern string.
    #[must_use]
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            generator: Some(RuleGenerator::Pattern(pattern.into())),
            ..Self::default()
        }
    }

    /// Creates a rule that unions the matches of several sub-rules.
    #[must_use]
    pub fn any(rules: Vec<Self>) -> Self {
        Self {
            generator: Some(RuleGenerator::Any(rules)),
            ..Self::default()
        }
    }

    /// Creates a rule with no generator clause.
    ///
    /// Such a rule yields no matches on its own; this constructor exists
    /// for loaders that must represent degenerate rule documents.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Requires matches to lie within a match of `rule`.
    #[must_use]
    pub fn with_inside(mut self, rule: Self) -> Self {
        self.inside = Some(Box::new(rule));
        self
    }

    /// Requires matches to enclose a match of `rule`.
    #[must_use]
    pub fn with_contains(mut self, rule: Self) -> Self {
        self.contains = Some(Box::new(rule));
        self
    }

    /// Requires matches to begin at or after the end of a match of `rule`.
    #[must_use]
    pub fn with_follows(mut self, rule: Self) -> Self {
        self.follows = Some(Box::new(rule));
        self
    }

    /// Requires matches to end at or before the start of a match of `rule`.
    #[must_use]
    pub fn with_precedes(mut self, rule: Self) -> Self {
        self.precedes = Some(Box::new(rule));
        self
    }

    /// Excludes matches whose node also matches `rule`.
    #[must_use]
    pub fn with_not(mut self, rule: Self) -> Self {
        self.not = Some(Box::new(rule));
        self
    }

    /// Returns the generator clause, if present.
    #[must_use]
    pub const fn generator(&self) -> Option<&RuleGenerator> {
        self.generator.as_ref()
    }

    /// Returns the `inside` predicate, if present.
    #[must_use]
    pub fn inside(&self) -> Option<&Self> {
        self.inside.as_deref()
    }

    /// Returns the `contains` predicate, if present.
    #[must_use]
    pub fn contains(&self) -> Option<&Self> {
        self.contains.as_deref()
    }

    /// Returns the `follows` predicate, if present.
    #[must_use]
    pub fn follows(&self) -> Option<&Self> {
        self.follows.as_deref()
    }

    /// Returns the `precedes` predicate, if present.
    #[must_use]
    pub fn precedes(&self) -> Option<&Self> {
        self.precedes.as_deref()
    }

    /// Returns the `not` predicate, if present.
    #[must_use]
    pub fn not(&self) -> Option<&Self> {
        self.not.as_deref()
    }
}
