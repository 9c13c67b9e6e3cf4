//! Placeholder binding map with first-binding-wins semantics.
//!
//! A [`Bindings`] value accumulates placeholder captures during one match
//! attempt.  Extension is non-destructive: [`Bindings::with`] returns a new
//! map, so a failed speculative branch (for example a rejected wildcard
//! anchor) never leaks partial captures into a sibling attempt.

use std::collections::BTreeMap;

/// Captured placeholder bindings for a single match derivation.
///
/// Keys are the placeholder tokens as written in the pattern (for example
/// `"$X"`), values are the reconstructed text of the captured subtree.
/// A placeholder binds on first occurrence; subsequent occurrences must
/// bind to textually identical content for the derivation to succeed.
///
/// # Example
///
/// ```
/// use kagura_core::Bindings;
///
/// let bindings = Bindings::new().with("$A", "x");
/// assert_eq!(bindings.get("$A"), Some("x"));
/// assert!(bindings.get("$B").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    inner: BTreeMap<String, String>,
}

impl Bindings {
    /// Creates an empty binding map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    /// Returns the captured text for `name`, if bound.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// Returns `true` if `name` is already bound.
    #[must_use]
    pub fn is_bound(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Returns a new map extended with `name` bound to `text`.
    ///
    /// An existing binding for `name` is replaced; callers enforce the
    /// first-binding-wins check before extending.
    #[must_use]
    pub fn with(&self, name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.inner.insert(name.into(), text.into());
        next
    }

    /// Returns `true` if every binding in this map agrees with `other`
    /// wherever both define the same placeholder.
    #[must_use]
    pub fn agrees_with(&self, other: &Self) -> bool {
        self.inner
            .iter()
            .all(|(name, text)| other.get(name).is_none_or(|existing| existing == text))
    }

    /// Returns the number of bound placeholders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if no placeholders are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over `(name, text)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }

    /// Consumes the map, returning the underlying ordered map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.inner
    }
}
