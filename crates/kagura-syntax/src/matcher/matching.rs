//! The recursive comparison algorithm behind [`Matcher`](super::Matcher).
//!
//! Failure is a normal return value (`None`), never an error or panic, so
//! sibling and alternative attempts continue cleanly.  Bindings are
//! extended copy-on-write: every speculative step works on its own map, so
//! a failed branch cannot leak partial captures into the next attempt.

use kagura_core::Bindings;

use crate::matcher::PatternMatch;
use crate::matcher::context::MatchContext;
use crate::matcher::member;
use crate::parser::ParseResult;
use crate::pattern::Pattern;
use crate::tokens::{is_placeholder, is_separator_kind, is_wildcard_text, normalise_kind};

/// Finds all matches of `pattern` in `parsed`.
///
/// Candidate nodes are pre-filtered by normalised kind equality with the
/// pattern root, then each is run through the full recursive comparison
/// with a fresh binding map.
pub(super) fn find_all<'a>(pattern: &Pattern, parsed: &'a ParseResult) -> Vec<PatternMatch<'a>> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let ctx = MatchContext::new(parsed.source(), pattern.parsed().source());
    let pattern_root = pattern.root_node();
    let target_kind = normalise_kind(pattern_root.kind());

    let mut candidates = Vec::new();
    collect_candidates(parsed.root_node(), target_kind, &mut candidates);

    candidates
        .into_iter()
        .filter_map(|node| {
            nodes_match(node, pattern_root, &ctx, &Bindings::new()).map(|bindings| PatternMatch {
                node,
                source: ctx.source,
                bindings,
            })
        })
        .collect()
}

/// Collects every node whose normalised kind equals `kind`, in pre-order.
fn collect_candidates<'a>(
    node: tree_sitter::Node<'a>,
    kind: &str,
    out: &mut Vec<tree_sitter::Node<'a>>,
) {
    if normalise_kind(node.kind()) == kind {
        out.push(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_candidates(child, kind, out);
    }
}

/// Collects all children of `node` into a Vec for indexed sibling walking.
fn node_children(node: tree_sitter::Node<'_>) -> Vec<tree_sitter::Node<'_>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

/// Checks whether `source_node` matches `pattern_node`, returning the
/// extended bindings on success.
///
/// Separators on either side succeed vacuously; a wildcard pattern node
/// succeeds for this single comparison (its sibling-consuming behaviour
/// lives in [`match_children`]); a placeholder binds or checks the source
/// node's reconstructed text; member-access expressions take a dedicated
/// object/property decomposition path; anything else requires equal
/// normalised kinds, then leaf text equality or a pairwise child walk.
pub(super) fn nodes_match(
    source_node: tree_sitter::Node<'_>,
    pattern_node: tree_sitter::Node<'_>,
    ctx: &MatchContext<'_, '_>,
    bindings: &Bindings,
) -> Option<Bindings> {
    if is_separator_kind(source_node.kind()) || is_separator_kind(pattern_node.kind()) {
        return Some(bindings.clone());
    }

    let pattern_text = ctx.pattern_text(pattern_node);
    if is_wildcard_text(pattern_text) {
        return Some(bindings.clone());
    }

    if is_placeholder(pattern_node.kind(), pattern_text) {
        return bind_placeholder(pattern_text, source_node, ctx, bindings);
    }

    if pattern_node.kind() == member::MEMBER_EXPRESSION {
        return member::match_member(source_node, pattern_node, ctx, bindings);
    }

    if normalise_kind(source_node.kind()) != normalise_kind(pattern_node.kind()) {
        return None;
    }

    if source_node.child_count() == 0 {
        return (ctx.source_text(source_node) == pattern_text).then(|| bindings.clone());
    }

    match_children(source_node, pattern_node, ctx, bindings)
}

/// Binds `token` to the source node's reconstructed text, or checks an
/// existing binding for textual equality (first-binding-wins).
pub(super) fn bind_placeholder(
    token: &str,
    source_node: tree_sitter::Node<'_>,
    ctx: &MatchContext<'_, '_>,
    bindings: &Bindings,
) -> Option<Bindings> {
    let captured = reconstruct_text(source_node, ctx.source);
    match bindings.get(token) {
        Some(existing) => (existing == captured).then(|| bindings.clone()),
        None => Some(bindings.with(token, captured)),
    }
}

/// Advances `idx` past separator children.
fn skip_separators(children: &[tree_sitter::Node<'_>], mut idx: usize) -> usize {
    while children
        .get(idx)
        .is_some_and(|n| is_separator_kind(n.kind()))
    {
        idx += 1;
    }
    idx
}

/// Pairwise-compares children, skipping separators independently on both
/// sides and dispatching wildcard consumption.
///
/// After the pattern's children are exhausted the source must also be
/// exhausted (beyond trailing separators); leftover source children fail
/// the comparison.
fn match_children(
    source_node: tree_sitter::Node<'_>,
    pattern_node: tree_sitter::Node<'_>,
    ctx: &MatchContext<'_, '_>,
    bindings: &Bindings,
) -> Option<Bindings> {
    let source_children = node_children(source_node);
    let pattern_children = node_children(pattern_node);

    let mut current = bindings.clone();
    let mut source_idx = 0;
    let mut pattern_idx = 0;

    while pattern_idx < pattern_children.len() {
        pattern_idx = skip_separators(&pattern_children, pattern_idx);
        source_idx = skip_separators(&source_children, source_idx);

        let Some(pattern_child) = pattern_children.get(pattern_idx).copied() else {
            break;
        };

        if is_wildcard_text(ctx.pattern_text(pattern_child)) {
            return match pattern_children.get(pattern_idx + 1).copied() {
                // A trailing wildcard absorbs all remaining source children.
                None => Some(current),
                Some(remainder) => {
                    wildcard_scan(&source_children, source_idx, remainder, ctx, &current)
                }
            };
        }

        let source_child = source_children.get(source_idx).copied()?;
        current = nodes_match(source_child, pattern_child, ctx, &current)?;
        source_idx += 1;
        pattern_idx += 1;
    }

    source_idx = skip_separators(&source_children, source_idx);
    (source_idx == source_children.len()).then_some(current)
}

/// Scans forward for the first source child matching the pattern child
/// that follows a wildcard, and adopts that comparison's bindings.
///
/// This is a greedy, single-alternative policy: the first successful
/// anchor position wins and concludes the sibling walk; it is never
/// reconsidered.  That is the documented matching semantics, not an
/// incidental limitation.
fn wildcard_scan(
    source_children: &[tree_sitter::Node<'_>],
    start: usize,
    remainder: tree_sitter::Node<'_>,
    ctx: &MatchContext<'_, '_>,
    bindings: &Bindings,
) -> Option<Bindings> {
    let mut idx = start;
    while let Some(candidate) = source_children.get(idx).copied() {
        idx += 1;
        if is_separator_kind(candidate.kind()) {
            continue;
        }
        if let Some(next) = nodes_match(candidate, remainder, ctx, bindings) {
            return Some(next);
        }
    }
    None
}

/// Reconstructs the full text of a subtree for placeholder capture.
///
/// Leaves contribute their literal text; internal nodes concatenate every
/// child that is named or a non-separator token.  Incidental whitespace
/// between tokens is not reproduced, so formatting differences do not
/// break binding consistency.
pub(super) fn reconstruct_text(node: tree_sitter::Node<'_>, source: &str) -> String {
    if node.child_count() == 0 {
        return source.get(node.byte_range()).unwrap_or_default().to_owned();
    }

    let mut out = String::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.is_named() || !is_separator_kind(child.kind()) {
            out.push_str(&reconstruct_text(child, source));
        }
    }
    out
}
