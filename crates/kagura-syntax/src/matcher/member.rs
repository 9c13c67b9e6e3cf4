//! Member-access expression matching.
//!
//! Member accesses (`object.property`) nest left-recursively, so a chained
//! pattern like `$X.$Y.$Z` needs a decomposition walk rather than the
//! plain child comparison: the object side recurses through further member
//! accesses while the property side is always a leaf-like name.

use kagura_core::Bindings;

use crate::matcher::context::MatchContext;
use crate::matcher::matching::{bind_placeholder, nodes_match};
use crate::tokens::is_placeholder;

/// Node kind of a member-access expression.
pub(super) const MEMBER_EXPRESSION: &str = "member_expression";

/// Matches a member-access pattern against a source node.
///
/// Fails unless the source node is also a member access.  Object and
/// property parts must both match; bindings accumulate through both.
pub(super) fn match_member(
    source_node: tree_sitter::Node<'_>,
    pattern_node: tree_sitter::Node<'_>,
    ctx: &MatchContext<'_, '_>,
    bindings: &Bindings,
) -> Option<Bindings> {
    if source_node.kind() != MEMBER_EXPRESSION {
        return None;
    }

    let (source_object, source_property) = member_parts(source_node)?;
    let (pattern_object, pattern_property) = member_parts(pattern_node)?;

    let after_object = match_object(source_object, pattern_object, ctx, bindings)?;
    match_property(source_property, pattern_property, ctx, &after_object)
}

/// Matches the object part: a nested member access recurses into
/// [`match_member`], a placeholder binds against the object's
/// reconstructed text, anything else takes the general comparison.
fn match_object(
    source_object: tree_sitter::Node<'_>,
    pattern_object: tree_sitter::Node<'_>,
    ctx: &MatchContext<'_, '_>,
    bindings: &Bindings,
) -> Option<Bindings> {
    if pattern_object.kind() == MEMBER_EXPRESSION {
        return match_member(source_object, pattern_object, ctx, bindings);
    }

    let text = ctx.pattern_text(pattern_object);
    if is_placeholder(pattern_object.kind(), text) {
        return bind_placeholder(text, source_object, ctx, bindings);
    }

    nodes_match(source_object, pattern_object, ctx, bindings)
}

/// Matches the property part.  Properties are never decomposed further;
/// a non-placeholder property reduces to leaf comparison with the
/// property-name kind normalised to `identifier`.
fn match_property(
    source_property: tree_sitter::Node<'_>,
    pattern_property: tree_sitter::Node<'_>,
    ctx: &MatchContext<'_, '_>,
    bindings: &Bindings,
) -> Option<Bindings> {
    let text = ctx.pattern_text(pattern_property);
    if is_placeholder(pattern_property.kind(), text) {
        return bind_placeholder(text, source_property, ctx, bindings);
    }

    nodes_match(source_property, pattern_property, ctx, bindings)
}

/// Splits a member-access node into its object and property children.
///
/// The middle child is the `.` token.
fn member_parts(
    node: tree_sitter::Node<'_>,
) -> Option<(tree_sitter::Node<'_>, tree_sitter::Node<'_>)> {
    Some((node.child(0)?, node.child(2)?))
}
