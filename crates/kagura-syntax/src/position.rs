//! Position conversion helpers.
//!
//! Tree-sitter positions are zero-based; match output uses one-based line
//! and column numbers.

use kagura_core::{LineCol, Span};

/// Converts a Tree-sitter position (0-based) to one-based coordinates.
#[must_use]
fn point_to_one_based(pos: tree_sitter::Point) -> LineCol {
    // Line/column numbers will realistically never exceed u32::MAX.
    let line = u32::try_from(pos.row.saturating_add(1)).unwrap_or(u32::MAX);
    let column = u32::try_from(pos.column.saturating_add(1)).unwrap_or(u32::MAX);
    LineCol::new(line, column)
}

/// Builds a [`Span`] covering `node`, with one-based line/column positions.
#[must_use]
pub fn node_span(node: tree_sitter::Node<'_>) -> Span {
    let start_byte = u32::try_from(node.start_byte()).unwrap_or(u32::MAX);
    let end_byte = u32::try_from(node.end_byte()).unwrap_or(u32::MAX);
    Span::new(
        start_byte,
        end_byte,
        point_to_one_based(node.start_position()),
        point_to_one_based(node.end_position()),
    )
}
