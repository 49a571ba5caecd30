//! Position classification.
//!
//! Locates the most specific node enclosing an offset. Containment is tested
//! against a node's trivia-stripped start, so an offset inside the whitespace
//! or comments ahead of a node does not belong to it. Children are visited
//! in source order and the first containing child wins.

use crate::parser::base::NodeIndex;
use crate::parser::node_access::NodeAccess;
use tsz_common::limits::MAX_NODE_FIND_DEPTH;

/// How a node's end boundary is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EndBoundary {
    /// `start <= offset < end`
    Exclusive,
    /// `start <= offset <= end`
    Inclusive,
}

#[inline]
fn contains<T: NodeAccess + ?Sized>(
    tree: &T,
    idx: NodeIndex,
    offset: u32,
    boundary: EndBoundary,
) -> bool {
    if offset < tree.start(idx) {
        return false;
    }
    match boundary {
        EndBoundary::Exclusive => offset < tree.end(idx),
        EndBoundary::Inclusive => offset <= tree.end(idx),
    }
}

fn descend<T: NodeAccess + ?Sized>(
    tree: &T,
    offset: u32,
    boundary: EndBoundary,
    max_depth: u32,
) -> Option<NodeIndex> {
    let root = tree.root();
    if root.is_none() || !contains(tree, root, offset, boundary) {
        return None;
    }

    let max_depth = max_depth.min(MAX_NODE_FIND_DEPTH);
    let mut current = root;
    let mut depth = 1;
    while depth < max_depth {
        let next = tree
            .children(current)
            .iter()
            .copied()
            .find(|&child| contains(tree, child, offset, boundary));
        match next {
            Some(child) => {
                current = child;
                depth += 1;
            }
            None => break,
        }
    }
    Some(current)
}

/// The deepest node whose range `[start, end)` contains `offset`.
///
/// Returns `None` when the offset falls outside the root's trivia-stripped
/// content (for example in leading whitespace of the file, or past its end).
pub fn find_node_at_offset<T: NodeAccess + ?Sized>(tree: &T, offset: u32) -> Option<NodeIndex> {
    descend(tree, offset, EndBoundary::Exclusive, u32::MAX)
}

/// Like [`find_node_at_offset`], but the end boundary is inclusive.
///
/// An offset equal to a node's end still matches it, which is how a caret
/// sitting exactly after `</div>` resolves to the closing element.
pub fn find_node_at_exact_offset<T: NodeAccess + ?Sized>(
    tree: &T,
    offset: u32,
) -> Option<NodeIndex> {
    descend(tree, offset, EndBoundary::Inclusive, u32::MAX)
}

/// Like [`find_node_at_offset`], but stops after `max_depth` levels.
///
/// The root counts as level 1, so `max_depth == 2` yields the top-level
/// statement containing the offset.
pub fn find_node_at_max_depth<T: NodeAccess + ?Sized>(
    tree: &T,
    offset: u32,
    max_depth: u32,
) -> Option<NodeIndex> {
    descend(tree, offset, EndBoundary::Exclusive, max_depth)
}
