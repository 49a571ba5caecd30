//! The `NodeAccess` trait: read-only access to a tree snapshot.
//!
//! This is the whole surface the engine needs from a syntax tree. Lookups on
//! an index that does not belong to the tree are total: they report
//! `SyntaxKind::Unknown`, zero offsets and no links.

use super::base::NodeIndex;
use super::node::SyntaxKind;
use rustc_hash::FxHashSet;
use tsz_common::skip_trivia;

pub trait NodeAccess {
    /// Full text of the file the tree was built from.
    fn source_text(&self) -> &str;

    /// The source-file node.
    fn root(&self) -> NodeIndex;

    fn kind(&self, idx: NodeIndex) -> SyntaxKind;

    /// Full start of the node, leading trivia included.
    fn pos(&self, idx: NodeIndex) -> u32;

    fn end(&self, idx: NodeIndex) -> u32;

    fn parent(&self, idx: NodeIndex) -> Option<NodeIndex>;

    /// Children in source order.
    fn children(&self, idx: NodeIndex) -> &[NodeIndex];

    /// Width of the whitespace and comments between `pos` and the first token.
    fn leading_trivia_width(&self, idx: NodeIndex) -> u32 {
        let pos = self.pos(idx);
        skip_trivia(self.source_text(), pos, self.end(idx)) - pos
    }

    /// Start of the first token of the node.
    #[inline]
    fn start(&self, idx: NodeIndex) -> u32 {
        self.pos(idx) + self.leading_trivia_width(idx)
    }

    /// Source text of the node without leading trivia.
    fn node_text(&self, idx: NodeIndex) -> &str {
        let text = self.source_text();
        let start = (self.start(idx) as usize).min(text.len());
        let end = (self.end(idx) as usize).clamp(start, text.len());
        &text[start..end]
    }

    /// Source text of the node including leading trivia.
    fn full_text(&self, idx: NodeIndex) -> &str {
        let text = self.source_text();
        let pos = (self.pos(idx) as usize).min(text.len());
        let end = (self.end(idx) as usize).clamp(pos, text.len());
        &text[pos..end]
    }

    #[inline]
    fn is_kind(&self, idx: NodeIndex, kind: SyntaxKind) -> bool {
        self.kind(idx) == kind
    }
}

/// Walk from an identifier to its parent.
///
/// An identifier on its own is never a structurally meaningful unit for the
/// classifiers; its parent (property, declaration, tag name owner) is.
pub fn skip_identifier<T: NodeAccess + ?Sized>(tree: &T, idx: NodeIndex) -> NodeIndex {
    if tree.kind(idx).is_identifier() {
        tree.parent(idx).unwrap_or(idx)
    } else {
        idx
    }
}

/// Texts of every identifier node in the tree.
pub fn identifier_names<T: NodeAccess + ?Sized>(tree: &T) -> FxHashSet<&str> {
    let mut names = FxHashSet::default();
    let mut stack = vec![tree.root()];
    while let Some(idx) = stack.pop() {
        if tree.kind(idx).is_identifier() {
            names.insert(tree.node_text(idx));
        }
        stack.extend(tree.children(idx).iter().copied());
    }
    names
}
