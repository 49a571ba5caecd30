//! NodeArena: an in-memory tree snapshot.
//!
//! Nodes are added bottom-up, the way a parser finishes them: children first,
//! then the parent that owns them. Adding a parent fills in the children's
//! parent links. Leading trivia is measured from the source text when a node
//! is added, so callers only supply full-start and end offsets.

use super::base::NodeIndex;
use super::node::{Node, SyntaxKind};
use super::node_access::NodeAccess;
use tsz_common::skip_trivia;

#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    source_text: String,
    nodes: Vec<Node>,
    root: NodeIndex,
}

impl NodeArena {
    pub fn new(source_text: impl Into<String>) -> NodeArena {
        NodeArena {
            source_text: source_text.into(),
            nodes: Vec::new(),
            root: NodeIndex::NONE,
        }
    }

    /// Add a node spanning `pos..end` that owns `children`.
    ///
    /// Children must already be in the arena, be listed in source order and
    /// lie within `pos..end`.
    pub fn add_node(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        children: &[NodeIndex],
    ) -> NodeIndex {
        let end = end.min(self.source_text.len() as u32);
        let pos = pos.min(end);
        let start = skip_trivia(&self.source_text, pos, end);
        let idx = NodeIndex(self.nodes.len() as u32);

        for &child in children {
            if let Some(node) = self.nodes.get_mut(child.0 as usize) {
                debug_assert!(
                    node.pos >= pos && node.end <= end,
                    "child {:?} ({}..{}) escapes parent {:?} ({}..{})",
                    node.kind,
                    node.pos,
                    node.end,
                    kind,
                    pos,
                    end
                );
                node.parent = idx;
            }
        }

        self.nodes.push(Node {
            kind,
            pos,
            start,
            end,
            parent: NodeIndex::NONE,
            children: children.to_vec(),
        });
        idx
    }

    /// Add a leaf node.
    #[inline]
    pub fn add_token(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeIndex {
        self.add_node(kind, pos, end, &[])
    }

    /// Add the source-file node spanning the whole text and make it the root.
    pub fn add_source_file(&mut self, statements: &[NodeIndex]) -> NodeIndex {
        let end = self.source_text.len() as u32;
        let idx = self.add_node(SyntaxKind::SourceFile, 0, end, statements);
        self.root = idx;
        idx
    }

    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            None
        } else {
            self.nodes.get(idx.0 as usize)
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl NodeAccess for NodeArena {
    #[inline]
    fn source_text(&self) -> &str {
        &self.source_text
    }

    #[inline]
    fn root(&self) -> NodeIndex {
        self.root
    }

    #[inline]
    fn kind(&self, idx: NodeIndex) -> SyntaxKind {
        self.get(idx).map_or(SyntaxKind::Unknown, |node| node.kind)
    }

    #[inline]
    fn pos(&self, idx: NodeIndex) -> u32 {
        self.get(idx).map_or(0, |node| node.pos)
    }

    #[inline]
    fn end(&self, idx: NodeIndex) -> u32 {
        self.get(idx).map_or(0, |node| node.end)
    }

    #[inline]
    fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.get(idx).and_then(|node| node.parent.into_option())
    }

    #[inline]
    fn children(&self, idx: NodeIndex) -> &[NodeIndex] {
        match self.get(idx) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    #[inline]
    fn leading_trivia_width(&self, idx: NodeIndex) -> u32 {
        self.get(idx).map_or(0, Node::leading_trivia_width)
    }
}
