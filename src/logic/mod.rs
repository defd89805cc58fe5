use std::collections::BTreeSet;
use std::fmt;

use crate::parsers::{ParseError, Result};

pub mod diagnostic;
pub mod node;
pub mod view;

pub use diagnostic::Diagnostic;
pub use node::{BinaryConnective, Connective, Node, NodeKind};
pub use view::{NodeRef, MISSING_CHILD};

// use of ids across different trees is undefined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    node: Node,
    // non-owning, set once when the node is attached
    parent: Option<NodeId>,
}

/// Typed syntax tree of a propositional formula.
///
/// Nodes are stored in an arena and refer to each other through [`NodeId`]s.
/// The root always lives at index 0. Once handed out by the parser the tree
/// is never mutated again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicTree {
    entries: Vec<Entry>,
    diagnostics: Vec<Diagnostic>,
}

impl LogicTree {
    pub(crate) fn new() -> Self {
        LogicTree {
            entries: vec![Entry {
                node: Node::root(),
                parent: None,
            }],
            diagnostics: vec![],
        }
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        self.entries.push(Entry { node, parent: None });
        NodeId(self.entries.len() - 1)
    }

    // fills the next free slot of `parent` with `child`
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        debug_assert!(self.entries[child.0].parent.is_none());
        let node = &mut self.entries[parent.0].node;
        let kind = node.kind();
        match node.next_free_slot() {
            Some(slot) => *slot = Some(child),
            None => return Err(ParseError::ChildLimit(kind)),
        }
        self.entries[child.0].parent = Some(parent);
        Ok(())
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    // every slot filled, checked once the builder is done
    pub(crate) fn check_complete(&self) -> Result<()> {
        match self.entries.iter().find(|entry| !entry.node.is_complete()) {
            Some(entry) => Err(ParseError::IncompleteNode(entry.node.kind())),
            None => Ok(()),
        }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, self.root_id())
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.entries.len()).then(|| NodeRef::new(self, id))
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.entries[id.0].node
    }

    pub(crate) fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.entries[id.0].parent
    }

    /// Number of nodes. A tree always holds its root, so this is at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Pre-order walk, children visited left to right.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: vec![self.root_id()],
        }
    }

    /// Distinct atom letters, sorted.
    pub fn atoms(&self) -> BTreeSet<char> {
        self.iter().filter_map(|node| node.letter()).collect()
    }

    // edges on the longest path from the root; 0 for a bare root
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root_id(), 0)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in self.node(id).slots().into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }
}

impl fmt::Display for LogicTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root(), f)
    }
}

pub struct PreOrder<'t> {
    tree: &'t LogicTree,
    stack: Vec<NodeId>,
}

impl<'t> Iterator for PreOrder<'t> {
    type Item = NodeRef<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let [first, second] = self.tree.node(id).slots();
        // pushed in reverse so the left child is visited first
        self.stack.extend(second);
        self.stack.extend(first);
        Some(NodeRef::new(self.tree, id))
    }
}

impl<'t> IntoIterator for &'t LogicTree {
    type Item = NodeRef<'t>;
    type IntoIter = PreOrder<'t>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
